pub mod normalizer;
pub mod run_rates;

pub use normalizer::*;
pub use run_rates::*;
