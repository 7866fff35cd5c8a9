pub mod match_cache;
pub mod types;

pub use match_cache::*;
pub use types::*;
