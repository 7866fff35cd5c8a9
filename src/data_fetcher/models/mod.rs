pub mod match_record;
pub mod wire;

pub use match_record::*;
pub use wire::*;
