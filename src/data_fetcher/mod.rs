pub mod api;
pub mod cache;
pub mod filter;
pub mod models;
pub mod processors;

pub use api::MatchFetcher;
pub use filter::filter_matches;
pub use models::MatchRecord;
pub use processors::parse_matches;
