pub mod core;
pub mod fallback;
pub mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use core::MatchFetcher;
pub use fallback::{FallbackSource, demo_matches};
pub use fetch_utils::{fetch_matches, fetch_text};
pub use http_client::create_http_client_with_timeout;
pub use urls::{build_primary_url, redact_api_key};
