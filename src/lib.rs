//! Live cricket scores for a small glyph display
//!
//! This library fetches live matches with caching and failover, normalizes
//! them, filters them by favorite team and drives a mode-cycling display
//! loop that hands positioned glyph frames to a renderer.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cricket_glyph::config::{Config, SettingsHandle};
//! use cricket_glyph::data_fetcher::{MatchFetcher, filter_matches};
//! use cricket_glyph::display::{DisplayController, DisplayEvent};
//! use cricket_glyph::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let mut config = Config::default();
//!     config.add_favorite_team("India");
//!
//!     let fetcher = MatchFetcher::new(SettingsHandle::new(config.clone()))?;
//!     let result = fetcher
//!         .fetch_live_matches()
//!         .await
//!         .map(|matches| filter_matches(matches, &config.favorite_teams));
//!
//!     let mut controller = DisplayController::new();
//!     if let Some(frame) = controller.handle_event(DisplayEvent::Refresh(result), &config) {
//!         for line in frame.text_lines() {
//!             println!("{line}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod runtime;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::{Config, SettingsHandle};
pub use data_fetcher::{MatchFetcher, MatchRecord, filter_matches, parse_matches};
pub use display::{DisplayController, DisplayEvent, DisplayMode, Frame, FrameRenderer};
pub use error::AppError;
pub use runtime::{ScoreToy, ToyEvent};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
