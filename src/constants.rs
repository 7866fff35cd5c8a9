//! Application-wide constants and configuration values
//!
//! This module centralizes timing, cache and display constants so the
//! fetcher, the display controller and the scheduler agree on them.

/// Default endpoint for live match data
pub const PRIMARY_API_URL: &str = "https://api.cricketdata.org/cpl_2024_fixtures";

/// User agent sent with every API request
pub const USER_AGENT: &str = "CricketGlyphToy/1.0";

/// Default timeout for HTTP requests in seconds (applied to connect and read separately)
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Lowest HTTP timeout accepted from settings or the environment
pub const MIN_HTTP_TIMEOUT_SECONDS: u64 = 1;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Cache TTL values
pub mod cache_ttl {
    /// A cached match list is served for this long after a successful fetch
    pub const MATCH_LIST_MS: u64 = 15_000;
}

/// Scheduler cadences
pub mod cadence {
    /// Default refresh interval in seconds
    pub const DEFAULT_REFRESH_SECONDS: u64 = 30;

    /// Lowest refresh interval accepted from settings
    pub const MIN_REFRESH_SECONDS: u64 = 10;

    /// Scroll/animation tick interval (fixed)
    pub const TICK_MS: u64 = 150;

    /// Capacity of the display event channel
    pub const EVENT_CHANNEL_CAPACITY: usize = 64;
}

/// Settings defaults and limits
pub mod settings {
    pub const DEFAULT_BRIGHTNESS: u8 = 255;
    pub const DEFAULT_SCROLL_SPEED_MS: u64 = 100;
    pub const MIN_SCROLL_SPEED_MS: u64 = 10;
    pub const DEFAULT_SHOW_ANIMATIONS: bool = true;
}

/// Cricket rules assumed by the derived statistics
pub mod match_rules {
    /// Required run rate is computed against a fixed-length innings
    pub const ASSUMED_INNINGS_OVERS: f64 = 20.0;
}

/// Glyph matrix layout
pub mod layout {
    /// Visible width of the matrix in character cells
    pub const DISPLAY_COLUMNS: usize = 25;
    /// Blank cells between the end of a scrolling text and its restart
    pub const MARQUEE_GAP: usize = 3;

    pub const SCORE_TEXT_X: i32 = 8;
    pub const TEXT_X: i32 = 0;
    pub const TEXT_Y: i32 = 12;

    pub const BALL_X: i32 = 2;
    pub const BALL_BASE_Y: i32 = 10;
    pub const BALL_RADIUS: u32 = 5;
    pub const BALL_SCALE: u8 = 80;

    /// Animation phase step per frame
    pub const BALL_PHASE_STEP: f64 = 0.3;
    /// Vertical bounce amplitude in pixels
    pub const BALL_AMPLITUDE: f64 = 3.0;

    pub const BRIGHTNESS_SCORE: u8 = 255;
    pub const BRIGHTNESS_STATS: u8 = 240;
    pub const BRIGHTNESS_STATUS: u8 = 255;
    pub const BRIGHTNESS_NOTICE: u8 = 200;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API key override
    pub const API_KEY: &str = "CRICKET_GLYPH_API_KEY";

    /// Environment variable for endpoint override
    pub const API_URL: &str = "CRICKET_GLYPH_API_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "CRICKET_GLYPH_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "CRICKET_GLYPH_HTTP_TIMEOUT";
}

