use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECONDS, MIN_HTTP_TIMEOUT_SECONDS, cadence, env_vars, settings,
};
use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod settings_handle;
pub mod validation;

pub use settings_handle::SettingsHandle;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Teams offered as quick picks when choosing favorites
const POPULAR_TEAMS: &[&str] = &[
    "India",
    "Australia",
    "England",
    "Pakistan",
    "South Africa",
    "New Zealand",
    "Sri Lanka",
    "West Indies",
    "Bangladesh",
    "Afghanistan",
    "Zimbabwe",
    "Ireland",
    "Netherlands",
];

/// User settings for the score display.
///
/// Every field has a default so a partial (or empty) config file loads.
/// Out-of-range numbers are clamped while reading and on every setter,
/// never rejected.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Teams to show. Empty means every match is shown.
    pub favorite_teams: BTreeSet<String>,
    /// Key appended to the primary endpoint as `apikey`
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_non_empty"
    )]
    pub api_key: Option<String>,
    /// Replaces the default primary endpoint when set
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_non_empty"
    )]
    pub custom_api_url: Option<String>,
    /// Secondary endpoint tried when the primary yields nothing
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_non_empty"
    )]
    pub fallback_api_url: Option<String>,
    /// Serve the built-in demonstration matches when every endpoint is empty
    pub demo_fallback: bool,
    #[serde(deserialize_with = "deserialize_update_interval")]
    pub update_interval_seconds: u64,
    pub show_animations: bool,
    #[serde(deserialize_with = "deserialize_brightness")]
    pub brightness: u8,
    #[serde(deserialize_with = "deserialize_scroll_speed")]
    pub scroll_speed_ms: u64,
    #[serde(deserialize_with = "deserialize_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            favorite_teams: BTreeSet::new(),
            api_key: None,
            custom_api_url: None,
            fallback_api_url: None,
            demo_fallback: true,
            update_interval_seconds: cadence::DEFAULT_REFRESH_SECONDS,
            show_animations: settings::DEFAULT_SHOW_ANIMATIONS,
            brightness: settings::DEFAULT_BRIGHTNESS,
            scroll_speed_ms: settings::DEFAULT_SCROLL_SPEED_MS,
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
            log_file_path: None,
        }
    }
}

fn clamp_brightness(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

fn clamp_update_interval(seconds: i64) -> u64 {
    (seconds.max(0) as u64).max(cadence::MIN_REFRESH_SECONDS)
}

fn clamp_scroll_speed(ms: i64) -> u64 {
    (ms.max(0) as u64).max(settings::MIN_SCROLL_SPEED_MS)
}

fn clamp_http_timeout(seconds: i64) -> u64 {
    (seconds.max(0) as u64).max(MIN_HTTP_TIMEOUT_SECONDS)
}

fn deserialize_brightness<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    i64::deserialize(deserializer).map(clamp_brightness)
}

fn deserialize_update_interval<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<u64, D::Error> {
    i64::deserialize(deserializer).map(clamp_update_interval)
}

fn deserialize_scroll_speed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    i64::deserialize(deserializer).map(clamp_scroll_speed)
}

fn deserialize_http_timeout<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    i64::deserialize(deserializer).map(clamp_http_timeout)
}

/// Treats blank strings as "not set"
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn deserialize_non_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<String>::deserialize(deserializer).map(non_empty)
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the defaults. Environment variables can override
    /// config file values.
    ///
    /// # Environment Variables
    /// - `CRICKET_GLYPH_API_KEY` - Override API key
    /// - `CRICKET_GLYPH_API_URL` - Override primary endpoint
    /// - `CRICKET_GLYPH_LOG_FILE` - Override log file path
    /// - `CRICKET_GLYPH_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 10)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `CRICKET_GLYPH_*` environment overrides on top of the loaded values
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.set_api_key(Some(api_key));
        }

        if let Ok(api_url) = std::env::var(env_vars::API_URL) {
            self.set_custom_api_url(Some(api_url));
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok())
        {
            self.set_http_timeout(timeout);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            self.custom_api_url.as_deref(),
            self.fallback_api_url.as_deref(),
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory when needed.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Defaults are in use)");
        }

        let config = Config::load().await?;
        let favorites = if config.favorite_teams.is_empty() {
            "(none - all matches shown)".to_string()
        } else {
            config
                .favorite_teams
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        };

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Favorite Teams:");
        println!("{favorites}");
        println!("────────────────────────────────────");
        println!("API Endpoint:");
        println!("{}", config.primary_api_url());
        println!("API Key:");
        println!(
            "{}",
            if config.api_key.is_some() {
                "(set)"
            } else {
                "(not set)"
            }
        );
        println!("Fallback Endpoint:");
        println!(
            "{}",
            config.fallback_api_url.as_deref().unwrap_or("(not set)")
        );
        println!("Demo Fallback:");
        println!("{}", config.demo_fallback);
        println!("────────────────────────────────────");
        println!("Update Interval:");
        println!("{} seconds", config.update_interval_seconds);
        println!("Animations:");
        println!("{}", if config.show_animations { "on" } else { "off" });
        println!("Brightness:");
        println!("{}", config.brightness);
        println!("Scroll Speed:");
        println!("{} ms", config.scroll_speed_ms);
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/cricket_glyph.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Endpoint used for the primary request
    pub fn primary_api_url(&self) -> &str {
        self.custom_api_url
            .as_deref()
            .unwrap_or(crate::constants::PRIMARY_API_URL)
    }

    /// Adds a favorite team. Returns false if it was already present or blank.
    pub fn add_favorite_team(&mut self, team: &str) -> bool {
        let team = team.trim();
        if team.is_empty() {
            return false;
        }
        self.favorite_teams.insert(team.to_string())
    }

    /// Removes a favorite team. Returns false if it was not present.
    pub fn remove_favorite_team(&mut self, team: &str) -> bool {
        self.favorite_teams.remove(team.trim())
    }

    pub fn set_favorite_teams<I, S>(&mut self, teams: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.favorite_teams.clear();
        for team in teams {
            self.add_favorite_team(team.as_ref());
        }
    }

    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.api_key = non_empty(api_key);
    }

    pub fn set_custom_api_url(&mut self, url: Option<String>) {
        self.custom_api_url = non_empty(url);
    }

    pub fn set_fallback_api_url(&mut self, url: Option<String>) {
        self.fallback_api_url = non_empty(url);
    }

    /// Sets the refresh interval, raising it to the minimum if needed
    pub fn set_update_interval(&mut self, seconds: i64) {
        self.update_interval_seconds = clamp_update_interval(seconds);
    }

    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.show_animations = enabled;
    }

    /// Sets display brightness, clamped into 0-255
    pub fn set_brightness(&mut self, brightness: i64) {
        self.brightness = clamp_brightness(brightness);
    }

    pub fn set_scroll_speed(&mut self, speed_ms: i64) {
        self.scroll_speed_ms = clamp_scroll_speed(speed_ms);
    }

    /// Sets the HTTP connect and read timeout, raising it to one second if needed
    pub fn set_http_timeout(&mut self, seconds: i64) {
        self.http_timeout_seconds = clamp_http_timeout(seconds);
    }

    /// Resets everything except the log file location
    pub fn reset_to_defaults(&mut self) {
        let log_file_path = self.log_file_path.take();
        *self = Config {
            log_file_path,
            ..Config::default()
        };
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_seconds.max(cadence::MIN_REFRESH_SECONDS))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds.max(MIN_HTTP_TIMEOUT_SECONDS))
    }

    pub fn scroll_speed(&self) -> Duration {
        Duration::from_millis(self.scroll_speed_ms.max(settings::MIN_SCROLL_SPEED_MS))
    }

    /// Quick-pick team names
    pub fn popular_teams() -> &'static [&'static str] {
        POPULAR_TEAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
favorite_teams = ["India", "England"]
api_key = "secret"
custom_api_url = "https://api.example.com/live"
update_interval_seconds = 60
brightness = 128
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.favorite_teams.len(), 2);
        assert!(config.favorite_teams.contains("India"));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.primary_api_url(), "https://api.example.com/live");
        assert_eq!(config.update_interval_seconds, 60);
        assert_eq!(config.brightness, 128);
        // Absent fields fall back to defaults
        assert!(config.show_animations);
        assert_eq!(config.scroll_speed_ms, 100);
        assert!(config.demo_fallback);
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.update_interval_seconds, 30);
        assert_eq!(config.brightness, 255);
        assert_eq!(config.primary_api_url(), crate::constants::PRIMARY_API_URL);
    }

    #[tokio::test]
    async fn test_config_load_clamps_out_of_range_values() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_content = r#"
brightness = 900
update_interval_seconds = 1
scroll_speed_ms = -5
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.brightness, 255);
        assert_eq!(config.update_interval_seconds, 10);
        assert_eq!(config.scroll_speed_ms, 10);
    }

    #[tokio::test]
    async fn test_config_load_treats_blank_strings_as_unset() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_content = r#"
api_key = ""
custom_api_url = "  "
fallback_api_url = ""
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_key, None);
        assert_eq!(config.custom_api_url, None);
        assert_eq!(config.fallback_api_url, None);
        assert_eq!(config.primary_api_url(), crate::constants::PRIMARY_API_URL);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_config_load_raises_zero_http_timeout() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "http_timeout_seconds = 0\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.http_timeout_seconds, 1);
        assert_eq!(config.http_timeout(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let mut original_config = Config::default();
        original_config.set_favorite_teams(["India", "Australia"]);
        original_config.set_api_key(Some("abc".to_string()));
        original_config.set_brightness(42);
        original_config.set_animations_enabled(false);

        original_config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_set_brightness_clamps() {
        let mut config = Config::default();
        config.set_brightness(-20);
        assert_eq!(config.brightness, 0);
        config.set_brightness(300);
        assert_eq!(config.brightness, 255);
        config.set_brightness(100);
        assert_eq!(config.brightness, 100);
    }

    #[test]
    fn test_set_update_interval_respects_minimum() {
        let mut config = Config::default();
        config.set_update_interval(3);
        assert_eq!(config.refresh_interval(), Duration::from_secs(10));
        config.set_update_interval(45);
        assert_eq!(config.refresh_interval(), Duration::from_secs(45));
    }

    #[test]
    fn test_favorite_teams_are_unique_and_trimmed() {
        let mut config = Config::default();
        assert!(config.add_favorite_team("India"));
        assert!(!config.add_favorite_team(" India "));
        assert!(!config.add_favorite_team("   "));
        assert_eq!(config.favorite_teams.len(), 1);

        assert!(config.remove_favorite_team("India"));
        assert!(!config.remove_favorite_team("India"));
        assert!(config.favorite_teams.is_empty());
    }

    #[test]
    fn test_blank_api_key_and_url_clear_the_setting() {
        let mut config = Config::default();
        config.set_api_key(Some("key".to_string()));
        config.set_api_key(Some("  ".to_string()));
        assert_eq!(config.api_key, None);

        config.set_custom_api_url(Some("".to_string()));
        assert_eq!(config.custom_api_url, None);
    }

    #[test]
    fn test_reset_to_defaults_keeps_log_path() {
        let mut config = Config::default();
        config.add_favorite_team("India");
        config.set_brightness(10);
        config.log_file_path = Some("/tmp/cricket.log".to_string());

        config.reset_to_defaults();

        assert!(config.favorite_teams.is_empty());
        assert_eq!(config.brightness, 255);
        assert_eq!(config.log_file_path.as_deref(), Some("/tmp/cricket.log"));
    }

    #[test]
    fn test_popular_teams_include_major_nations() {
        let teams = Config::popular_teams();
        assert!(teams.contains(&"India"));
        assert!(teams.contains(&"Netherlands"));
        assert_eq!(teams.len(), 13);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var(env_vars::API_KEY, "env-key");
            std::env::set_var(env_vars::API_URL, "https://env.example.com/live");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "3");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::API_KEY);
            std::env::remove_var(env_vars::API_URL);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.primary_api_url(), "https://env.example.com/live");
        assert_eq!(config.http_timeout_seconds, 3);
    }

    #[test]
    #[serial]
    fn test_zero_http_timeout_from_env_is_raised() {
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "0");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        assert_eq!(config.http_timeout_seconds, 1);
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("cricket_glyph"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("cricket_glyph"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
