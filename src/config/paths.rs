use std::path::Path;

const APP_DIR: &str = "cricket_glyph";

/// Returns the platform-specific path for the config file.
///
/// Uses the platform config directory (e.g. `~/.config` on Linux) and falls
/// back to the current directory if it is unavailable.
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR)
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR)
        .join("logs")
        .to_string_lossy()
        .to_string()
}
