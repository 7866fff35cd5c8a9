use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when any flag asks to change the stored configuration
pub fn is_config_update(args: &Args) -> bool {
    args.add_team.is_some()
        || args.remove_team.is_some()
        || args.set_api_key.is_some()
        || args.set_api_url.is_some()
        || args.set_fallback_url.is_some()
        || args.set_interval.is_some()
        || args.set_brightness.is_some()
        || args.set_scroll_speed.is_some()
        || args.toggle_animations
        || args.reset_config
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (render once and exit)
/// - config operations are requested
/// - --version or --popular-teams is set
/// - --debug mode is enabled (debug mode always runs once and exits)
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || is_config_update(args)
        || args.list_config
        || args.popular_teams
        || args.version
        || args.debug
}

/// Live cricket scores on a tiny glyph display
///
/// Fetches live matches, filters them by your favorite teams and shows one
/// match at a time as a scrolling marquee with a bouncing ball.
///
/// In interactive mode (default):
/// - Press 'm' or space to switch between score, run rate, overs and status
/// - Press 'r' to refresh now
/// - Press 'q' or Esc to quit
///
/// Scores refresh every 30 seconds unless configured otherwise.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show the current match once and exit immediately. Useful for scripts
    /// or quick score checks.
    #[arg(short, long)]
    pub once: bool,

    /// Add a favorite team. Only matches involving a favorite are shown.
    #[arg(long = "add-team", value_name = "TEAM", help_heading = "Configuration")]
    pub add_team: Option<String>,

    /// Remove a favorite team
    #[arg(long = "remove-team", value_name = "TEAM", help_heading = "Configuration")]
    pub remove_team: Option<String>,

    /// Set the API key sent with every request. An empty value clears it.
    #[arg(long = "set-api-key", value_name = "KEY", help_heading = "Configuration")]
    pub set_api_key: Option<String>,

    /// Replace the primary endpoint. An empty value restores the default.
    #[arg(long = "set-api-url", value_name = "URL", help_heading = "Configuration")]
    pub set_api_url: Option<String>,

    /// Set a secondary endpoint tried when the primary has no matches.
    /// An empty value clears it.
    #[arg(long = "set-fallback-url", value_name = "URL", help_heading = "Configuration")]
    pub set_fallback_url: Option<String>,

    /// Set the refresh interval in seconds (minimum 10)
    #[arg(
        long = "set-interval",
        value_name = "SECONDS",
        allow_negative_numbers = true,
        help_heading = "Configuration"
    )]
    pub set_interval: Option<i64>,

    /// Set the display brightness, clamped to 0-255
    #[arg(
        long = "set-brightness",
        value_name = "LEVEL",
        allow_negative_numbers = true,
        help_heading = "Configuration"
    )]
    pub set_brightness: Option<i64>,

    /// Set the marquee scroll speed in milliseconds per character (minimum 10)
    #[arg(
        long = "set-scroll-speed",
        value_name = "MS",
        allow_negative_numbers = true,
        help_heading = "Configuration"
    )]
    pub set_scroll_speed: Option<i64>,

    /// Turn animations on or off
    #[arg(long = "toggle-animations", help_heading = "Configuration")]
    pub toggle_animations: bool,

    /// Restore every setting to its default
    #[arg(long = "reset-config", help_heading = "Configuration")]
    pub reset_config: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// List popular teams to pick favorites from
    #[arg(long = "popular-teams", help_heading = "Info")]
    pub popular_teams: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode: render once, and also write logs to the terminal
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_are_interactive() {
        let args = Args::parse_from(["cricket_glyph"]);
        assert!(!is_noninteractive_mode(&args));
        assert!(!is_config_update(&args));
    }

    #[test]
    fn test_config_flags_are_noninteractive() {
        let args = Args::parse_from(["cricket_glyph", "--add-team", "India"]);
        assert_eq!(args.add_team.as_deref(), Some("India"));
        assert!(is_config_update(&args));
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_negative_brightness_parses_for_clamping() {
        let args = Args::parse_from(["cricket_glyph", "--set-brightness", "-5"]);
        assert_eq!(args.set_brightness, Some(-5));
    }

    #[test]
    fn test_once_and_debug_flags() {
        let args = Args::parse_from(["cricket_glyph", "--once"]);
        assert!(args.once);
        assert!(is_noninteractive_mode(&args));

        let args = Args::parse_from(["cricket_glyph", "--debug"]);
        assert!(is_noninteractive_mode(&args));
    }
}
