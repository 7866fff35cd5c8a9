use crate::cli::Args;
use cricket_glyph::config::{Config, SettingsHandle};
use cricket_glyph::data_fetcher::{MatchFetcher, filter_matches};
use cricket_glyph::display::{DisplayController, DisplayEvent, FrameRenderer, TerminalRenderer};
use cricket_glyph::error::AppError;
use cricket_glyph::{NAME, VERSION};
use std::io::stdout;
use std::path::Path;

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{NAME} {VERSION}");
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles the --popular-teams command.
pub fn handle_popular_teams_command() {
    println!("Popular teams:");
    for team in Config::popular_teams() {
        println!("  {team}");
    }
    println!("\nAdd one with: {NAME} --add-team \"<team>\"");
}

/// Loads the stored configuration without environment overrides, so
/// overrides never end up persisted.
async fn load_stored_config() -> Result<Config, AppError> {
    let config_path = Config::get_config_path();
    if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await
    } else {
        Ok(Config::default())
    }
}

/// Applies every configuration flag in `args` to `config`.
///
/// Reset runs first so it can be combined with new values.
pub fn apply_config_updates(config: &mut Config, args: &Args) {
    if args.reset_config {
        config.reset_to_defaults();
        println!("Configuration reset to defaults.");
    }

    if let Some(team) = &args.add_team {
        if config.add_favorite_team(team) {
            println!("Added favorite team: {}", team.trim());
        } else {
            println!("'{}' is already a favorite or is blank.", team.trim());
        }
    }

    if let Some(team) = &args.remove_team {
        if config.remove_favorite_team(team) {
            println!("Removed favorite team: {}", team.trim());
        } else {
            println!("'{}' is not a favorite team.", team.trim());
        }
    }

    if let Some(api_key) = &args.set_api_key {
        config.set_api_key(Some(api_key.clone()));
    }

    if let Some(url) = &args.set_api_url {
        config.set_custom_api_url(Some(url.clone()));
    }

    if let Some(url) = &args.set_fallback_url {
        config.set_fallback_api_url(Some(url.clone()));
    }

    if let Some(seconds) = args.set_interval {
        config.set_update_interval(seconds);
    }

    if let Some(level) = args.set_brightness {
        config.set_brightness(level);
    }

    if let Some(speed) = args.set_scroll_speed {
        config.set_scroll_speed(speed);
    }

    if args.toggle_animations {
        config.set_animations_enabled(!config.show_animations);
        println!(
            "Animations {}.",
            if config.show_animations { "on" } else { "off" }
        );
    }
}

/// Handles the configuration update flags (--add-team, --set-brightness, ...).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = load_stored_config().await?;
    apply_config_updates(&mut config, args);
    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Handles the --once command.
///
/// Fetches once, renders the resulting view as plain text and exits. Fetch
/// failures are shown like on the display, not returned.
pub async fn handle_once_command(config: Config) -> Result<(), AppError> {
    let favorites = config.favorite_teams.clone();
    let settings = SettingsHandle::new(config.clone());
    let fetcher = MatchFetcher::new(settings)?;

    let result = fetcher
        .fetch_live_matches()
        .await
        .map(|matches| filter_matches(matches, &favorites));

    let mut controller = DisplayController::new();
    let frame = controller
        .handle_event(DisplayEvent::Refresh(result), &config)
        .unwrap_or_else(|| controller.render(&config));

    let mut renderer = TerminalRenderer::new(stdout(), false);
    renderer.render(&frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_updates_are_applied_and_clamped() {
        let args = Args::parse_from([
            "cricket_glyph",
            "--add-team",
            " India ",
            "--set-brightness",
            "300",
            "--set-interval",
            "3",
            "--toggle-animations",
        ]);
        let mut config = Config::default();
        apply_config_updates(&mut config, &args);

        assert!(config.favorite_teams.contains("India"));
        assert_eq!(config.brightness, 255);
        assert_eq!(config.update_interval_seconds, 10);
        assert!(!config.show_animations);
    }

    #[test]
    fn test_reset_runs_before_new_values() {
        let args = Args::parse_from([
            "cricket_glyph",
            "--reset-config",
            "--add-team",
            "England",
        ]);
        let mut config = Config::default();
        config.add_favorite_team("India");
        config.set_brightness(10);
        apply_config_updates(&mut config, &args);

        assert_eq!(config.favorite_teams.len(), 1);
        assert!(config.favorite_teams.contains("England"));
        assert_eq!(config.brightness, 255);
    }

    #[test]
    fn test_empty_values_clear_optional_settings() {
        let args = Args::parse_from(["cricket_glyph", "--set-api-key", "", "--set-api-url", ""]);
        let mut config = Config::default();
        config.set_api_key(Some("secret".to_string()));
        config.set_custom_api_url(Some("https://example.com/live".to_string()));
        apply_config_updates(&mut config, &args);

        assert_eq!(config.api_key, None);
        assert_eq!(config.custom_api_url, None);
    }
}
