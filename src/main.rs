mod app;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update};
use cricket_glyph::config::Config;
use cricket_glyph::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.version {
        commands::handle_version_command();
        return Ok(());
    }

    if args.popular_teams {
        commands::handle_popular_teams_command();
        return Ok(());
    }

    if is_config_update(&args) {
        commands::handle_config_update_command(&args).await?;
        if !args.list_config {
            return Ok(());
        }
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    let config = Config::load().await?;

    if args.once || args.debug {
        return commands::handle_once_command(config).await;
    }

    app::run_interactive(config).await
}
