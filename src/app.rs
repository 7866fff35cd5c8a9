use cricket_glyph::config::{Config, SettingsHandle};
use cricket_glyph::data_fetcher::MatchFetcher;
use cricket_glyph::display::TerminalRenderer;
use cricket_glyph::error::AppError;
use cricket_glyph::runtime::{ScoreToy, ToyEvent};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

const KEY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a key press asks for
#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Toy(ToyEvent),
    Refresh,
    Quit,
    Ignore,
}

fn key_action(key: &KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('m') | KeyCode::Char(' ') => KeyAction::Toy(ToyEvent::LongPress),
        KeyCode::Char('r') => KeyAction::Refresh,
        _ => KeyAction::Ignore,
    }
}

/// Run the interactive application flow.
///
/// - Sets up terminal raw mode and alternate screen
/// - Runs the refresh and tick cadences until the user quits
/// - Cleans up terminal state even when the loop fails
pub async fn run_interactive(config: Config) -> Result<(), AppError> {
    let settings = SettingsHandle::new(config);
    let fetcher = Arc::new(MatchFetcher::new(settings.clone())?);

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, SetTitle("Cricket Glyph"), EnterAlternateScreen, Hide)?;

    let toy = ScoreToy::start(fetcher, settings, TerminalRenderer::new(stdout(), true));
    let result = input_loop(&toy).await;
    toy.shutdown().await;

    execute!(out, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}

async fn input_loop(toy: &ScoreToy) -> Result<(), AppError> {
    loop {
        let ready = tokio::task::block_in_place(|| event::poll(KEY_POLL_INTERVAL))?;
        if !ready {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match key_action(&key) {
                KeyAction::Quit => {
                    tracing::info!("Quit requested");
                    return Ok(());
                }
                KeyAction::Refresh => toy.trigger_refresh(),
                KeyAction::Toy(event) => toy.send(event).await,
                KeyAction::Ignore => {}
            }
        }
    }
}
