//! Display state machine.
//!
//! The controller holds the filtered match list and the display counters.
//! It is owned by a single task and only changes in response to
//! [`DisplayEvent`]s; every event that changes what is on screen yields the
//! new [`Frame`].

use tracing::{debug, info};

use super::formatting::{
    LOADING_TEXT, format_error, format_overs_summary, format_run_rate, format_score,
    format_status, no_matches_message,
};
use super::frame::{Frame, GlyphObject, ImageAsset, scale_brightness};
use super::mode::DisplayMode;
use crate::config::Config;
use crate::constants::{cadence, layout};
use crate::data_fetcher::models::MatchRecord;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub mode: DisplayMode,
    /// Always within `0..match_count` while matches are held
    pub current_index: usize,
    pub scroll_position: u64,
    pub animation_frame: u64,
}

/// What the screen is showing apart from the mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Nothing fetched yet
    #[default]
    Loading,
    Matches,
    NoMatches,
    Error(String),
}

#[derive(Debug)]
pub enum DisplayEvent {
    /// Outcome of a fetch, already filtered by favorite teams
    Refresh(Result<Vec<MatchRecord>, AppError>),
    /// Long press
    ModeCycle,
    /// Scroll and animation cadence
    Tick,
    ButtonDown,
    ButtonUp,
}

#[derive(Debug, Default)]
pub struct DisplayController {
    state: DisplayState,
    matches: Vec<MatchRecord>,
    view: View,
}

impl DisplayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn current_match(&self) -> Option<&MatchRecord> {
        self.matches.get(self.state.current_index)
    }

    /// Applies one event and returns the frame to show, if the screen changed.
    pub fn handle_event(&mut self, event: DisplayEvent, config: &Config) -> Option<Frame> {
        match event {
            DisplayEvent::Refresh(Ok(matches)) => {
                self.apply_matches(matches);
                Some(self.render(config))
            }
            DisplayEvent::Refresh(Err(error)) => {
                debug!("Showing fetch failure: {error}");
                self.view = View::Error(error.to_string());
                Some(self.render(config))
            }
            DisplayEvent::ModeCycle => {
                if self.matches.is_empty() {
                    debug!("Mode cycle ignored, no matches held");
                    return None;
                }
                self.state.mode = self.state.mode.next();
                self.view = View::Matches;
                info!("Switched to display mode: {}", self.state.mode);
                Some(self.render(config))
            }
            DisplayEvent::Tick => {
                self.state.scroll_position = self.state.scroll_position.wrapping_add(1);
                self.state.animation_frame = self.state.animation_frame.wrapping_add(1);
                (self.view == View::Matches).then(|| self.render(config))
            }
            DisplayEvent::ButtonDown => {
                debug!("Button down");
                None
            }
            DisplayEvent::ButtonUp => {
                debug!("Button up");
                None
            }
        }
    }

    fn apply_matches(&mut self, matches: Vec<MatchRecord>) {
        self.matches = matches;
        if self.state.current_index >= self.matches.len() {
            self.state.current_index = 0;
        }
        self.view = if self.matches.is_empty() {
            View::NoMatches
        } else {
            View::Matches
        };
        debug!("Updated matches: {} matches held", self.matches.len());
    }

    /// Builds the frame for the current view without changing any state
    pub fn render(&self, config: &Config) -> Frame {
        match (&self.view, self.current_match()) {
            (View::Matches, Some(record)) => self.render_match(record, config),
            (View::Error(description), _) => {
                notice_frame(format_error(description), layout::BRIGHTNESS_NOTICE, config)
            }
            (View::Loading, _) => notice_frame(LOADING_TEXT, layout::BRIGHTNESS_NOTICE, config),
            (View::Matches | View::NoMatches, _) => notice_frame(
                no_matches_message(!config.favorite_teams.is_empty()),
                layout::BRIGHTNESS_NOTICE,
                config,
            ),
        }
    }

    fn render_match(&self, record: &MatchRecord, config: &Config) -> Frame {
        let (text, base_brightness) = match self.state.mode {
            DisplayMode::Score => return self.render_score(record, config),
            DisplayMode::RunRate => (format_run_rate(record), layout::BRIGHTNESS_STATS),
            DisplayMode::Overs => (format_overs_summary(record), layout::BRIGHTNESS_STATS),
            DisplayMode::MatchStatus => (format_status(record), layout::BRIGHTNESS_STATUS),
        };

        Frame::builder()
            .add_top(
                GlyphObject::text(text)
                    .at(layout::TEXT_X, layout::TEXT_Y)
                    .brightness(scale_brightness(base_brightness, config.brightness)),
            )
            .scroll_offset(self.scroll_offset(config))
            .build()
    }

    fn render_score(&self, record: &MatchRecord, config: &Config) -> Frame {
        let ball = GlyphObject::image(ImageAsset::CricketBall {
            radius: layout::BALL_RADIUS,
        })
        .at(layout::BALL_X, layout::BALL_BASE_Y + self.ball_offset(config))
        .brightness(scale_brightness(layout::BRIGHTNESS_SCORE, config.brightness))
        .scale(layout::BALL_SCALE);

        let score = GlyphObject::text(format_score(record))
            .at(layout::SCORE_TEXT_X, layout::TEXT_Y)
            .brightness(scale_brightness(layout::BRIGHTNESS_SCORE, config.brightness));

        Frame::builder()
            .add_top(ball)
            .add_mid(score)
            .scroll_offset(self.scroll_offset(config))
            .build()
    }

    /// Vertical bounce of the ball, within `-BALL_AMPLITUDE..=BALL_AMPLITUDE`
    fn ball_offset(&self, config: &Config) -> i32 {
        if !config.show_animations {
            return 0;
        }
        let phase = self.state.animation_frame as f64 * layout::BALL_PHASE_STEP;
        (phase.sin() * layout::BALL_AMPLITUDE) as i32
    }

    /// Characters scrolled so far at the configured speed
    fn scroll_offset(&self, config: &Config) -> usize {
        if !config.show_animations {
            return 0;
        }
        let elapsed_ms = u128::from(self.state.scroll_position) * u128::from(cadence::TICK_MS);
        let per_character_ms = config.scroll_speed().as_millis().max(1);
        usize::try_from(elapsed_ms / per_character_ms).unwrap_or(usize::MAX)
    }
}

fn notice_frame(text: impl Into<String>, base_brightness: u8, config: &Config) -> Frame {
    Frame::builder()
        .add_top(
            GlyphObject::text(text)
                .at(layout::TEXT_X, layout::TEXT_Y)
                .brightness(scale_brightness(base_brightness, config.brightness)),
        )
        .build()
}
