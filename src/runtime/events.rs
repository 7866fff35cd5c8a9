use crate::data_fetcher::models::MatchRecord;
use crate::display::DisplayEvent;
use crate::error::AppError;

/// Signals from the host device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToyEvent {
    /// Long press on the glyph button
    LongPress,
    ButtonDown,
    ButtonUp,
    /// Periodic update request while the display is suspended
    DisplayUpdate,
}

/// Where a [`ToyEvent`] is routed
#[derive(Debug)]
pub enum ToyAction {
    Display(DisplayEvent),
    Refresh,
}

impl ToyEvent {
    pub fn action(self) -> ToyAction {
        match self {
            ToyEvent::LongPress => ToyAction::Display(DisplayEvent::ModeCycle),
            ToyEvent::ButtonDown => ToyAction::Display(DisplayEvent::ButtonDown),
            ToyEvent::ButtonUp => ToyAction::Display(DisplayEvent::ButtonUp),
            ToyEvent::DisplayUpdate => ToyAction::Refresh,
        }
    }
}

/// Messages consumed by the display task
#[derive(Debug)]
pub(crate) enum DisplayMessage {
    /// Fetch outcome tagged with the refresh cycle that produced it
    Refreshed {
        generation: u64,
        result: Result<Vec<MatchRecord>, AppError>,
    },
    Event(DisplayEvent),
}
