//! Refresh and tick cadences driving the display

pub mod events;
pub mod scheduler;

pub use events::{ToyAction, ToyEvent};
pub use scheduler::ScoreToy;
