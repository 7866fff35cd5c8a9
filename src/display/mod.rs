//! What the glyph display shows and how it gets there

pub mod controller;
pub mod formatting;
pub mod frame;
pub mod mode;
pub mod renderer;

pub use controller::{DisplayController, DisplayEvent, DisplayState, View};
pub use frame::{Frame, FrameBuilder, GlyphContent, GlyphObject, ImageAsset};
pub use mode::DisplayMode;
pub use renderer::{FrameRenderer, TerminalRenderer};
