//! Rendering collaborators.
//!
//! The pipeline only builds [`Frame`]s; a [`FrameRenderer`] decides how they
//! reach a device. [`TerminalRenderer`] draws them as text with crossterm.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use unicode_width::UnicodeWidthChar;

use super::frame::{Frame, GlyphContent, GlyphObject, ImageAsset};
use crate::constants::layout::{DISPLAY_COLUMNS, MARQUEE_GAP};
use crate::error::AppError;

pub trait FrameRenderer: Send {
    fn render(&mut self, frame: &Frame) -> Result<(), AppError>;

    /// Blanks the device on shutdown
    fn turn_off(&mut self) -> Result<(), AppError> {
        Ok(())
    }
}

impl<R: FrameRenderer + ?Sized> FrameRenderer for Box<R> {
    fn render(&mut self, frame: &Frame) -> Result<(), AppError> {
        (**self).render(frame)
    }

    fn turn_off(&mut self) -> Result<(), AppError> {
        (**self).turn_off()
    }
}

/// Draws frames as a small marquee.
///
/// In interactive mode every frame repaints from the top-left corner of the
/// alternate screen and long text scrolls; otherwise each frame is appended
/// as plain, unscrolled lines.
pub struct TerminalRenderer<W: Write + Send> {
    out: W,
    interactive: bool,
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_object(&mut self, object: &GlyphObject, scroll_offset: usize) -> Result<(), AppError> {
        let line = match &object.content {
            GlyphContent::Text(text) if self.interactive => {
                marquee_window(text, scroll_offset, DISPLAY_COLUMNS)
            }
            GlyphContent::Text(text) => text.clone(),
            GlyphContent::Image(ImageAsset::CricketBall { .. }) => {
                let indent = usize::try_from(object.x).unwrap_or(0);
                format!("{}●", " ".repeat(indent))
            }
        };

        if self.interactive {
            let level = object.brightness;
            queue!(
                self.out,
                SetForegroundColor(Color::Rgb {
                    r: level,
                    g: level,
                    b: level,
                }),
                Print(line),
                ResetColor,
                Print("\r\n")
            )?;
        } else {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

impl<W: Write + Send> FrameRenderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<(), AppError> {
        if self.interactive {
            queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        }
        for object in frame.objects() {
            self.draw_object(object, frame.scroll_offset)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), AppError> {
        if self.interactive {
            queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// Returns at most `columns` cells of `text`, starting `offset` cells into a
/// loop of the text followed by a gap. Text that fits is returned unchanged.
pub fn marquee_window(text: &str, offset: usize, columns: usize) -> String {
    let cells: Vec<(char, usize)> = text
        .chars()
        .map(|c| (c, c.width().unwrap_or(0)))
        .collect();
    let total_width: usize = cells.iter().map(|(_, width)| width).sum();
    if total_width <= columns {
        return text.to_string();
    }

    let looped: Vec<(char, usize)> = cells
        .into_iter()
        .chain(std::iter::repeat_n((' ', 1), MARQUEE_GAP))
        .collect();
    let start = offset % looped.len();

    let mut window = String::new();
    let mut used = 0;
    for (c, width) in looped.iter().cycle().skip(start) {
        if used + width > columns {
            break;
        }
        window.push(*c);
        used += width;
    }
    window
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::frame::GlyphObject;

    #[test]
    fn test_short_text_is_not_scrolled() {
        assert_eq!(marquee_window("No live matches", 7, 25), "No live matches");
    }

    #[test]
    fn test_long_text_scrolls_and_loops() {
        let text = "India 185/5 (20.0) vs Australia";
        assert_eq!(marquee_window(text, 0, 10), "India 185/");
        assert_eq!(marquee_window(text, 6, 10), "185/5 (20.");

        let loop_len = text.chars().count() + MARQUEE_GAP;
        assert_eq!(marquee_window(text, loop_len, 10), "India 185/");
    }

    #[test]
    fn test_wide_characters_never_overflow() {
        let window = marquee_window("🔴 LIVE: India 185/5 (20.0) vs Australia", 0, 5);
        let width: usize = window.chars().map(|c| c.width().unwrap_or(0)).sum();
        assert!(width <= 5);
        assert!(window.starts_with('🔴'));
    }

    #[test]
    fn test_plain_renderer_prints_lines() {
        let mut renderer = TerminalRenderer::new(Vec::new(), false);
        let frame = Frame::builder()
            .add_top(GlyphObject::image(ImageAsset::CricketBall { radius: 5 }).at(2, 10))
            .add_mid(GlyphObject::text("No live matches"))
            .build();

        renderer.render(&frame).unwrap();
        renderer.turn_off().unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "  ●\nNo live matches\n");
    }
}
