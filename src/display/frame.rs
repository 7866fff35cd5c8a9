//! Object graph handed to the renderer.
//!
//! A frame holds positioned glyph objects in two layers. Brightness on each
//! object is already scaled by the configured display brightness.

/// Image assets the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAsset {
    /// Filled circle of the given radius
    CricketBall { radius: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphContent {
    Text(String),
    Image(ImageAsset),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphObject {
    pub content: GlyphContent,
    pub x: i32,
    pub y: i32,
    pub brightness: u8,
    /// Percent of native size
    pub scale: Option<u8>,
}

impl GlyphObject {
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(GlyphContent::Text(text.into()))
    }

    pub fn image(asset: ImageAsset) -> Self {
        Self::with_content(GlyphContent::Image(asset))
    }

    fn with_content(content: GlyphContent) -> Self {
        Self {
            content,
            x: 0,
            y: 0,
            brightness: u8::MAX,
            scale: None,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn scale(mut self, scale: u8) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            GlyphContent::Text(text) => Some(text),
            GlyphContent::Image(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub top: Vec<GlyphObject>,
    pub mid: Vec<GlyphObject>,
    /// Marquee offset in characters for text wider than the display
    pub scroll_offset: usize,
}

impl Frame {
    pub fn builder() -> FrameBuilder {
        FrameBuilder::default()
    }

    /// All objects, top layer first
    pub fn objects(&self) -> impl Iterator<Item = &GlyphObject> {
        self.top.iter().chain(self.mid.iter())
    }

    pub fn text_lines(&self) -> Vec<&str> {
        self.objects().filter_map(GlyphObject::as_text).collect()
    }

    /// Text of the first text object, which is the headline of every view
    pub fn primary_text(&self) -> Option<&str> {
        self.objects().find_map(GlyphObject::as_text)
    }
}

#[derive(Debug, Default)]
pub struct FrameBuilder {
    frame: Frame,
}

impl FrameBuilder {
    pub fn add_top(mut self, object: GlyphObject) -> Self {
        self.frame.top.push(object);
        self
    }

    pub fn add_mid(mut self, object: GlyphObject) -> Self {
        self.frame.mid.push(object);
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.frame.scroll_offset = offset;
        self
    }

    pub fn build(self) -> Frame {
        self.frame
    }
}

/// Scales a view's base brightness by the configured brightness (0-255)
pub fn scale_brightness(base: u8, configured: u8) -> u8 {
    let scaled = u16::from(base) * u16::from(configured) / u16::from(u8::MAX);
    u8::try_from(scaled).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_brightness() {
        assert_eq!(scale_brightness(255, 255), 255);
        assert_eq!(scale_brightness(240, 255), 240);
        assert_eq!(scale_brightness(200, 0), 0);
        assert_eq!(scale_brightness(255, 128), 128);
    }

    #[test]
    fn test_builder_orders_layers() {
        let frame = Frame::builder()
            .add_mid(GlyphObject::text("mid"))
            .add_top(GlyphObject::image(ImageAsset::CricketBall { radius: 5 }).scale(80))
            .add_top(GlyphObject::text("top").at(0, 12).brightness(200))
            .build();

        assert_eq!(frame.text_lines(), vec!["top", "mid"]);
        assert_eq!(frame.primary_text(), Some("top"));
        assert_eq!(frame.top[0].scale, Some(80));
        assert_eq!((frame.top[1].x, frame.top[1].y), (0, 12));
        assert_eq!(frame.top[1].brightness, 200);
    }
}
