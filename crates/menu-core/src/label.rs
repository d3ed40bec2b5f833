use crate::constants::*;
use crate::error::MenuError;

/// Fixed styling of a label bitmap; every panel uses the same canvas size and font.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    pub width: u32,
    pub height: u32,
    pub font: &'static str,
    pub font_px: f32,
    pub text_origin: [f64; 2],
    pub backdrop_css: &'static str,
    pub backdrop_rgba: [u8; 4],
    pub text_css: &'static str,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            width: LABEL_CANVAS_WIDTH,
            height: LABEL_CANVAS_HEIGHT,
            font: LABEL_FONT,
            font_px: LABEL_FONT_PX,
            text_origin: LABEL_TEXT_ORIGIN,
            backdrop_css: LABEL_BACKDROP_CSS,
            backdrop_rgba: LABEL_BACKDROP_RGBA,
            text_css: LABEL_TEXT_CSS,
        }
    }
}

/// Tightly packed RGBA8 pixels, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelBitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl LabelBitmap {
    /// A bitmap filled with the style's backdrop color and no glyphs.
    pub fn backdrop(style: &LabelStyle) -> Self {
        let texels = (style.width * style.height) as usize;
        let rgba = style
            .backdrop_rgba
            .iter()
            .copied()
            .cycle()
            .take(texels * 4)
            .collect();
        Self {
            width: style.width,
            height: style.height,
            rgba,
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    pub fn is_well_formed(&self) -> bool {
        self.rgba.len() == (self.width * self.height * 4) as usize
    }
}

/// Turns label text into a texture source. The web front-end draws into an
/// offscreen 2D canvas and the native front-end rasterizes glyphs with an
/// embedded font. [`BackdropRasterizer`] draws no text and serves headless hosts.
pub trait LabelRasterizer {
    fn rasterize(&mut self, text: &str, style: &LabelStyle) -> Result<LabelBitmap, MenuError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BackdropRasterizer;

impl LabelRasterizer for BackdropRasterizer {
    fn rasterize(&mut self, _text: &str, style: &LabelStyle) -> Result<LabelBitmap, MenuError> {
        Ok(LabelBitmap::backdrop(style))
    }
}
