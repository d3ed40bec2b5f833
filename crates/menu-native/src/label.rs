use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::{Font, FontSettings};
use menu_core::{LabelBitmap, LabelRasterizer, LabelStyle, MenuError};

// DejaVu Sans stands in for the browser's Arial; see assets/DejaVuSans-LICENSE.txt.
static LABEL_FONT_TTF: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/DejaVuSans.ttf"
));

/// Rasterizes label text with an embedded font, white over the style's
/// backdrop, with the baseline at `style.text_origin` like canvas `fillText`.
pub struct FontLabelRasterizer {
    font: Font,
    layout: Layout,
}

impl FontLabelRasterizer {
    pub fn new() -> anyhow::Result<Self> {
        let font = Font::from_bytes(LABEL_FONT_TTF, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("label font: {e}"))?;
        Ok(Self {
            font,
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        })
    }
}

impl LabelRasterizer for FontLabelRasterizer {
    fn rasterize(&mut self, text: &str, style: &LabelStyle) -> Result<LabelBitmap, MenuError> {
        let mut bitmap = LabelBitmap::backdrop(style);
        let ascent = self
            .font
            .horizontal_line_metrics(style.font_px)
            .map(|m| m.ascent)
            .unwrap_or(style.font_px);
        let [x, baseline] = style.text_origin;
        self.layout.reset(&LayoutSettings {
            x: x as f32,
            y: baseline as f32 - ascent,
            ..LayoutSettings::default()
        });
        self.layout
            .append(&[&self.font], &TextStyle::new(text, style.font_px, 0));

        for glyph in self.layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let (metrics, coverage) = self.font.rasterize_config(glyph.key);
            blend_white(
                &mut bitmap,
                glyph.x.round() as i32,
                glyph.y.round() as i32,
                metrics.width,
                &coverage,
            );
        }
        log::debug!("[label] rasterized {:?} ({} glyphs)", text, self.layout.glyphs().len());
        Ok(bitmap)
    }
}

/// Source-over blend of white with per-pixel `coverage`, clipped to the bitmap.
fn blend_white(bitmap: &mut LabelBitmap, left: i32, top: i32, width: usize, coverage: &[u8]) {
    if width == 0 {
        return;
    }
    let (bw, bh) = (bitmap.width as i32, bitmap.height as i32);
    for (row, line) in coverage.chunks(width).enumerate() {
        let y = top + row as i32;
        if y < 0 || y >= bh {
            continue;
        }
        for (col, &a) in line.iter().enumerate() {
            let x = left + col as i32;
            if x < 0 || x >= bw || a == 0 {
                continue;
            }
            let i = ((y * bw + x) * 4) as usize;
            let a = a as u32;
            for c in &mut bitmap.rgba[i..i + 4] {
                *c = ((255 * a + *c as u32 * (255 - a)) / 255) as u8;
            }
        }
    }
}
