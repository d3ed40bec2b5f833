use menu_core::{LabelBitmap, LabelRasterizer, LabelStyle, MenuError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Draws label text on an offscreen 2D canvas and reads the pixels back.
pub struct CanvasLabelRasterizer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasLabelRasterizer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!(format!("create canvas: {:?}", e)))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("get_context: {:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

fn label_err(label: &str, e: JsValue) -> MenuError {
    MenuError::Label {
        label: label.to_string(),
        reason: format!("{:?}", e),
    }
}

impl LabelRasterizer for CanvasLabelRasterizer {
    #[allow(deprecated)]
    fn rasterize(&mut self, text: &str, style: &LabelStyle) -> Result<LabelBitmap, MenuError> {
        // resizing also resets the context state
        self.canvas.set_width(style.width);
        self.canvas.set_height(style.height);
        let (w, h) = (style.width as f64, style.height as f64);

        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style(&JsValue::from_str(style.backdrop_css));
        self.ctx.fill_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style(&JsValue::from_str(style.text_css));
        self.ctx.set_font(style.font);
        self.ctx
            .fill_text(text, style.text_origin[0], style.text_origin[1])
            .map_err(|e| label_err(text, e))?;

        let image = self
            .ctx
            .get_image_data(0.0, 0.0, w, h)
            .map_err(|e| label_err(text, e))?;
        Ok(LabelBitmap {
            width: image.width(),
            height: image.height(),
            rgba: image.data().0,
        })
    }
}
