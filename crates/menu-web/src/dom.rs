use web_sys as web;

/// Blocking browser alert; failures are logged, never propagated.
pub fn alert(message: &str) {
    match web::window() {
        Some(w) => {
            if let Err(e) = w.alert_with_message(message) {
                log::warn!("alert failed: {:?}", e);
            }
        }
        None => log::info!("{message}"),
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
