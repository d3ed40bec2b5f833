use glam::Vec2;
use web_sys as web;

/// Event position in the canvas' backing-store pixel space, which is the
/// space the app's viewport is measured in.
#[inline]
pub fn event_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Normalize wheel deltas across `deltaMode`s to a sign.
#[inline]
pub fn wheel_direction(ev: &web::WheelEvent) -> f32 {
    let dy = ev.delta_y();
    if dy > 0.0 {
        1.0
    } else if dy < 0.0 {
        -1.0
    } else {
        0.0
    }
}
