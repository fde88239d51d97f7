use glam::Vec2;
use web_sys as web;

/// Timestamp in ms on the same clock as `performance.now()`.
#[inline]
pub fn now_ms() -> f64 {
    instant::now()
}

/// Client coordinates relative to a rectangle's top-left corner.
#[inline]
pub fn client_to_local(client: Vec2, rect_left: f32, rect_top: f32) -> Vec2 {
    Vec2::new(client.x - rect_left, client.y - rect_top)
}

/// Pointer position in canvas CSS px (the space the ripple field draws in).
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_local(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        rect.left() as f32,
        rect.top() as f32,
    )
}
