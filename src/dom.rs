use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS px.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Attach a window-level listener that lives for the rest of the page.
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Size the canvas to the window: CSS size in px, backing store scaled by
/// devicePixelRatio. Returns the viewport in CSS px.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let Some(window) = web::window() else {
        return Vec2::ZERO;
    };
    let dpr = window.device_pixel_ratio();
    let vp = viewport_size(&window);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", vp.x));
    _ = style.set_property("height", &format!("{}px", vp.y));
    let w_px = (vp.x as f64 * dpr) as u32;
    let h_px = (vp.y as f64 * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    vp
}

/// Read `data-<key>` attributes off `el` for each key that is present.
pub fn data_overrides(el: &web::Element, keys: &[&'static str]) -> Vec<(&'static str, String)> {
    keys.iter()
        .filter_map(|k| {
            el.get_attribute(&crate::constants::data_attr(k))
                .map(|v| (*k, v))
        })
        .collect()
}
