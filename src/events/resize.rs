use crate::dom;
use crate::render::CanvasSurface;
use lake_core::RippleField;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep canvas, surface and background placement in step with the window.
pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<RippleField>>,
    surface: Rc<RefCell<CanvasSurface>>,
) {
    dom::add_window_listener("resize", move || {
        let vp = dom::sync_canvas_to_window(&canvas);
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        surface.borrow_mut().resize(vp, dpr);
        field.borrow_mut().resize(vp);
    });
}
