use crate::input;
use lake_core::RippleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer moves anywhere in the window feed the ripple field. The lake
/// container is `pointer-events: none`, so the listener sits on the window.
pub fn wire_pointermove(canvas: web::HtmlCanvasElement, field: Rc<RefCell<RippleField>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &canvas);
        let now = input::now_ms();
        _ = field.borrow_mut().pointer_moved(pos, now);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
