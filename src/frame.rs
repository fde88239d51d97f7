use crate::render::CanvasSurface;
use lake_core::RippleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<RippleField>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let report = {
            let mut field = self.field.borrow_mut();
            let mut surface = self.surface.borrow_mut();
            field.frame(&mut *surface)
        };
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!(
                "[ripple] frame {} active={} culled={}",
                self.frames,
                report.advanced - report.culled,
                report.culled
            );
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
