use crate::dom;
use crate::fade::{self, SectionElement};
use lake_core::ScrollFader;
use std::cell::RefCell;
use std::rc::Rc;

/// Run the fader now, then on every `scroll` and on `load`.
///
/// The module may start after `load` has already fired, hence the
/// immediate run.
pub fn wire_scroll_fade(fader: ScrollFader, sections: Vec<SectionElement>) {
    let state = Rc::new(RefCell::new((fader, sections)));
    {
        let mut s = state.borrow_mut();
        let (fader, sections) = &mut *s;
        fade::run(fader, sections);
    }
    for event in ["scroll", "load"] {
        let state = state.clone();
        dom::add_window_listener(event, move || {
            let mut s = state.borrow_mut();
            let (fader, sections) = &mut *s;
            fade::run(fader, sections);
        });
    }
}
