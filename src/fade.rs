use crate::constants::{SECTION_SELECTOR, VISIBLE_CLASS};
use lake_core::{FadeTarget, ScrollFader, SectionRect};
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `.section` element driven by the fader through its `visible` class.
pub struct SectionElement(pub web::Element);

impl FadeTarget for SectionElement {
    fn rect(&self) -> SectionRect {
        let r = self.0.get_bounding_client_rect();
        SectionRect::new(r.top(), r.bottom())
    }

    fn set_visible(&mut self, visible: bool) {
        _ = self
            .0
            .class_list()
            .toggle_with_force(VISIBLE_CLASS, visible);
    }
}

/// Snapshot of the tracked sections, taken once at startup.
pub fn collect_sections(document: &web::Document) -> Vec<SectionElement> {
    let Ok(list) = document.query_selector_all(SECTION_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .map(SectionElement)
        .collect()
}

pub fn run(fader: &ScrollFader, sections: &mut [SectionElement]) {
    let vh = web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    fader.apply(sections, vh);
}
