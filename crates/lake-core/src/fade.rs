use crate::config::FadeConfig;

/// Vertical extent of a section in viewport coordinates (CSS px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// True when any part of the section lies inside the activation band:
/// its top is above `band * viewport_height` and its bottom is below the
/// viewport's top edge.
#[inline]
pub fn in_activation_band(rect: SectionRect, viewport_height: f64, band: f64) -> bool {
    rect.top < viewport_height * band && rect.bottom > 0.0
}

/// Something whose visibility the fader drives.
pub trait FadeTarget {
    fn rect(&self) -> SectionRect;
    fn set_visible(&mut self, visible: bool);
}

#[derive(Clone, Debug, Default)]
pub struct ScrollFader {
    pub config: FadeConfig,
}

impl ScrollFader {
    pub fn new(config: FadeConfig) -> Self {
        Self { config }
    }

    pub fn is_visible(&self, rect: SectionRect, viewport_height: f64) -> bool {
        in_activation_band(rect, viewport_height, self.config.activation_band)
    }

    /// Recompute visibility for every target. Returns how many are visible.
    pub fn apply<T: FadeTarget>(&self, targets: &mut [T], viewport_height: f64) -> usize {
        let mut shown = 0;
        for t in targets.iter_mut() {
            let visible = self.is_visible(t.rect(), viewport_height);
            t.set_visible(visible);
            shown += visible as usize;
        }
        log::trace!(
            "[fade] {}/{} sections visible (vh={:.0})",
            shown,
            targets.len(),
            viewport_height
        );
        shown
    }
}
