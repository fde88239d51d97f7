//! The ripple field controller.
//!
//! Owns every piece of mutable ripple state: the active set, the pointer
//! tracker and the background placement. The web frontend shares one
//! instance between its pointer, resize and animation-frame handlers.

use crate::background::Background;
use crate::config::RippleConfig;
use crate::pointer::PointerTracker;
use crate::ripple::{Ripple, RippleId};
use crate::surface::Surface;
use glam::Vec2;

/// What happened during one [`RippleField::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub advanced: usize,
    pub culled: usize,
}

pub struct RippleField {
    pub config: RippleConfig,
    tracker: PointerTracker,
    ripples: Vec<Ripple>,
    next_id: u64,
    viewport: Vec2,
    background: Option<Background>,
}

impl RippleField {
    pub fn new(config: RippleConfig, viewport: Vec2, now_ms: f64) -> Self {
        Self {
            config,
            tracker: PointerTracker::new(now_ms),
            ripples: Vec::new(),
            next_id: 0,
            viewport,
            background: None,
        }
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Feed a pointer move. Spawns a ripple when the pointer moved fast
    /// enough since the previous move and returns it.
    pub fn pointer_moved(&mut self, pos: Vec2, now_ms: f64) -> Option<Ripple> {
        let speed = self.tracker.sample(
            pos,
            now_ms,
            self.config.speed_divisor,
            self.config.speed_cap,
        );
        if speed > self.config.spawn_threshold {
            Some(self.spawn(pos, speed * self.config.intensity_gain))
        } else {
            None
        }
    }

    /// Add a ripple directly, bypassing the speed gate.
    pub fn spawn(&mut self, center: Vec2, intensity: f32) -> Ripple {
        let ripple = Ripple::spawn(RippleId(self.next_id), center, intensity);
        self.next_id += 1;
        self.ripples.push(ripple);
        log::trace!(
            "[ripple] spawn #{} at ({:.0},{:.0}) intensity {:.2}",
            ripple.id.0,
            center.x,
            center.y,
            intensity
        );
        ripple
    }

    /// Advance every ripple by one frame, then drop the spent ones.
    pub fn tick(&mut self) -> FrameReport {
        let cfg = &self.config;
        let advanced = self.ripples.len();
        let next: Vec<Ripple> = self
            .ripples
            .iter()
            .map(|r| r.advanced(cfg))
            .filter(|r| !r.is_spent(cfg))
            .collect();
        let culled = advanced - next.len();
        self.ripples = next;
        if culled > 0 {
            log::trace!("[ripple] culled {} ({} active)", culled, self.ripples.len());
        }
        FrameReport { advanced, culled }
    }

    /// Install the background once its image has loaded.
    pub fn set_background_image(&mut self, image_size: Vec2) {
        self.background = Some(Background::new(image_size, self.viewport));
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        if let Some(bg) = &mut self.background {
            bg.resize(viewport);
        }
    }

    /// Draw the current state: clear, background (if any), then every ring.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear();
        if let Some(fit) = self.background.as_ref().and_then(|b| b.fit()) {
            surface.draw_background(fit);
        }
        for r in &self.ripples {
            surface.stroke_ring(&r.stroke(&self.config));
        }
    }

    /// One animation frame: advance, cull, draw.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> FrameReport {
        let report = self.tick();
        self.draw(surface);
        report
    }
}
