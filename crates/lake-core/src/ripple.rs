use crate::config::RippleConfig;
use crate::surface::RingStroke;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(pub u64);

/// One expanding, fading ring.
///
/// Ripples are values: [`Ripple::advanced`] returns the next frame's state
/// rather than mutating in place, so the field can rebuild its set in one
/// map/filter pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub center: Vec2,
    pub radius: f32,
    pub life: f32,
    pub intensity: f32,
    /// Frames advanced since spawn.
    pub age: u32,
}

impl Ripple {
    pub fn spawn(id: RippleId, center: Vec2, intensity: f32) -> Self {
        Self {
            id,
            center,
            radius: 0.0,
            life: 1.0,
            intensity,
            age: 0,
        }
    }

    /// State after one more frame.
    #[must_use]
    pub fn advanced(&self, cfg: &RippleConfig) -> Self {
        Self {
            radius: self.radius + cfg.growth_base + self.intensity * cfg.growth_per_intensity,
            life: self.life * cfg.decay,
            age: self.age.saturating_add(1),
            ..*self
        }
    }

    #[inline]
    pub fn is_spent(&self, cfg: &RippleConfig) -> bool {
        self.life < cfg.cull_below
    }

    pub fn line_width(&self, cfg: &RippleConfig) -> f32 {
        cfg.stroke_width * self.intensity
    }

    /// Unclamped stroke opacity for the current state.
    pub fn alpha(&self, cfg: &RippleConfig) -> f32 {
        if self.age == 0 {
            cfg.spawn_alpha * self.intensity
        } else {
            self.life * (cfg.alpha_base + self.intensity * cfg.alpha_per_intensity)
        }
    }

    // Filters are fixed at spawn; they depend only on intensity.
    pub fn blur_px(&self, cfg: &RippleConfig) -> f32 {
        cfg.blur_base + self.intensity * cfg.blur_per_intensity
    }

    pub fn brightness(&self, cfg: &RippleConfig) -> f32 {
        1.0 + self.intensity * cfg.brightness_per_intensity
    }

    pub fn stroke(&self, cfg: &RippleConfig) -> RingStroke {
        let radius = if self.age == 0 {
            crate::constants::SPAWN_RADIUS
        } else {
            self.radius
        };
        RingStroke {
            center: self.center,
            radius,
            line_width: self.line_width(cfg),
            color: cfg.ring_color,
            alpha: self.alpha(cfg).clamp(0.0, 1.0),
            blur_px: self.blur_px(cfg),
            brightness: self.brightness(cfg),
        }
    }
}
