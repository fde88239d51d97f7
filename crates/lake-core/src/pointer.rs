use glam::Vec2;

/// Raw pointer speed in "ripple units": pixels per `divisor` pixels/second,
/// capped at `cap`.
///
/// A zero elapsed time with a non-zero distance saturates at the cap; zero
/// distance over zero time is treated as no movement.
#[inline]
pub fn pointer_speed(distance_px: f32, dt_sec: f32, divisor: f32, cap: f32) -> f32 {
    let raw = distance_px / (dt_sec * divisor);
    if raw.is_nan() {
        return 0.0;
    }
    raw.min(cap)
}

/// Remembers the previous pointer sample so each move can be turned into a
/// speed estimate.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    last_pos: Vec2,
    last_ms: f64,
}

impl PointerTracker {
    /// Starts at the origin, as if the pointer was last seen there at `now_ms`.
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_pos: Vec2::ZERO,
            last_ms: now_ms,
        }
    }

    pub fn last_pos(&self) -> Vec2 {
        self.last_pos
    }

    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }

    /// Record a new sample and return the speed since the previous one.
    pub fn sample(&mut self, pos: Vec2, now_ms: f64, divisor: f32, cap: f32) -> f32 {
        let distance = pos.distance(self.last_pos);
        let dt_sec = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_pos = pos;
        self.last_ms = now_ms;
        pointer_speed(distance, dt_sec, divisor, cap)
    }
}
