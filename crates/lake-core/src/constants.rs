// Tuning constants for the ripple field and the scroll fader.
// `RippleConfig::default()` and `FadeConfig::default()` are built from these.

// Ring appearance
pub const RING_COLOR: u32 = 0x81d8d0; // pale turquoise
pub const STROKE_WIDTH_PER_INTENSITY: f32 = 2.2;
pub const SPAWN_ALPHA_PER_INTENSITY: f32 = 0.75; // opacity before the first frame
pub const SPAWN_RADIUS: f32 = 1.0;

// Pointer speed estimate: px / (sec * divisor), capped
pub const SPEED_DIVISOR: f32 = 400.0;
pub const SPEED_CAP: f32 = 2.0;
pub const SPAWN_SPEED_THRESHOLD: f32 = 0.4;
pub const INTENSITY_PER_SPEED: f32 = 0.8;

// Per-frame motion
pub const GROWTH_BASE_PX: f32 = 3.0;
pub const GROWTH_PER_INTENSITY_PX: f32 = 2.0;
pub const LIFE_DECAY_PER_FRAME: f32 = 0.95;
pub const CULL_LIFE_BELOW: f32 = 0.05;

// Stroke opacity = life * (base + intensity * k)
pub const ALPHA_BASE: f32 = 0.8;
pub const ALPHA_PER_INTENSITY: f32 = 0.15;

// Per-ring glow
pub const BLUR_BASE_PX: f32 = 4.0;
pub const BLUR_PER_INTENSITY_PX: f32 = 2.0;
pub const BRIGHTNESS_PER_INTENSITY: f32 = 0.3;

// Scroll fade: fraction of viewport height a section top must rise above
pub const ACTIVATION_BAND: f64 = 0.75;
