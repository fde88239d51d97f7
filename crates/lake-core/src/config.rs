//! Runtime-tunable parameters for both effects.
//!
//! Defaults come from [`crate::constants`]. The web frontend feeds string
//! overrides (read from `data-*` attributes) through `apply_override`, then
//! calls `validate` before handing the config to the effect.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct RippleConfig {
    pub ring_color: u32,
    pub stroke_width: f32,
    pub spawn_alpha: f32,
    pub speed_divisor: f32,
    pub speed_cap: f32,
    pub spawn_threshold: f32,
    pub intensity_gain: f32,
    pub growth_base: f32,
    pub growth_per_intensity: f32,
    pub decay: f32,
    pub cull_below: f32,
    pub alpha_base: f32,
    pub alpha_per_intensity: f32,
    pub blur_base: f32,
    pub blur_per_intensity: f32,
    pub brightness_per_intensity: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            ring_color: RING_COLOR,
            stroke_width: STROKE_WIDTH_PER_INTENSITY,
            spawn_alpha: SPAWN_ALPHA_PER_INTENSITY,
            speed_divisor: SPEED_DIVISOR,
            speed_cap: SPEED_CAP,
            spawn_threshold: SPAWN_SPEED_THRESHOLD,
            intensity_gain: INTENSITY_PER_SPEED,
            growth_base: GROWTH_BASE_PX,
            growth_per_intensity: GROWTH_PER_INTENSITY_PX,
            decay: LIFE_DECAY_PER_FRAME,
            cull_below: CULL_LIFE_BELOW,
            alpha_base: ALPHA_BASE,
            alpha_per_intensity: ALPHA_PER_INTENSITY,
            blur_base: BLUR_BASE_PX,
            blur_per_intensity: BLUR_PER_INTENSITY_PX,
            brightness_per_intensity: BRIGHTNESS_PER_INTENSITY,
        }
    }
}

impl RippleConfig {
    /// Override keys accepted by [`RippleConfig::apply_override`].
    pub const KEYS: &'static [&'static str] = &[
        "ring-color",
        "stroke-width",
        "spawn-alpha",
        "speed-divisor",
        "speed-cap",
        "spawn-threshold",
        "intensity-gain",
        "growth-base",
        "growth-per-intensity",
        "decay",
        "cull-below",
        "alpha-base",
        "alpha-per-intensity",
        "blur-base",
        "blur-per-intensity",
        "brightness-per-intensity",
    ];

    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if key == "ring-color" {
            self.ring_color = parse_color(value).ok_or_else(|| ConfigError::invalid(key, value))?;
            return Ok(());
        }
        let slot = match key {
            "stroke-width" => &mut self.stroke_width,
            "spawn-alpha" => &mut self.spawn_alpha,
            "speed-divisor" => &mut self.speed_divisor,
            "speed-cap" => &mut self.speed_cap,
            "spawn-threshold" => &mut self.spawn_threshold,
            "intensity-gain" => &mut self.intensity_gain,
            "growth-base" => &mut self.growth_base,
            "growth-per-intensity" => &mut self.growth_per_intensity,
            "decay" => &mut self.decay,
            "cull-below" => &mut self.cull_below,
            "alpha-base" => &mut self.alpha_base,
            "alpha-per-intensity" => &mut self.alpha_per_intensity,
            "blur-base" => &mut self.blur_base,
            "blur-per-intensity" => &mut self.blur_per_intensity,
            "brightness-per-intensity" => &mut self.brightness_per_intensity,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        *slot = value
            .trim()
            .parse::<f32>()
            .map_err(|_| ConfigError::invalid(key, value))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        open_unit("decay", self.decay)?;
        open_unit("cull-below", self.cull_below)?;
        positive("speed-divisor", self.speed_divisor)?;
        positive("speed-cap", self.speed_cap)?;
        for (key, value) in [
            ("stroke-width", self.stroke_width),
            ("spawn-alpha", self.spawn_alpha),
            ("spawn-threshold", self.spawn_threshold),
            ("intensity-gain", self.intensity_gain),
            ("growth-base", self.growth_base),
            ("growth-per-intensity", self.growth_per_intensity),
            ("alpha-base", self.alpha_base),
            ("alpha-per-intensity", self.alpha_per_intensity),
            ("blur-base", self.blur_base),
            ("blur-per-intensity", self.blur_per_intensity),
            ("brightness-per-intensity", self.brightness_per_intensity),
        ] {
            non_negative(key, value)?;
        }
        Ok(())
    }

    /// Ring color as a CSS hex string, e.g. `#81d8d0`.
    pub fn css_color(&self) -> String {
        crate::surface::css_hex(self.ring_color)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FadeConfig {
    /// Fraction of the viewport height that a section's top must be above.
    pub activation_band: f64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            activation_band: ACTIVATION_BAND,
        }
    }
}

impl FadeConfig {
    pub const KEYS: &'static [&'static str] = &["activation-band"];

    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "activation-band" => {
                self.activation_band = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::invalid(key, value))?;
                Ok(())
            }
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let band = self.activation_band;
        if band.is_finite() && band > 0.0 && band <= 1.0 {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                key: "activation-band",
                value: band,
                expected: "0 < x <= 1",
            })
        }
    }
}

/// Parse `#rrggbb`, `0xrrggbb` or bare `rrggbb`.
pub fn parse_color(value: &str) -> Option<u32> {
    let v = value.trim();
    let hex = v
        .strip_prefix('#')
        .or_else(|| v.strip_prefix("0x"))
        .or_else(|| v.strip_prefix("0X"))
        .unwrap_or(v);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

fn open_unit(key: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value: value as f64,
            expected: "0 < x < 1",
        })
    }
}

fn positive(key: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value: value as f64,
            expected: "x > 0",
        })
    }
}

fn non_negative(key: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value: value as f64,
            expected: "x >= 0",
        })
    }
}
