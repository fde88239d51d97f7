//! Drawing seam between the ripple field and whatever rasterizes it.
//!
//! The web frontend implements [`Surface`] over a Canvas 2D context; tests
//! implement it with a recorder.

use crate::background::CoverFit;
use glam::Vec2;

/// One stroked circle with its glow filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingStroke {
    pub center: Vec2,
    pub radius: f32,
    pub line_width: f32,
    pub color: u32,
    /// Already clamped to [0, 1].
    pub alpha: f32,
    pub blur_px: f32,
    pub brightness: f32,
}

pub trait Surface {
    /// Fill the whole viewport with opaque black.
    fn clear(&mut self);
    fn draw_background(&mut self, fit: &CoverFit);
    fn stroke_ring(&mut self, ring: &RingStroke);
}

/// `0xrrggbb` as a CSS hex color.
pub fn css_hex(color: u32) -> String {
    format!("#{:06x}", color & 0xff_ffff)
}
