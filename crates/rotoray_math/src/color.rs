use crate::{Interval, Vec3};

/// Color type alias (RGB, unclamped while accumulating)
pub type Color = Vec3;

/// Pack a color into a `0x00RRGGBB` pixel.
///
/// Each channel is clamped to [0, 1] first, so over-bright and negative
/// accumulations saturate instead of wrapping.
#[inline]
pub fn color_to_rgb(color: Color) -> u32 {
    let r = (Interval::UNIT.clamp(color.x) * 255.0) as u32;
    let g = (Interval::UNIT.clamp(color.y) * 255.0) as u32;
    let b = (Interval::UNIT.clamp(color.z) * 255.0) as u32;
    (r << 16) | (g << 8) | b
}

/// A faster powf() that's good enough for highlights.
#[inline]
pub fn approx_powf(x: f32, y: f32) -> f32 {
    (y * x.ln()).exp()
}
