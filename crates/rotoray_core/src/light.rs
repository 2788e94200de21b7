//! Light sources.

use crate::Surface;
use rotoray_math::{Color, Vec3};

/// Shape of the light's emitting region. Only point emitters exist today.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Emitter {
    Point { center: Vec3, color: Color },
}

/// A light source.
///
/// Lights take part in the object list so they can be animated and
/// enumerated alongside geometry, but they never intersect rays and so
/// never occlude anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub brightness: f32,
    pub emitter: Emitter,
}

impl Light {
    /// Create a white-or-colored point light.
    pub fn point(center: Vec3, color: Color, brightness: f32) -> Self {
        Self {
            brightness,
            emitter: Emitter::Point { center, color },
        }
    }

    /// Position shading rays aim at.
    #[inline]
    pub fn center(&self) -> Vec3 {
        match self.emitter {
            Emitter::Point { center, .. } => center,
        }
    }

    /// Move the emitter, e.g. from an animation driver.
    pub fn set_center(&mut self, new_center: Vec3) {
        match &mut self.emitter {
            Emitter::Point { center, .. } => *center = new_center,
        }
    }

    /// Emitted color, used for specular highlights.
    #[inline]
    pub fn color(&self) -> Color {
        match self.emitter {
            Emitter::Point { color, .. } => color,
        }
    }

    #[inline]
    pub fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center()).normalize_or_zero()
    }

    pub fn surface(&self) -> Surface {
        Surface {
            color: self.color(),
            diffuse: 0.0,
            specular: 0.0,
            highlight_exponent: 0.0,
        }
    }
}
