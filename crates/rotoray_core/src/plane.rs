//! Infinite plane primitive.

use crate::Surface;
use rotoray_math::{Interval, Ray, Vec3};

/// Rays closer to parallel than this never hit a plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane: every `p` with `dot(normal, p) + distance == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Signed offset along the normal
    pub distance: f32,
    pub surface: Surface,
}

impl Plane {
    /// Create a new plane. `normal` is normalized here.
    pub fn new(normal: Vec3, distance: f32, surface: Surface) -> Self {
        Self {
            normal: normal.normalize(),
            distance,
            surface,
        }
    }

    pub fn intersects(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = -(self.normal.dot(ray.origin) + self.distance) / denom;
        Interval::AHEAD.surrounds(t).then_some(t)
    }

    #[inline]
    pub fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}
