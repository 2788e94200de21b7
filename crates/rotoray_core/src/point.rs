//! Marker geometry with no physical extent.

use crate::Surface;
use rotoray_math::Vec3;

/// A visualization marker; never intersects rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub center: Vec3,
    pub surface: Surface,
}

impl Point {
    pub fn new(center: Vec3, surface: Surface) -> Self {
        Self { center, surface }
    }

    #[inline]
    pub fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }
}
