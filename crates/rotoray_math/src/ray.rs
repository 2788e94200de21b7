use crate::Vec3;

/// A ray in 3D space with an origin and a unit direction.
///
/// Every ray the tracer builds (primary, reflected, shadow) carries a
/// normalized direction, so `t` values are world-space distances.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. `direction` must already be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Mirror this ray about `normal`, starting at `point`.
    ///
    /// d' = d - 2 * dot(d, n) * n
    #[inline]
    pub fn reflect(&self, point: Vec3, normal: Vec3) -> Ray {
        let direction = self.direction - normal * (2.0 * self.direction.dot(normal));
        Ray::new(point, direction)
    }
}
