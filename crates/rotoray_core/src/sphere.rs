//! Sphere primitive.

use crate::Surface;
use rotoray_math::{Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub surface: Surface,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            surface,
        }
    }

    /// Distance along `ray` to the nearest intersection in front of its origin.
    pub fn intersects(&self, ray: &Ray) -> Option<f32> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in front of the origin
        let near = (h - sqrtd) / a;
        if Interval::AHEAD.surrounds(near) {
            return Some(near);
        }

        let far = (h + sqrtd) / a;
        Interval::AHEAD.surrounds(far).then_some(far)
    }

    /// Outward unit normal at `point`.
    #[inline]
    pub fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
