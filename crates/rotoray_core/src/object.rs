//! Scene objects.
//!
//! Objects are a closed set of variants stored by value, so a scene is a
//! flat `Vec<Object>` scanned linearly without dynamic dispatch.

use crate::{Light, Plane, Point, Sphere, Surface};
use rotoray_math::{Ray, Vec3};

/// Anything that can live in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
    Point(Point),
    Light(Light),
}

impl Object {
    /// Determine if a ray intersects this object.
    ///
    /// Returns the distance along the ray to the nearest intersection in
    /// front of the ray origin. Points and lights never intersect.
    #[inline]
    pub fn intersects(&self, ray: &Ray) -> Option<f32> {
        match self {
            Object::Sphere(sphere) => sphere.intersects(ray),
            Object::Plane(plane) => plane.intersects(ray),
            Object::Point(_) | Object::Light(_) => None,
        }
    }

    /// Surface normal of the object at `point`.
    #[inline]
    pub fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Object::Sphere(sphere) => sphere.normal(point),
            Object::Plane(plane) => plane.normal(point),
            Object::Point(marker) => marker.normal(point),
            Object::Light(light) => light.normal(point),
        }
    }

    /// Surface of the object at `point`.
    ///
    /// Constant per object for now; `point` is where textures would plug in.
    #[inline]
    pub fn surface(&self, _point: Vec3) -> Surface {
        match self {
            Object::Sphere(sphere) => sphere.surface,
            Object::Plane(plane) => plane.surface,
            Object::Point(marker) => marker.surface,
            Object::Light(light) => light.surface(),
        }
    }

    /// The light, if this object is one.
    pub fn as_light(&self) -> Option<&Light> {
        match self {
            Object::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn as_light_mut(&mut self) -> Option<&mut Light> {
        match self {
            Object::Light(light) => Some(light),
            _ => None,
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<Plane> for Object {
    fn from(plane: Plane) -> Self {
        Object::Plane(plane)
    }
}

impl From<Point> for Object {
    fn from(point: Point) -> Self {
        Object::Point(point)
    }
}

impl From<Light> for Object {
    fn from(light: Light) -> Self {
        Object::Light(light)
    }
}
