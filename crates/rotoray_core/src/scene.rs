//! Scene container and derived lighting state.

use crate::{Camera, Light, Object};
use rotoray_math::{Color, Interval, Ray};

/// Values derived from the scene for one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Prepared {
    pub ambient_light: Color,
}

/// Objects, lights and ambient lighting for rendering.
///
/// Lights are stored in `objects` like everything else; `lights` indexes
/// them so shading can visit just the emitters.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<usize>,
    pub ambient_color: Color,
    pub ambient_brightness: f32,
    prepared: Prepared,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(ambient_color: Color, ambient_brightness: f32) -> Self {
        Self {
            ambient_color,
            ambient_brightness,
            ..Default::default()
        }
    }

    /// Add an object, builder style.
    pub fn with_object(mut self, object: impl Into<Object>) -> Self {
        self.add_object(object);
        self
    }

    /// Add an object and return its index.
    pub fn add_object(&mut self, object: impl Into<Object>) -> usize {
        let index = self.objects.len();
        let object = object.into();
        if object.as_light().is_some() {
            self.lights.push(index);
        }
        self.objects.push(object);
        index
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Iterate the scene's lights in insertion order.
    pub fn lights(&self) -> impl Iterator<Item = &Light> + '_ {
        self.lights
            .iter()
            .filter_map(|&index| self.objects[index].as_light())
    }

    /// The n-th light in insertion order.
    pub fn light_mut(&mut self, n: usize) -> Option<&mut Light> {
        let index = *self.lights.get(n)?;
        self.objects[index].as_light_mut()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Ambient light as of the last [`prepare`](Scene::prepare).
    #[inline]
    pub fn ambient_light(&self) -> Color {
        self.prepared.ambient_light
    }

    /// Prepare the scene for rendering with `camera`.
    ///
    /// Must be called whenever anything in the scene+camera pair has
    /// changed; nothing recomputes it implicitly. The camera is taken so
    /// camera-dependent precomputation has a home.
    pub fn prepare(&mut self, camera: &Camera) {
        self.prepared.ambient_light = self.ambient_color * self.ambient_brightness;

        log::trace!(
            "Prepared scene: {} objects, {} lights, ambient {:?}, camera at {:?}",
            self.objects.len(),
            self.lights.len(),
            self.prepared.ambient_light,
            camera.position
        );
    }

    /// Nearest object hit by `ray`, skipping the object at `exclude`.
    ///
    /// Returns the object's index and the distance along the ray.
    pub fn nearest_intersection(&self, ray: &Ray, exclude: Option<usize>) -> Option<(usize, f32)> {
        let mut nearest = None;
        let mut closest_so_far = f32::INFINITY;

        for (index, object) in self.objects.iter().enumerate() {
            if Some(index) == exclude {
                continue;
            }
            if let Some(distance) = object.intersects(ray) {
                if distance < closest_so_far {
                    closest_so_far = distance;
                    nearest = Some((index, distance));
                }
            }
        }

        nearest
    }

    /// True if any object intersects `ray` closer than `distance`.
    pub fn is_obstructed(&self, ray: &Ray, distance: f32) -> bool {
        let range = Interval::new(0.0, distance);
        self.objects
            .iter()
            .filter_map(|object| object.intersects(ray))
            .any(|t| range.surrounds(t))
    }
}
