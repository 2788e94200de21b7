//! Recursive Whitted-style shading.
//!
//! Implements:
//! - Ambient, diffuse and Phong-style specular terms per point light
//! - Hard shadows from a single shadow ray per light
//! - Mirror reflection weighted by surface reflectivity, depth bounded

use rotoray_core::{Object, Scene};
use rotoray_math::{approx_powf, Color, Ray, Vec3};

/// Maximum number of surfaces a single primary ray may visit.
pub const MAX_RECURSION_DEPTH: u32 = 4;

/// Shadow rays start this far towards the light to avoid hitting the
/// surface being shaded.
const SHADOW_EPSILON: f32 = 1e-4;

/// Result of tracing one primary ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracedPath {
    /// Accumulated, unclamped color
    pub color: Color,
    /// Number of surfaces hit along the reflection path
    pub bounces: u32,
}

/// Local shading result at one intersection.
#[derive(Debug, Clone, Copy)]
struct Shade {
    color: Color,
    reflectivity: f32,
}

/// Compute the color seen by a primary ray.
pub fn trace(scene: &Scene, primary_ray: &Ray) -> Color {
    trace_path(scene, primary_ray).color
}

/// Trace a primary ray and report how many surfaces it visited.
///
/// The ray is followed through mirror reflections until it escapes the
/// scene or [`MAX_RECURSION_DEPTH`] surfaces have been shaded. Each bounce
/// contributes its local color scaled by the product of the reflectivities
/// seen so far.
pub fn trace_path(scene: &Scene, primary_ray: &Ray) -> TracedPath {
    let mut color = Color::ZERO;
    let mut relevance = 1.0;
    let mut reflectivity = 0.0;
    let mut reflector: Option<usize> = None;
    let mut intersection = Vec3::ZERO;
    let mut normal = Vec3::ZERO;
    let mut depth = 0;
    let mut ray = *primary_ray;

    loop {
        if reflector.is_some() {
            ray = ray.reflect(intersection, normal);
            relevance *= reflectivity;
        }

        // A reflected ray never needs testing against its own reflector
        let Some((index, distance)) = scene.nearest_intersection(&ray, reflector) else {
            break;
        };

        let object = &scene.objects()[index];
        intersection = ray.at(distance);
        normal = object.normal(intersection);

        let shade = shade_intersection(scene, object, &ray, intersection, normal);
        color += shade.color * relevance;
        reflectivity = shade.reflectivity;

        reflector = Some(index);
        depth += 1;
        if depth >= MAX_RECURSION_DEPTH {
            break;
        }
    }

    TracedPath {
        color,
        bounces: depth,
    }
}

/// Shadow test: is anything between `point` and a light `distance` away
/// along `light_direction`?
#[inline]
fn point_is_shadowed(scene: &Scene, point: Vec3, light_direction: Vec3, distance: f32) -> bool {
    let shadow_ray = Ray::new(point + light_direction * SHADOW_EPSILON, light_direction);
    scene.is_obstructed(&shadow_ray, distance)
}

/// Determine the color of `object` at `intersection` as seen along `ray`.
fn shade_intersection(
    scene: &Scene,
    object: &Object,
    ray: &Ray,
    intersection: Vec3,
    normal: Vec3,
) -> Shade {
    let surface = object.surface(intersection);
    let mut color = surface.color * scene.ambient_light();

    for light in scene.lights() {
        let to_light = light.center() - intersection;
        let distance = to_light.length();
        // A light sitting on the surface has no direction to shade from
        if distance <= SHADOW_EPSILON {
            continue;
        }
        let light_direction = to_light / distance;

        if point_is_shadowed(scene, intersection, light_direction, distance) {
            continue;
        }

        let normal_dot = normal.dot(light_direction);
        if normal_dot <= 0.0 {
            continue;
        }

        color += surface.color * (surface.diffuse * normal_dot);

        // Highlight when the light is on the viewer's side of the surface
        let view_dot = (-ray.direction).dot(light_direction);
        if view_dot > 0.0 {
            // Each light highlights with its own color, which over-credits
            // overlapping lights.
            color += light.color() * (approx_powf(view_dot, surface.highlight_exponent) * surface.specular);
        }
    }

    Shade {
        color,
        reflectivity: surface.reflectivity(),
    }
}
