//! rotoray core - scene model for the CPU ray tracer.
//!
//! This crate provides:
//!
//! - **Objects**: `Sphere`, `Plane`, `Point`, `Light`, unified as `Object`
//! - **Materials**: constant per-object `Surface`
//! - **Camera**: Euler-oriented perspective camera and `CameraFrame`
//!   pixel traversal
//! - **Scene**: object list, light index and prepared ambient lighting
//!
//! # Example
//!
//! ```
//! use rotoray_core::{Camera, Light, Scene, Sphere, Surface};
//! use rotoray_math::{Color, Vec3};
//!
//! let camera = Camera::new().with_position(Vec3::new(0.0, 0.0, 6.0));
//! let mut scene = Scene::new(Color::ONE, 0.04)
//!     .with_object(Sphere::new(Vec3::ZERO, 1.0, Surface::new(Color::X)))
//!     .with_object(Light::point(Vec3::new(3.0, 3.0, 3.0), Color::ONE, 1.0));
//!
//! // after every change to scene or camera
//! scene.prepare(&camera);
//! ```

pub mod camera;
pub mod light;
pub mod object;
pub mod plane;
pub mod point;
pub mod scene;
pub mod sphere;
pub mod surface;

// Re-export commonly used types
pub use camera::{Camera, CameraFrame, Orientation};
pub use light::{Emitter, Light};
pub use object::Object;
pub use plane::Plane;
pub use point::Point;
pub use scene::{Prepared, Scene};
pub use sphere::Sphere;
pub use surface::Surface;
