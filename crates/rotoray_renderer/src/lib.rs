//! rotoray renderer - multi-threaded CPU ray tracing
//!
//! A Whitted-style ray tracer: ambient, diffuse and specular shading from
//! point lights, hard shadows, and a bounded chain of mirror reflections.
//! Frames are split into row-band fragments rendered in parallel on a
//! persistent thread pool.

mod error;
mod fragment;
mod renderer;
mod tracer;

pub use error::{RenderError, RenderResult};
pub use fragment::{slice_rows, Fragment};
pub use renderer::{render_fragment, Renderer};
pub use tracer::{trace, trace_path, TracedPath, MAX_RECURSION_DEPTH};

/// Re-export the scene model and math types
pub use rotoray_core::{Camera, CameraFrame, Emitter, Light, Object, Orientation, Plane, Point, Scene, Sphere, Surface};
pub use rotoray_math::{color_to_rgb, Color, Ray, Vec3};
