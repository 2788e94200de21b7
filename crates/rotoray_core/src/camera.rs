//! Perspective camera and per-frame primary ray generation.

use rotoray_math::{EulerRot, Quat, Ray, Vec3};

/// Euler angles in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    pub fn from_degrees(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::new(yaw.to_radians(), pitch.to_radians(), roll.to_radians())
    }

    /// Yaw about +Y, then pitch about +X, then roll about +Z.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }
}

/// Camera for generating primary rays into the scene.
///
/// With a zero orientation the camera looks down -Z with +Y up.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub orientation: Orientation,
    /// Distance from the eye to the image plane, in pixels
    pub focal_length: f32,
    pub width: u32,
    pub height: u32,
}

/// World-space axes of a camera.
#[derive(Debug, Clone, Copy)]
struct Basis {
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Orientation::default(),
            focal_length: 700.0,
            width: 640,
            height: 480,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = focal_length;
        self
    }

    fn basis(&self) -> Basis {
        let rotation = self.orientation.rotation();
        Basis {
            forward: rotation * Vec3::NEG_Z,
            right: rotation * Vec3::X,
            up: rotation * Vec3::Y,
        }
    }

    /// Unnormalized direction through the center of pixel (x, y).
    fn pixel_direction(&self, basis: &Basis, x: u32, y: u32) -> Vec3 {
        let u = x as f32 + 0.5 - self.width as f32 / 2.0;
        let v = self.height as f32 / 2.0 - (y as f32 + 0.5);
        basis.forward * self.focal_length + basis.right * u + basis.up * v
    }

    /// Primary ray through pixel (x, y) of the full image.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let direction = self.pixel_direction(&self.basis(), x, y);
        Ray::new(self.position, direction.normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Row-major traversal of a pixel rectangle for one frame.
///
/// Driven explicitly with [`x_step`](CameraFrame::x_step) and
/// [`y_step`](CameraFrame::y_step), or consumed as an iterator of
/// `(x, y, ray)`. Begin a fresh frame for every render.
///
/// Directions are derived from the pixel coordinates rather than
/// accumulated, so a pixel gets the same ray whichever fragment renders it.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    camera: Camera,
    basis: Basis,
    x0: u32,
    x: u32,
    y: u32,
    x_end: u32,
    y_end: u32,
    exhausted: bool,
}

impl CameraFrame {
    /// Start a frame over the `width` x `height` rectangle at (x, y).
    ///
    /// Coordinates are absolute within the camera's image.
    pub fn begin(camera: &Camera, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            camera: camera.clone(),
            basis: camera.basis(),
            x0: x,
            x,
            y,
            x_end: x + width,
            y_end: y + height,
            exhausted: width == 0 || height == 0,
        }
    }

    /// True when the rectangle has no pixels left to visit.
    pub fn is_empty(&self) -> bool {
        self.exhausted
    }

    /// Pixel the frame currently points at.
    #[inline]
    pub fn pixel(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Primary ray for the current pixel.
    #[inline]
    pub fn ray(&self) -> Ray {
        let direction = self.camera.pixel_direction(&self.basis, self.x, self.y);
        Ray::new(self.camera.position, direction.normalize())
    }

    /// Advance along the current row. Returns false at the end of the row.
    #[inline]
    pub fn x_step(&mut self) -> bool {
        if self.x + 1 >= self.x_end {
            return false;
        }
        self.x += 1;
        true
    }

    /// Advance to the start of the next row. Returns false after the last row.
    #[inline]
    pub fn y_step(&mut self) -> bool {
        if self.y + 1 >= self.y_end {
            return false;
        }
        self.y += 1;
        self.x = self.x0;
        true
    }
}

impl Iterator for CameraFrame {
    type Item = (u32, u32, Ray);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let item = (self.x, self.y, self.ray());
        if !self.x_step() && !self.y_step() {
            self.exhausted = true;
        }
        Some(item)
    }
}
