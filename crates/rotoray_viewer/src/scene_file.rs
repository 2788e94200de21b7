//! JSON scene descriptions.
//!
//! Vectors are `[x, y, z]` arrays and camera angles are in degrees.
//! Objects are tagged by `"type"`: `sphere`, `plane`, `point` or `light`.

use std::path::Path;

use rotoray_core::{Camera, Light, Orientation, Plane, Point, Scene, Sphere, Surface};
use rotoray_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

/// Built-in demo scene.
const DEMO_SCENE: &str = include_str!("../scenes/demo.json");

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Object {index}: sphere radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Object {index}: plane normal must be non-zero")]
    ZeroNormal { index: usize },

    #[error("Camera focal length must be positive, got {0}")]
    InvalidFocalLength(f32),
}

pub type SceneFileResult<T> = Result<T, SceneFileError>;

fn one() -> f32 {
    1.0
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn grey() -> [f32; 3] {
    [0.5, 0.5, 0.5]
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceDesc {
    #[serde(default = "grey")]
    pub color: [f32; 3],
    #[serde(default = "one")]
    pub diffuse: f32,
    #[serde(default)]
    pub specular: f32,
    #[serde(default)]
    pub highlight_exponent: f32,
}

impl Default for SurfaceDesc {
    fn default() -> Self {
        Self {
            color: grey(),
            diffuse: 1.0,
            specular: 0.0,
            highlight_exponent: 0.0,
        }
    }
}

impl From<&SurfaceDesc> for Surface {
    fn from(desc: &SurfaceDesc) -> Self {
        Surface {
            color: Vec3::from_array(desc.color),
            diffuse: desc.diffuse,
            specular: desc.specular,
            highlight_exponent: desc.highlight_exponent,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDesc {
    Sphere {
        center: [f32; 3],
        radius: f32,
        #[serde(default)]
        surface: SurfaceDesc,
    },
    Plane {
        normal: [f32; 3],
        distance: f32,
        #[serde(default)]
        surface: SurfaceDesc,
    },
    Point {
        center: [f32; 3],
        #[serde(default)]
        surface: SurfaceDesc,
    },
    Light {
        center: [f32; 3],
        #[serde(default = "white")]
        color: [f32; 3],
        #[serde(default = "one")]
        brightness: f32,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraDesc {
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default)]
    pub roll: f32,
    pub focal_length: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 6.0],
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            focal_length: 500.0,
        }
    }
}

/// A complete scene description.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    #[serde(default = "white")]
    pub ambient_color: [f32; 3],
    #[serde(default)]
    pub ambient_brightness: f32,
    #[serde(default)]
    pub camera: CameraDesc,
    pub objects: Vec<ObjectDesc>,
}

impl SceneFile {
    /// Load a scene description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SceneFileResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> SceneFileResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The built-in demo scene: a floor, four spheres and one orbiting light.
    pub fn demo() -> SceneFileResult<Self> {
        Self::from_json(DEMO_SCENE)
    }

    /// Build the scene and a camera rendering at `width` x `height`.
    ///
    /// The scene is not prepared; call [`Scene::prepare`] before rendering.
    pub fn build(&self, width: u32, height: u32) -> SceneFileResult<(Scene, Camera)> {
        let camera_desc = &self.camera;
        if camera_desc.focal_length <= 0.0 {
            return Err(SceneFileError::InvalidFocalLength(camera_desc.focal_length));
        }

        let camera = Camera::new()
            .with_resolution(width, height)
            .with_position(Vec3::from_array(camera_desc.position))
            .with_orientation(Orientation::from_degrees(
                camera_desc.yaw,
                camera_desc.pitch,
                camera_desc.roll,
            ))
            .with_focal_length(camera_desc.focal_length);

        let mut scene = Scene::new(Vec3::from_array(self.ambient_color), self.ambient_brightness);
        for (index, object) in self.objects.iter().enumerate() {
            match object {
                ObjectDesc::Sphere {
                    center,
                    radius,
                    surface,
                } => {
                    if *radius <= 0.0 {
                        return Err(SceneFileError::InvalidRadius {
                            index,
                            radius: *radius,
                        });
                    }
                    scene.add_object(Sphere::new(Vec3::from_array(*center), *radius, surface.into()));
                }
                ObjectDesc::Plane {
                    normal,
                    distance,
                    surface,
                } => {
                    let normal = Vec3::from_array(*normal);
                    if normal.length_squared() == 0.0 {
                        return Err(SceneFileError::ZeroNormal { index });
                    }
                    scene.add_object(Plane::new(normal, *distance, surface.into()));
                }
                ObjectDesc::Point { center, surface } => {
                    scene.add_object(Point::new(Vec3::from_array(*center), surface.into()));
                }
                ObjectDesc::Light {
                    center,
                    color,
                    brightness,
                } => {
                    scene.add_object(Light::point(
                        Vec3::from_array(*center),
                        Vec3::from_array(*color),
                        *brightness,
                    ));
                }
            }
        }

        log::debug!(
            "Built scene with {} objects ({} lights)",
            scene.objects().len(),
            scene.light_count()
        );

        Ok((scene, camera))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotoray_core::Object;

    #[test]
    fn test_demo_scene_builds() {
        let (scene, camera) = SceneFile::demo().unwrap().build(320, 240).unwrap();
        assert_eq!(scene.objects().len(), 6);
        assert_eq!(scene.light_count(), 1);
        assert_eq!((camera.width, camera.height), (320, 240));
        assert!(matches!(scene.objects()[0], Object::Plane(_)));
    }

    #[test]
    fn test_demo_light_sits_just_above_floor() {
        let (scene, _) = SceneFile::demo().unwrap().build(320, 240).unwrap();
        let Object::Plane(floor) = scene.objects()[0] else {
            panic!("first demo object is the floor");
        };

        let height = floor.normal.dot(scene.lights().next().unwrap().center()) + floor.distance;
        assert!(height > 0.0 && height < 1.0, "light height above floor: {height}");
    }

    #[test]
    fn test_defaults_fill_in() {
        let text = r#"{
            "objects": [
                { "type": "sphere", "center": [0, 0, 0], "radius": 2 },
                { "type": "light", "center": [1, 2, 3] }
            ]
        }"#;
        let file = SceneFile::from_json(text).unwrap();
        assert_eq!(file.camera.focal_length, 500.0);

        let (scene, camera) = file.build(10, 10).unwrap();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 6.0));
        assert_eq!(scene.ambient_brightness, 0.0);

        let Object::Sphere(sphere) = scene.objects()[0] else {
            panic!("expected a sphere");
        };
        assert_eq!(sphere.surface, Surface::default());

        let light = scene.lights().next().unwrap();
        assert_eq!(light.color(), Vec3::ONE);
        assert_eq!(light.brightness, 1.0);
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let sphere = r#"{ "objects": [ { "type": "sphere", "center": [0, 0, 0], "radius": 0 } ] }"#;
        assert!(matches!(
            SceneFile::from_json(sphere).unwrap().build(4, 4),
            Err(SceneFileError::InvalidRadius { index: 0, .. })
        ));

        let plane = r#"{ "objects": [
            { "type": "light", "center": [0, 0, 0] },
            { "type": "plane", "normal": [0, 0, 0], "distance": 1 }
        ] }"#;
        assert!(matches!(
            SceneFile::from_json(plane).unwrap().build(4, 4),
            Err(SceneFileError::ZeroNormal { index: 1 })
        ));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let text = r#"{ "objects": [ { "type": "torus", "center": [0, 0, 0] } ] }"#;
        assert!(matches!(SceneFile::from_json(text), Err(SceneFileError::Parse(_))));
    }
}
