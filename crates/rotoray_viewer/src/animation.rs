//! Per-tick animation of the demo scene.

use rotoray_core::{Camera, Orientation, Scene};
use rotoray_math::Vec3;

/// Phase advance per tick.
const STEP: f32 = 0.02;

/// Radius of the first light's orbit around the Y axis.
const LIGHT_ORBIT: f32 = 3.5;

/// Animation state, carried explicitly from frame to frame.
///
/// Each tick orbits the first light and gently sways the camera around
/// the pose it had when the animation was created.
#[derive(Debug, Clone)]
pub struct Animation {
    phase: f32,
    base_position: Vec3,
    base_orientation: Orientation,
}

impl Animation {
    pub fn new(camera: &Camera) -> Self {
        Self {
            phase: 0.0,
            base_position: camera.position,
            base_orientation: camera.orientation,
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advance one tick and apply it to `scene` and `camera`.
    ///
    /// The scene is left unprepared.
    pub fn tick(&mut self, scene: &mut Scene, camera: &mut Camera) {
        self.phase += STEP;
        let r = self.phase;

        if let Some(light) = scene.light_mut(0) {
            let center = light.center();
            light.set_center(Vec3::new(r.cos() * LIGHT_ORBIT, center.y, r.sin() * LIGHT_ORBIT));
        }

        camera.orientation = Orientation::new(
            self.base_orientation.yaw + r.sin() / 4.0,
            self.base_orientation.pitch + (r * 10.0).sin() / 100.0,
            self.base_orientation.roll + r.cos() / 10.0,
        );
        camera.position.x = self.base_position.x + r.cos() / 10.0;
        camera.position.z = self.base_position.z + r.sin() / 10.0;
    }
}
