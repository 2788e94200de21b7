//! Frame rendering across a persistent worker pool.
//!
//! Every frame is a fork/join: the destination fragment is divided into
//! one row band per worker, the calling thread renders the first band
//! itself while pool threads render the rest, and `render` returns only
//! once every band is finished.

use crate::fragment::Fragment;
use crate::tracer::trace;
use crate::RenderResult;
use rayon::{ThreadPool, ThreadPoolBuilder};
use rotoray_core::{Camera, CameraFrame, Scene};
use rotoray_math::color_to_rgb;

/// Ray trace `scene` as seen by `camera` into one fragment.
///
/// The fragment's x/y are absolute within the camera's image, so a band of
/// a larger frame renders exactly the pixels it would in a full render.
pub fn render_fragment(scene: &Scene, camera: &Camera, fragment: &mut Fragment<'_>) {
    let mut frame = CameraFrame::begin(camera, fragment.x, fragment.y, fragment.width, fragment.height);
    if frame.is_empty() {
        return;
    }

    let pitch = fragment.pitch();
    let buf = fragment.buf_mut();
    let mut row_start = 0;

    loop {
        let mut offset = row_start;
        loop {
            buf[offset] = color_to_rgb(trace(scene, &frame.ray()));
            offset += 1;
            if !frame.x_step() {
                break;
            }
        }

        row_start += pitch;
        if !frame.y_step() {
            break;
        }
    }
}

/// Multi-threaded frame renderer.
///
/// Owns `workers - 1` long-lived pool threads; the calling thread is
/// always the remaining worker. Create once and reuse for every frame.
#[derive(Debug)]
pub struct Renderer {
    pool: Option<ThreadPool>,
    workers: usize,
}

impl Renderer {
    /// Create a renderer using `workers` threads in total.
    ///
    /// `workers <= 1` renders on the calling thread only.
    pub fn new(workers: usize) -> RenderResult<Self> {
        if workers <= 1 {
            return Ok(Self::single_threaded());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers - 1)
            .thread_name(|i| format!("rotoray-worker-{i}"))
            .build()?;

        log::debug!("Render pool created: {} threads + caller", workers - 1);

        Ok(Self {
            pool: Some(pool),
            workers,
        })
    }

    /// Create a renderer that never leaves the calling thread.
    pub fn single_threaded() -> Self {
        Self {
            pool: None,
            workers: 1,
        }
    }

    /// Like [`new`](Renderer::new), but falls back to single-threaded
    /// rendering if the pool cannot be created.
    pub fn new_or_single_threaded(workers: usize) -> Self {
        match Self::new(workers) {
            Ok(renderer) => renderer,
            Err(err) => {
                log::warn!("{err}; rendering on a single thread");
                Self::single_threaded()
            }
        }
    }

    /// Number of threads, including the caller, that render each frame.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Render one complete frame into `fragment`.
    ///
    /// The scene must have been prepared for `camera` since it last changed.
    /// Blocks until every pixel of `fragment` has been written.
    pub fn render(&self, scene: &Scene, camera: &Camera, mut fragment: Fragment<'_>) {
        let Some(pool) = &self.pool else {
            render_fragment(scene, camera, &mut fragment);
            return;
        };

        // Recomputed every frame so the destination may change size freely
        let mut fragments = fragment.divide(self.workers).into_iter();
        log::trace!("Rendering frame in {} fragments", self.workers);

        let own = fragments.next();
        pool.in_place_scope(|scope| {
            for mut fragment in fragments {
                scope.spawn(move |_| render_fragment(scene, camera, &mut fragment));
            }
            if let Some(mut fragment) = own {
                render_fragment(scene, camera, &mut fragment);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotoray_core::{Light, Plane, Sphere, Surface};
    use rotoray_math::{Color, Vec3};

    const WIDTH: u32 = 64;
    const HEIGHT: u32 = 48;

    fn red_sphere_scene(camera: &Camera) -> Scene {
        let mut scene = Scene::new(Color::ONE, 0.0)
            .with_object(Sphere::new(Vec3::ZERO, 1.0, Surface::new(Color::new(1.0, 0.0, 0.0))))
            .with_object(Light::point(Vec3::new(3.0, 3.0, 3.0), Color::ONE, 1.0));
        scene.prepare(camera);
        scene
    }

    fn camera() -> Camera {
        Camera::new()
            .with_resolution(WIDTH, HEIGHT)
            .with_position(Vec3::new(0.0, 0.0, 6.0))
            .with_focal_length(60.0)
    }

    fn channels(pixel: u32) -> (u32, u32, u32) {
        ((pixel >> 16) & 0xFF, (pixel >> 8) & 0xFF, pixel & 0xFF)
    }

    fn render_with(workers: usize, scene: &Scene, camera: &Camera) -> Vec<u32> {
        let mut buf = vec![0xFFFF_FFFF; (WIDTH * HEIGHT) as usize];
        let fragment = Fragment::new(&mut buf, WIDTH, HEIGHT, 0).unwrap();
        Renderer::new(workers).unwrap().render(scene, camera, fragment);
        buf
    }

    #[test]
    fn test_red_sphere_end_to_end() {
        let camera = camera();
        let scene = red_sphere_scene(&camera);
        let buf = render_with(1, &scene, &camera);

        let center = buf[(HEIGHT / 2 * WIDTH + WIDTH / 2) as usize];
        let (r, g, b) = channels(center);
        assert!(r > 0, "center pixel is lit: {center:#08x}");
        assert!(r > g && r > b, "center pixel is red: {center:#08x}");
        assert_eq!(center >> 24, 0);

        // corners are far outside the silhouette and there is no ambient light
        for (x, y) in [(0, 0), (WIDTH - 1, 0), (0, HEIGHT - 1), (WIDTH - 1, HEIGHT - 1)] {
            assert_eq!(buf[(y * WIDTH + x) as usize], 0, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_thread_count_does_not_change_image() {
        let camera = camera();
        let mut scene = red_sphere_scene(&camera);
        scene.add_object(Plane::new(
            Vec3::Y,
            1.5,
            Surface::new(Color::new(0.4, 0.2, 0.5)).with_specular(0.2, 8.0),
        ));
        scene.prepare(&camera);

        let single = render_with(1, &scene, &camera);
        for workers in [2, 3, 5, 64] {
            assert_eq!(render_with(workers, &scene, &camera), single, "workers={workers}");
        }
    }

    #[test]
    fn test_render_respects_stride() {
        let camera = camera();
        let scene = red_sphere_scene(&camera);
        let stride = 5;
        let pitch = (WIDTH + stride) as usize;

        let mut buf = vec![0xDEAD_BEEF; pitch * HEIGHT as usize];
        let fragment = Fragment::new(&mut buf, WIDTH, HEIGHT, stride).unwrap();
        Renderer::new(3).unwrap().render(&scene, &camera, fragment);

        let packed = render_with(1, &scene, &camera);
        for y in 0..HEIGHT as usize {
            let row = &buf[y * pitch..(y + 1) * pitch];
            assert_eq!(&row[..WIDTH as usize], &packed[y * WIDTH as usize..(y + 1) * WIDTH as usize]);
            assert!(row[WIDTH as usize..].iter().all(|&p| p == 0xDEAD_BEEF));
        }
    }

    #[test]
    fn test_sub_fragment_matches_full_frame() {
        let camera = camera();
        let scene = red_sphere_scene(&camera);
        let full = render_with(1, &scene, &camera);

        // the middle 20x10 block, rendered as its own fragment
        let (x0, y0, w, h) = (22, 19, 20, 10);
        let mut buf = vec![0u32; (w * h) as usize];
        let fragment = Fragment::new(&mut buf, w, h, 0).unwrap().at(x0, y0);
        Renderer::new(2).unwrap().render(&scene, &camera, fragment);

        for y in 0..h {
            for x in 0..w {
                let expected = full[((y0 + y) * WIDTH + x0 + x) as usize];
                assert_eq!(buf[(y * w + x) as usize], expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_single_threaded_renderer() {
        let renderer = Renderer::new_or_single_threaded(1);
        assert_eq!(renderer.workers(), 1);
        assert!(renderer.pool.is_none());

        let renderer = Renderer::new(4).unwrap();
        assert_eq!(renderer.workers(), 4);
    }
}
