mod animation;
mod cli;
mod logger;
mod output;
mod scene_file;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rotoray_renderer::Renderer;

use crate::animation::Animation;
use crate::cli::Args;
use crate::output::FrameBuffer;
use crate::scene_file::SceneFile;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level);

    log::info!("Starting rotoray viewer");

    let scene_file = match &args.scene {
        Some(path) => SceneFile::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => SceneFile::demo().context("Built-in demo scene is invalid")?,
    };
    let (mut scene, mut camera) = scene_file
        .build(args.width, args.height)
        .context("Invalid scene description")?;

    let workers = args.threads.unwrap_or_else(num_cpus::get);
    let renderer = Renderer::new_or_single_threaded(workers);
    log::info!(
        "Rendering {} frame(s) at {}x{} on {} thread(s)",
        args.frames,
        args.width,
        args.height,
        renderer.workers()
    );

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let mut animation = Animation::new(&camera);
    let mut frame = FrameBuffer::new(args.width, args.height)?;

    for n in 0..args.frames {
        if !args.no_animation {
            animation.tick(&mut scene, &mut camera);
            log::debug!("Animation phase {:.2}", animation.phase());
        }
        scene.prepare(&camera);

        let start = Instant::now();
        renderer.render(&scene, &camera, frame.fragment()?);
        let elapsed = start.elapsed();

        let path = args.output.join(format!("frame_{n:04}.png"));
        frame
            .save_png(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        log::info!("Frame {} rendered in {:?} -> {}", n, elapsed, path.display());
    }

    Ok(())
}
