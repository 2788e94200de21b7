use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "rotoray_viewer")]
#[command(about = "Render animated ray traced frames to PNG files")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Number of frames to render
    #[arg(long, short = 'n', default_value_t = 1)]
    pub frames: u32,

    /// Render threads including the main thread (defaults to the CPU count)
    #[arg(long, short = 't')]
    pub threads: Option<usize>,

    /// JSON scene description (defaults to the built-in demo scene)
    #[arg(long, short = 's')]
    pub scene: Option<PathBuf>,

    /// Directory to write frame_NNNN.png files into
    #[arg(long, short = 'o', default_value = "frames")]
    pub output: PathBuf,

    /// Keep the scene and camera still between frames
    #[arg(long)]
    pub no_animation: bool,

    /// Log level (off, error, warn, info, debug, trace); defaults to RUST_LOG, then info
    #[arg(long)]
    pub log_level: Option<LevelFilter>,
}
