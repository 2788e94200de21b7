use thiserror::Error;

/// Errors that can occur while setting up a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to create render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Pixel buffer too small: need {required} pixels, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;
