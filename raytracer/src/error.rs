use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("image size must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("super samples must be at least 1")]
    ZeroSuperSamples,

    #[error("spawn radius must be a positive finite number, got {0}")]
    InvalidSpawnRadius(f64),

    #[error("jobs and workers must be at least 1, got {jobs} jobs and {workers} workers")]
    ZeroConcurrency { jobs: usize, workers: usize },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("only {received} of {expected} image bands were rendered")]
    MissingBands { expected: usize, received: usize },
}
