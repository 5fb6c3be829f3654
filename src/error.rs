// Error types for bloom.
// Covers terminal I/O, configuration, and the image loader's single error kind.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BloomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BloomError>;

/// Why an image could not be shown.
///
/// Never fatal: the consuming view renders a placeholder instead.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("decode task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for ImageLoadError {
    fn from(e: reqwest::Error) -> Self {
        ImageLoadError::Fetch(e.to_string())
    }
}

impl From<std::io::Error> for ImageLoadError {
    fn from(e: std::io::Error) -> Self {
        ImageLoadError::Fetch(e.to_string())
    }
}
