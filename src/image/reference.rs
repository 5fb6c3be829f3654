// Image references and request options.
// Resolves catalog file names against the configured image source.

use std::fmt;
use std::path::PathBuf;

/// Opaque locator for an image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageRef {
    /// Fetched over HTTP(S).
    Remote(String),
    /// Read from disk.
    Local(PathBuf),
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Remote(url) => write!(f, "{}", url),
            ImageRef::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Per-request customisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Target decode size in pixels (width, height). The image is scaled
    /// and cropped to fill it.
    pub size: Option<(u32, u32)>,
}

impl RequestOptions {
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            size: Some((width.max(1), height.max(1))),
        }
    }
}

/// Where catalog images come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote { base_url: String },
    Local { dir: PathBuf },
    /// No source configured; every reference resolves to nothing.
    Unavailable,
}

impl ImageSource {
    /// Build a source, preferring a remote base URL over a local directory.
    pub fn new(base_url: Option<&str>, dir: Option<PathBuf>) -> Self {
        match (base_url, dir) {
            (Some(url), _) if !url.trim().is_empty() => ImageSource::Remote {
                base_url: url.trim().trim_end_matches('/').to_string(),
            },
            (_, Some(dir)) => ImageSource::Local { dir },
            _ => ImageSource::Unavailable,
        }
    }

    /// Resolve a catalog file name to a reference.
    pub fn resolve(&self, file: &str) -> Option<ImageRef> {
        match self {
            ImageSource::Remote { base_url } => {
                Some(ImageRef::Remote(format!("{}/{}", base_url, file)))
            }
            ImageSource::Local { dir } => Some(ImageRef::Local(dir.join(file))),
            ImageSource::Unavailable => None,
        }
    }
}
