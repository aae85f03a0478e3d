//! Faces Resolver Library
//!
//! This library maps face identifiers to optional face images. A face without
//! a usable image resolves to [`Resolution::TextFallback`], telling the caller
//! to render the face as text instead.

pub mod cache;
pub mod display;
pub mod resolver;

pub use cache::CachingResolver;
pub use display::{FaceContent, FaceDisplay};
pub use resolver::AssetResolver;

use faces_core::{Face, FACE_SIZE, MAX_FACE_SIZE};
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::Arc;

/// Result type for faces-resolver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for faces-resolver operations
///
/// These never escape [`FaceSource::resolve`]; they describe why a lookup
/// fell back to text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Faces core error: {0}")]
    Core(#[from] faces_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid face identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Invalid face size: {0}")]
    InvalidSize(u32),
}

/// Resolver configuration
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Directory holding `<face>.png` files
    pub asset_dir: PathBuf,
    /// Edge length images are resized to, `1..=MAX_FACE_SIZE`
    pub size: u32,
}

impl ResolverConfig {
    /// Creates a configuration for `asset_dir` with the canonical size
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            size: FACE_SIZE,
        }
    }

    /// Checks that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_FACE_SIZE).contains(&self.size) {
            return Err(Error::InvalidSize(self.size));
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// A decoded face image
#[derive(Debug, Clone, PartialEq)]
pub struct FaceImage {
    /// Lowercase identifier the image was resolved for
    pub name: String,
    /// RGBA pixels at the configured size
    pub image: Arc<RgbaImage>,
    /// Width of the file before resizing
    pub source_width: u32,
    /// Height of the file before resizing
    pub source_height: u32,
}

impl FaceImage {
    /// Width of the decoded image in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the decoded image in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether the file had to be resized
    pub fn was_resized(&self) -> bool {
        self.source_width != self.width() || self.source_height != self.height()
    }
}

/// Outcome of resolving a face identifier
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// An image is available
    Image(FaceImage),
    /// No usable image; render the text face instead
    TextFallback,
}

impl Resolution {
    /// Returns the image, if any
    pub fn image(&self) -> Option<&FaceImage> {
        match self {
            Resolution::Image(image) => Some(image),
            Resolution::TextFallback => None,
        }
    }

    /// Consumes the resolution, returning the image if any
    pub fn into_image(self) -> Option<FaceImage> {
        match self {
            Resolution::Image(image) => Some(image),
            Resolution::TextFallback => None,
        }
    }

    /// Whether the caller should fall back to text
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::TextFallback)
    }
}

/// Anything that can resolve face identifiers to images
pub trait FaceSource: Send + Sync {
    /// Resolves an identifier; never fails, absence is [`Resolution::TextFallback`]
    fn resolve(&self, name: &str) -> Resolution;

    /// Resolves a face from the vocabulary
    fn resolve_face(&self, face: Face) -> Resolution {
        self.resolve(face.as_str())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Writes a translucent cyan `<name>.png` of the given size
    pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(format!("{}.png", name));
        RgbaImage::from_pixel(width, height, Rgba([90, 210, 235, 128]))
            .save(&path)
            .unwrap();
        path
    }

    /// Writes a PNG cut off in the middle of its data
    pub fn write_truncated(dir: &Path, name: &str) -> PathBuf {
        let path = write_png(dir, name, 80, 80);
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
        path
    }

    /// Writes bytes that are not an image at all
    pub fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(format!("{}.png", name));
        fs::write(&path, b"definitely not a png").unwrap();
        path
    }
}
