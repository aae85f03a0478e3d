//! Faces Core Library
//!
//! This library provides the face vocabulary shared by the resolver, the
//! generator and the CLI, the text faces shown when no image exists, and a
//! lightweight PNG header probe.

pub mod face;
pub mod png_header;
pub mod texts;

pub use face::Face;
pub use png_header::{PngColorType, PngHeader};
pub use texts::FaceTexts;

/// Canonical edge length of a face image in pixels
pub const FACE_SIZE: u32 = 80;

/// Largest edge length a face image may be configured to
pub const MAX_FACE_SIZE: u32 = 1024;

/// File extension of face image assets
pub const FACE_EXTENSION: &str = "png";

/// Result type for faces-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for faces-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown face: {0}")]
    UnknownFace(String),

    #[error("Invalid PNG signature")]
    InvalidSignature,

    #[error("First PNG chunk is not IHDR")]
    MissingIhdr,

    #[error("Invalid image dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),

    #[error("Unsupported PNG color type: {0}")]
    UnsupportedColorType(u8),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
