//! Faces Generator Library
//!
//! This library draws the full face vocabulary procedurally and writes one
//! PNG per face, named the way the resolver expects.

pub mod canvas;
pub mod faces;
pub mod features;
pub mod generator;

pub use generator::FaceGenerator;

use faces_core::{FACE_SIZE, MAX_FACE_SIZE};

/// Result type for faces-gen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for faces-gen operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid output size: {0}")]
    InvalidSize(u32),
}

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Edge length of the written images in pixels, `1..=MAX_FACE_SIZE`
    pub size: u32,
    /// Gaussian sigma of the soft edge (0 disables it)
    pub soft_edge: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: FACE_SIZE,
            soft_edge: 1.2,
        }
    }
}
