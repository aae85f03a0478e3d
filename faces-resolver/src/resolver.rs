//! Face image lookup in an asset directory

use crate::{Error, FaceImage, FaceSource, Resolution, ResolverConfig, Result};
use faces_core::{Face, FACE_EXTENSION};
use image::imageops::{self, FilterType};
use std::path::{Path, PathBuf};

/// Resolves face identifiers to `<identifier>.png` files in one directory
///
/// Holds no mutable state; every call reads the filesystem afresh, so it can
/// be shared freely between threads.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    config: ResolverConfig,
}

impl AssetResolver {
    /// Creates a resolver for `asset_dir` producing canonical 80x80 images
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            config: ResolverConfig::new(asset_dir),
        }
    }

    /// Creates a resolver from a configuration
    pub fn with_config(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Gets the resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Directory searched for face images
    pub fn asset_dir(&self) -> &Path {
        &self.config.asset_dir
    }

    /// Returns the path an identifier maps to
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let stem = normalize_name(name)?;
        Ok(self
            .config
            .asset_dir
            .join(format!("{}.{}", stem, FACE_EXTENSION)))
    }

    /// Whether a file exists for the identifier, without decoding it
    pub fn has_image(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Faces of the vocabulary that currently have a file
    pub fn available(&self) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|f| self.has_image(f.as_str()))
            .collect()
    }

    /// Loads and resizes the image for an identifier
    ///
    /// Returns `Ok(None)` when there is no file and an error when the file
    /// exists but cannot be decoded.
    pub fn load(&self, name: &str) -> Result<Option<FaceImage>> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Ok(None);
        }
        self.decode(&path, name).map(Some)
    }

    /// Decodes the file at `path` into a face image at the configured size
    pub(crate) fn decode(&self, path: &Path, name: &str) -> Result<FaceImage> {
        let rgba = image::open(path)?.into_rgba8();
        let (source_width, source_height) = rgba.dimensions();

        let size = self.config.size;
        let image = if source_width == size && source_height == size {
            rgba
        } else {
            imageops::resize(&rgba, size, size, FilterType::Lanczos3)
        };

        Ok(FaceImage {
            name: normalize_name(name)?,
            image: image.into(),
            source_width,
            source_height,
        })
    }
}

impl FaceSource for AssetResolver {
    fn resolve(&self, name: &str) -> Resolution {
        match self.load(name) {
            Ok(Some(image)) => Resolution::Image(image),
            Ok(None) => {
                log::debug!("No face image for {:?}, using text", name);
                Resolution::TextFallback
            }
            Err(Error::InvalidIdentifier(_)) => {
                log::debug!("Ignoring invalid face identifier {:?}", name);
                Resolution::TextFallback
            }
            Err(e) => {
                log::warn!("Error loading face image {}: {}", name, e);
                Resolution::TextFallback
            }
        }
    }
}

/// Lowercases an identifier and checks that it is a plain file stem
pub(crate) fn normalize_name(name: &str) -> Result<String> {
    let lower = name.to_ascii_lowercase();
    let valid = !lower.is_empty()
        && lower
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !valid {
        return Err(Error::InvalidIdentifier(name.to_string()));
    }
    Ok(lower)
}
