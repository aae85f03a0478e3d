//! Renders faces and writes them as PNG assets

use crate::features::CANVAS;
use crate::{canvas, faces, Error, GeneratorConfig, Result};
use faces_core::{Face, MAX_FACE_SIZE};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Face image generator
#[derive(Default)]
pub struct FaceGenerator {
    config: GeneratorConfig,
}

impl FaceGenerator {
    /// Creates a new generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        if !(1..=MAX_FACE_SIZE).contains(&config.size) {
            return Err(Error::InvalidSize(config.size));
        }
        Ok(Self { config })
    }

    /// Gets the generator configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders one face at the configured size
    pub fn render(&self, face: Face) -> RgbaImage {
        let mut drawing = RgbaImage::new(CANVAS, CANVAS);
        faces::draw(face, &mut drawing);

        let image = if self.config.soft_edge > 0.0 {
            canvas::soft_edge(&drawing, self.config.soft_edge)
        } else {
            drawing
        };

        let size = self.config.size;
        if size == CANVAS {
            image
        } else {
            imageops::resize(&image, size, size, FilterType::Lanczos3)
        }
    }

    /// Renders one face and writes it to `<output_dir>/<face>.png`
    pub fn generate<P: AsRef<Path>>(&self, face: Face, output_dir: P) -> Result<PathBuf> {
        let path = output_dir.as_ref().join(face.file_name());
        self.render(face).save(&path)?;
        log::info!("Created {} - {}", face.file_name(), faces::describe(face));
        Ok(path)
    }

    /// Writes every face of the vocabulary into `output_dir`, creating it if needed
    pub fn generate_all<P: AsRef<Path>>(&self, output_dir: P) -> Result<Vec<PathBuf>> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir)?;
        log::info!("Generating face images in {}", output_dir.display());

        let paths = Face::ALL
            .into_iter()
            .map(|face| self.generate(face, output_dir))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Generated {} face images, {}x{} PNG with transparent backgrounds",
            paths.len(),
            self.config.size,
            self.config.size
        );
        Ok(paths)
    }
}
