//! PNG header probing
//!
//! Reads just the signature and the `IHDR` chunk so assets can be checked
//! without decoding their pixel data.

use crate::{Error, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PNG file signature
const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Chunk type of the image header
const IHDR: [u8; 4] = *b"IHDR";

/// Length of the IHDR chunk payload
const IHDR_LEN: u32 = 13;

/// PNG color types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngColorType {
    Grayscale,
    Rgb,
    Indexed,
    GrayscaleAlpha,
    Rgba,
}

impl PngColorType {
    fn from_byte(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Grayscale),
            2 => Ok(Self::Rgb),
            3 => Ok(Self::Indexed),
            4 => Ok(Self::GrayscaleAlpha),
            6 => Ok(Self::Rgba),
            other => Err(Error::UnsupportedColorType(other)),
        }
    }
}

/// Fields of a PNG image header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngHeader {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Bits per sample
    pub bit_depth: u8,
    /// Pixel layout
    pub color_type: PngColorType,
}

impl PngHeader {
    /// Reads a header from a reader positioned at the start of a PNG stream
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut signature = [0u8; 8];
        reader.read_exact(&mut signature)?;
        if signature != SIGNATURE {
            return Err(Error::InvalidSignature);
        }

        let length = reader.read_u32::<BigEndian>()?;
        let mut chunk_type = [0u8; 4];
        reader.read_exact(&mut chunk_type)?;
        if chunk_type != IHDR || length != IHDR_LEN {
            return Err(Error::MissingIhdr);
        }

        let width = reader.read_u32::<BigEndian>()?;
        let height = reader.read_u32::<BigEndian>()?;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions(width, height));
        }

        let bit_depth = reader.read_u8()?;
        let color_type = PngColorType::from_byte(reader.read_u8()?)?;

        Ok(Self {
            width,
            height,
            bit_depth,
            color_type,
        })
    }

    /// Reads the header of a PNG file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::read(&mut reader)
    }

    /// Whether pixels carry an alpha channel
    pub fn has_alpha(&self) -> bool {
        matches!(
            self.color_type,
            PngColorType::Rgba | PngColorType::GrayscaleAlpha
        )
    }

    /// Whether the image is square with the given edge length
    pub fn is_size(&self, size: u32) -> bool {
        self.width == size && self.height == size
    }
}
