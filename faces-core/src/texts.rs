//! Text faces in use by the display

use crate::Face;
use std::collections::HashMap;

/// The text face shown for each face, starting from the defaults
///
/// Users may replace individual text faces; lookups in both directions
/// honour the overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceTexts {
    overrides: HashMap<Face, String>,
}

impl FaceTexts {
    /// Creates the default text faces
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text face for one face
    pub fn with_override(mut self, face: Face, text: impl Into<String>) -> Self {
        self.set(face, text);
        self
    }

    /// Replaces the text face for one face in place
    pub fn set(&mut self, face: Face, text: impl Into<String>) {
        self.overrides.insert(face, text.into());
    }

    /// Returns the text face currently used for `face`
    pub fn text(&self, face: Face) -> &str {
        self.overrides
            .get(&face)
            .map(String::as_str)
            .unwrap_or_else(|| face.default_text())
    }

    /// Maps a displayed text face back to its face
    pub fn face_for_text(&self, text: &str) -> Option<Face> {
        Face::ALL.into_iter().find(|&f| self.text(f) == text)
    }

    /// Loads overrides from a JSON object of `{"face_id": "text"}`
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let overrides: HashMap<Face, String> = serde_json::from_str(json)?;
        Ok(Self { overrides })
    }
}
