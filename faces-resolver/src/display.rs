//! Chooses between a face image and its text face

use crate::{FaceImage, FaceSource, Resolution};
use faces_core::{Face, FaceTexts};

/// What the display should draw for a face
#[derive(Debug, Clone, PartialEq)]
pub enum FaceContent {
    Image(FaceImage),
    Text(String),
}

impl FaceContent {
    /// Returns the text, if the face is drawn as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FaceContent::Text(text) => Some(text),
            FaceContent::Image(_) => None,
        }
    }
}

/// Maps text face values to images where an image exists
pub struct FaceDisplay<S> {
    source: S,
    texts: FaceTexts,
}

impl<S: FaceSource> FaceDisplay<S> {
    /// Creates a display using the default text faces
    pub fn new(source: S) -> Self {
        Self::with_texts(source, FaceTexts::default())
    }

    /// Creates a display using customised text faces
    pub fn with_texts(source: S, texts: FaceTexts) -> Self {
        Self { source, texts }
    }

    /// Gets the text faces in use
    pub fn texts(&self) -> &FaceTexts {
        &self.texts
    }

    /// Gets the image source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Content for a text face value as set by the host
    ///
    /// Text that is not one of the known text faces is shown as is.
    pub fn show(&self, text: &str) -> FaceContent {
        match self.texts.face_for_text(text) {
            Some(face) => self.image_or(face, text),
            None => FaceContent::Text(text.to_string()),
        }
    }

    /// Content for a face from the vocabulary
    pub fn show_face(&self, face: Face) -> FaceContent {
        self.image_or(face, self.texts.text(face))
    }

    fn image_or(&self, face: Face, text: &str) -> FaceContent {
        match self.source.resolve_face(face) {
            Resolution::Image(image) => {
                log::debug!("Using image for face {}", face);
                FaceContent::Image(image)
            }
            Resolution::TextFallback => FaceContent::Text(text.to_string()),
        }
    }
}
