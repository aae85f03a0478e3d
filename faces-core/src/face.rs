//! Face vocabulary

use crate::{Error, Result, FACE_EXTENSION};
use std::fmt;
use std::str::FromStr;

/// A symbolic face name from the fixed vocabulary understood by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Face {
    Awake,
    Happy,
    Sad,
    Excited,
    Bored,
    Angry,
    Cool,
    Grateful,
    Motivated,
    Demotivated,
    Intense,
    Smart,
    Lonely,
    Sleep,
    Sleep2,
    Friend,
    Broken,
    Debug,
    LookR,
    LookL,
    LookRHappy,
    LookLHappy,
    Upload,
    Upload1,
    Upload2,
}

impl Face {
    /// Every face in the vocabulary
    pub const ALL: [Face; 25] = [
        Face::Awake,
        Face::Happy,
        Face::Sad,
        Face::Excited,
        Face::Bored,
        Face::Angry,
        Face::Cool,
        Face::Grateful,
        Face::Motivated,
        Face::Demotivated,
        Face::Intense,
        Face::Smart,
        Face::Lonely,
        Face::Sleep,
        Face::Sleep2,
        Face::Friend,
        Face::Broken,
        Face::Debug,
        Face::LookR,
        Face::LookL,
        Face::LookRHappy,
        Face::LookLHappy,
        Face::Upload,
        Face::Upload1,
        Face::Upload2,
    ];

    /// Returns the lowercase identifier, which is also the asset file stem
    pub fn as_str(self) -> &'static str {
        match self {
            Face::Awake => "awake",
            Face::Happy => "happy",
            Face::Sad => "sad",
            Face::Excited => "excited",
            Face::Bored => "bored",
            Face::Angry => "angry",
            Face::Cool => "cool",
            Face::Grateful => "grateful",
            Face::Motivated => "motivated",
            Face::Demotivated => "demotivated",
            Face::Intense => "intense",
            Face::Smart => "smart",
            Face::Lonely => "lonely",
            Face::Sleep => "sleep",
            Face::Sleep2 => "sleep2",
            Face::Friend => "friend",
            Face::Broken => "broken",
            Face::Debug => "debug",
            Face::LookR => "look_r",
            Face::LookL => "look_l",
            Face::LookRHappy => "look_r_happy",
            Face::LookLHappy => "look_l_happy",
            Face::Upload => "upload",
            Face::Upload1 => "upload1",
            Face::Upload2 => "upload2",
        }
    }

    /// Returns the text face rendered when no image is available
    pub fn default_text(self) -> &'static str {
        match self {
            Face::Awake => "(◕‿‿◕)",
            Face::Happy => "(•‿‿•)",
            Face::Sad => "(╥☁╥ )",
            Face::Excited => "(ᵔ◡◡ᵔ)",
            Face::Bored => "(-__-)",
            Face::Angry => "(-_-')",
            Face::Cool => "(⌐■_■)",
            Face::Grateful => "(^‿‿^)",
            Face::Motivated => "(☼‿‿☼)",
            Face::Demotivated => "(≖__≖)",
            Face::Intense => "(°▃▃°)",
            Face::Smart => "(✜‿‿✜)",
            Face::Lonely => "(ب__ب)",
            Face::Sleep => "(⇀‿‿↼)",
            Face::Sleep2 => "(≖‿‿≖)",
            Face::Friend => "(♥‿‿♥)",
            Face::Broken => "(☓‿‿☓)",
            Face::Debug => "(#__#)",
            Face::LookR => "( ⚆_⚆)",
            Face::LookL => "(☉_☉ )",
            Face::LookRHappy => "( ◕‿◕)",
            Face::LookLHappy => "(◕‿◕ )",
            Face::Upload => "(1__0)",
            Face::Upload1 => "(1__1)",
            Face::Upload2 => "(0__1)",
        }
    }

    /// Returns the asset file name, e.g. `look_r.png`
    pub fn file_name(self) -> String {
        format!("{}.{}", self.as_str(), FACE_EXTENSION)
    }

    /// Looks up a face by its default text face
    pub fn from_default_text(text: &str) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.default_text() == text)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Face {
    type Err = Error;

    /// Parses an identifier, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        Face::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| Error::UnknownFace(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_roundtrip_through_from_str() {
        for face in Face::ALL {
            assert_eq!(face.as_str().parse::<Face>().unwrap(), face);
        }
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("Happy".parse::<Face>().unwrap(), Face::Happy);
        assert_eq!("LOOK_R_HAPPY".parse::<Face>().unwrap(), Face::LookRHappy);
        assert!(matches!(
            "grumpy".parse::<Face>(),
            Err(Error::UnknownFace(name)) if name == "grumpy"
        ));
    }

    #[test]
    fn test_from_str_keeps_whitespace() {
        for padded in [" happy", "happy ", "\thappy\n"] {
            assert!(padded.parse::<Face>().is_err(), "{padded:?}");
        }
    }

    #[test]
    fn test_vocabulary_is_unique() {
        let ids: HashSet<_> = Face::ALL.iter().map(|f| f.as_str()).collect();
        let texts: HashSet<_> = Face::ALL.iter().map(|f| f.default_text()).collect();
        assert_eq!(ids.len(), Face::ALL.len());
        assert_eq!(texts.len(), Face::ALL.len());
    }

    #[test]
    fn test_file_name_is_lowercase_png() {
        assert_eq!(Face::Sleep2.file_name(), "sleep2.png");
        assert_eq!(Face::LookLHappy.file_name(), "look_l_happy.png");
    }

    #[test]
    fn test_from_default_text() {
        assert_eq!(Face::from_default_text("(⌐■_■)"), Some(Face::Cool));
        assert_eq!(Face::from_default_text("(o_o)"), None);
    }
}
