use crate::font::{Font, GlyphSource};
use crate::LogoError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A CSS-style font weight, from 100 (thin) to 900 (black) in steps of 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u16);

impl Weight {
    pub const THIN: Weight = Weight(100);
    pub const LIGHT: Weight = Weight(300);
    pub const REGULAR: Weight = Weight(400);
    pub const MEDIUM: Weight = Weight(500);
    pub const SEMI_BOLD: Weight = Weight(600);
    pub const BOLD: Weight = Weight(700);
    pub const BLACK: Weight = Weight(900);

    pub fn new(value: u16) -> Result<Weight, LogoError> {
        if (100..=900).contains(&value) && value % 100 == 0 {
            Ok(Weight(value))
        } else {
            Err(LogoError::InvalidWeight(value.to_string()))
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::REGULAR
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Weight {
    type Err = LogoError;

    /// Parse a numeric weight, or one of the keywords `regular` / `normal` and `bold`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" | "normal" => Ok(Weight::REGULAR),
            "bold" => Ok(Weight::BOLD),
            other => other
                .parse::<u16>()
                .map_err(|_| LogoError::InvalidWeight(s.to_string()))
                .and_then(Weight::new),
        }
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u16),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Weight::new(n),
            Repr::Text(s) => s.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}

/// Identifies one font file: a family at a weight
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub family: String,
    pub weight: Weight,
}

impl FontKey {
    pub fn new<S: Into<String>>(family: S, weight: Weight) -> FontKey {
        FontKey {
            family: family.into(),
            weight,
        }
    }

    /// File name without extension: whitespace runs in the family become dashes,
    /// e.g. `Open-Sans-700`
    pub fn file_stem(&self) -> String {
        let family = self.family.split_whitespace().collect::<Vec<_>>().join("-");
        format!("{family}-{}", self.weight)
    }
}

impl fmt::Display for FontKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.weight)
    }
}

/// Somewhere fonts come from. Loading may be slow (disk, network); callers are
/// expected to put a [FontCache](crate::FontCache) in front of it.
pub trait FontSource {
    type Font: GlyphSource;

    fn load(&self, key: &FontKey) -> Result<Self::Font, LogoError>;
}

/// Font files extensions tried, in order
const EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Loads fonts from a directory of `{Family-Name}-{weight}.ttf` (or `.otf`) files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> DirectorySource {
        DirectorySource {
            root: root.as_ref().to_owned(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The first existing file for `key`, if any
    pub fn path_for(&self, key: &FontKey) -> Option<PathBuf> {
        let stem = key.file_stem();
        EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{stem}.{ext}")))
            .find(|path| path.is_file())
    }
}

impl FontSource for DirectorySource {
    type Font = Font;

    fn load(&self, key: &FontKey) -> Result<Font, LogoError> {
        let path = self
            .path_for(key)
            .ok_or_else(|| LogoError::FontNotFound(key.clone()))?;
        log::debug!("loading {key} from {}", path.display());
        let bytes = std::fs::read(&path)?;
        Font::load(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_parse() {
        assert_eq!("700".parse::<Weight>().expect("valid"), Weight::BOLD);
        assert_eq!("regular".parse::<Weight>().expect("valid"), Weight::REGULAR);
        assert_eq!(" Bold ".parse::<Weight>().expect("valid"), Weight::BOLD);
        for bad in ["0", "950", "450", "heavy", ""] {
            assert!(
                matches!(bad.parse::<Weight>(), Err(LogoError::InvalidWeight(_))),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn weights_deserialize_from_numbers_and_keywords() {
        #[derive(Deserialize)]
        struct W {
            weight: Weight,
        }
        let w: W = toml::from_str("weight = 300").expect("valid");
        assert_eq!(w.weight, Weight::LIGHT);
        let w: W = toml::from_str("weight = \"bold\"").expect("valid");
        assert_eq!(w.weight, Weight::BOLD);
        assert!(toml::from_str::<W>("weight = 1000").is_err());
    }

    #[test]
    fn file_names_dash_the_family() {
        let key = FontKey::new("Playfair  Display", Weight::BOLD);
        assert_eq!(key.file_stem(), "Playfair-Display-700");
        assert_eq!(key.to_string(), "Playfair  Display 700");
    }

    #[test]
    fn missing_files_are_not_found() {
        let source = DirectorySource::new(std::env::temp_dir().join("wordmark-no-such-dir"));
        let key = FontKey::new("Inter", Weight::REGULAR);
        assert!(matches!(source.load(&key), Err(LogoError::FontNotFound(k)) if k == key));
    }

    #[test]
    fn unreadable_fonts_fail_to_parse() {
        let dir = std::env::temp_dir().join(format!("wordmark-source-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("can create dir");
        std::fs::write(dir.join("Broken-Font-400.otf"), b"not a font").expect("can write");

        let source = DirectorySource::new(&dir);
        let key = FontKey::new("Broken Font", Weight::REGULAR);
        assert_eq!(source.path_for(&key), Some(dir.join("Broken-Font-400.otf")));
        assert!(matches!(source.load(&key), Err(LogoError::FaceParsingError(_))));

        std::fs::remove_dir_all(&dir).expect("can clean up");
    }
}
