//! Word and language catalogs loaded once at startup.

use super::error::CatalogError;
use super::word::SecretWord;
use derive_getters::Getters;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../../assets/catalog.toml");

/// An `#RRGGBB` display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parses `#RRGGBB` (case-insensitive hex digits).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for any other shape.
    #[instrument]
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| CatalogError::new(format!("Invalid color '{}', expected #RRGGBB", s)))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| CatalogError::new(format!("Invalid color '{}': {}", s, e)))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A programming language that can be eliminated.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Language {
    /// Display name.
    name: String,
    /// Chip background color.
    background: Rgb,
    /// Chip text color.
    color: Rgb,
}

impl Language {
    /// Creates a language entry.
    pub fn new(name: impl Into<String>, background: Rgb, color: Rgb) -> Self {
        Self {
            name: name.into(),
            background,
            color,
        }
    }
}

/// On-disk shape of a catalog, before validation.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    words: Vec<String>,
    languages: Vec<RawLanguage>,
}

#[derive(Debug, Deserialize)]
struct RawLanguage {
    name: String,
    background: String,
    color: String,
}

/// Validated, immutable game data: the secret-word list and the ordered
/// language list.
///
/// Guaranteed to hold at least one word and at least two languages, so
/// there is always at least one tolerable wrong guess.
#[derive(Debug, Clone, Getters)]
pub struct Catalog {
    /// Candidate secret words.
    words: Vec<SecretWord>,
    /// Languages in elimination order; the last one is the survivor.
    languages: Vec<Language>,
}

impl Catalog {
    /// Builds a catalog from already-parsed parts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if there are no words, fewer than two
    /// languages, or duplicate/empty language names.
    #[instrument(skip(words, languages), fields(words = words.len(), languages = languages.len()))]
    pub fn new(words: Vec<SecretWord>, languages: Vec<Language>) -> Result<Self, CatalogError> {
        if words.is_empty() {
            return Err(CatalogError::new("Catalog has no words"));
        }

        if languages.len() < 2 {
            return Err(CatalogError::new(format!(
                "Catalog needs at least 2 languages, found {}",
                languages.len()
            )));
        }

        let mut seen = HashSet::new();
        for language in &languages {
            if language.name.trim().is_empty() {
                return Err(CatalogError::new("Language name is empty"));
            }
            if !seen.insert(language.name.as_str()) {
                return Err(CatalogError::new(format!(
                    "Duplicate language '{}'",
                    language.name
                )));
            }
        }

        Ok(Self { words, languages })
    }

    /// Parses and validates a TOML catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the document is malformed or invalid.
    #[instrument(skip(content), fields(bytes = content.len()))]
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(content)?;

        let words = raw
            .words
            .iter()
            .map(|w| SecretWord::new(w))
            .collect::<Result<Vec<_>, _>>()?;

        let languages = raw
            .languages
            .into_iter()
            .map(|l| {
                Ok(Language::new(
                    l.name,
                    Rgb::parse(&l.background)?,
                    Rgb::parse(&l.color)?,
                ))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let catalog = Self::new(words, languages)?;
        debug!(
            words = catalog.words.len(),
            languages = catalog.languages.len(),
            "Catalog parsed"
        );
        Ok(catalog)
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        debug!("Loading catalog from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CatalogError::new(format!(
                "Failed to read catalog {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let catalog = Self::from_toml(&content)?;
        info!(
            words = catalog.words.len(),
            languages = catalog.languages.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// The catalog shipped with the game.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] only if the embedded document is broken.
    #[instrument]
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Number of wrong guesses that can be survived: every language but
    /// the last.
    pub fn tolerance(&self) -> usize {
        self.languages.len() - 1
    }

    /// The language that survives when the game is lost.
    pub fn survivor(&self) -> &Language {
        &self.languages[self.languages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_parse() {
        let rgb = Rgb::parse("#2D519f").unwrap();
        assert_eq!(rgb, Rgb { r: 0x2d, g: 0x51, b: 0x9f });
        assert_eq!(rgb.to_string(), "#2D519F");
    }

    #[test]
    fn test_rgb_rejects_bad_shapes() {
        for bad in ["", "2D519F", "#2D519", "#2D519FF", "#GGGGGG", "#+1+1+1"] {
            assert!(Rgb::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.languages().len(), 9);
        assert_eq!(catalog.tolerance(), 8);
        assert_eq!(catalog.survivor().name(), "Assembly");
        assert!(catalog.words().len() > 100);
    }
}
