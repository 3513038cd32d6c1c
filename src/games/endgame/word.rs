//! Secret words and the sources that hand them out.

use super::error::WordError;
use super::letter::Letter;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, instrument};

/// The word the player must guess, fixed for one round.
///
/// Always non-empty and made only of lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretWord {
    letters: Vec<Letter>,
}

impl SecretWord {
    /// Parses a secret word.
    ///
    /// # Errors
    ///
    /// Returns [`WordError`] if the word is empty or contains anything other
    /// than lowercase ASCII letters.
    #[instrument]
    pub fn new(word: &str) -> Result<Self, WordError> {
        if word.is_empty() {
            return Err(WordError::new("Word is empty"));
        }

        let letters = word
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() {
                    Letter::new(c).map_err(|e| WordError::new(e.message))
                } else {
                    Err(WordError::new(format!(
                        "'{}' contains '{}', only a-z is allowed",
                        word,
                        c.escape_default()
                    )))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { letters })
    }

    /// Letters of the word in order, repeats included.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns true if the word contains `letter`.
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of characters in the word.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns true if the word has no letters; never true for a parsed word.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl std::str::FromStr for SecretWord {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for SecretWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Supplies secret words for new rounds.
pub trait WordSource {
    /// Picks the word for the next round.
    fn pick_word(&mut self) -> SecretWord;
}

/// Uniformly random words from a fixed list.
#[derive(Debug, Clone)]
pub struct RandomWords {
    words: Vec<SecretWord>,
    rng: StdRng,
}

impl RandomWords {
    /// Creates a random source seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`WordError`] if `words` is empty.
    #[instrument(skip(words), fields(count = words.len()))]
    pub fn new(words: Vec<SecretWord>) -> Result<Self, WordError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Creates a reproducible random source.
    ///
    /// # Errors
    ///
    /// Returns [`WordError`] if `words` is empty.
    #[instrument(skip(words), fields(count = words.len()))]
    pub fn seeded(words: Vec<SecretWord>, seed: u64) -> Result<Self, WordError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<SecretWord>, rng: StdRng) -> Result<Self, WordError> {
        if words.is_empty() {
            return Err(WordError::new("Word list is empty"));
        }
        Ok(Self { words, rng })
    }
}

impl WordSource for RandomWords {
    #[instrument(skip(self))]
    fn pick_word(&mut self) -> SecretWord {
        let index = self.rng.random_range(0..self.words.len());
        debug!(index, "Picked secret word");
        self.words[index].clone()
    }
}

/// Hands out words from a fixed list in order, wrapping around.
///
/// Useful for demos and tests where the next word must be known.
#[derive(Debug, Clone)]
pub struct ScriptedWords {
    words: Vec<SecretWord>,
    next: usize,
}

impl ScriptedWords {
    /// Creates a scripted source.
    ///
    /// # Errors
    ///
    /// Returns [`WordError`] if `words` is empty.
    #[instrument(skip(words), fields(count = words.len()))]
    pub fn new(words: Vec<SecretWord>) -> Result<Self, WordError> {
        if words.is_empty() {
            return Err(WordError::new("Word list is empty"));
        }
        Ok(Self { words, next: 0 })
    }

    /// Parses each word and builds a scripted source.
    ///
    /// # Errors
    ///
    /// Returns [`WordError`] if the list is empty or any word is invalid.
    pub fn from_strs(words: &[&str]) -> Result<Self, WordError> {
        let words = words
            .iter()
            .map(|w| SecretWord::new(w))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }
}

impl WordSource for ScriptedWords {
    #[instrument(skip(self))]
    fn pick_word(&mut self) -> SecretWord {
        let word = self.words[self.next % self.words.len()].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_word_rejects_bad_input() {
        assert!(SecretWord::new("").is_err());
        assert!(SecretWord::new("React").is_err());
        assert!(SecretWord::new("node.js").is_err());
        assert!(SecretWord::new("two words").is_err());
    }

    #[test]
    fn test_secret_word_display() {
        let word = SecretWord::new("react").unwrap();
        assert_eq!(word.to_string(), "react");
        assert_eq!(word.len(), 5);
        assert!(word.contains(Letter::new('t').unwrap()));
        assert!(!word.contains(Letter::new('z').unwrap()));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let words: Vec<_> = ["alpha", "bravo", "charlie", "delta"]
            .iter()
            .map(|w| SecretWord::new(w).unwrap())
            .collect();
        let mut a = RandomWords::seeded(words.clone(), 7).unwrap();
        let mut b = RandomWords::seeded(words.clone(), 7).unwrap();
        for _ in 0..10 {
            let picked = a.pick_word();
            assert_eq!(picked, b.pick_word());
            assert!(words.contains(&picked));
        }
    }

    #[test]
    fn test_empty_sources_rejected() {
        assert!(RandomWords::new(Vec::new()).is_err());
        assert!(ScriptedWords::new(Vec::new()).is_err());
    }

    #[test]
    fn test_scripted_source_wraps() {
        let mut source = ScriptedWords::from_strs(&["go", "rust"]).unwrap();
        assert_eq!(source.pick_word().to_string(), "go");
        assert_eq!(source.pick_word().to_string(), "rust");
        assert_eq!(source.pick_word().to_string(), "go");
    }
}
