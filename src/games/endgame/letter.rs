//! Guessable letters and the fixed on-screen alphabet.

use super::error::LetterError;
use tracing::instrument;

/// A single lowercase ASCII letter (`a..=z`).
///
/// Uppercase input is folded to lowercase on construction; anything else
/// is rejected, so a `Letter` is always something the keyboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// The fixed alphabet, in order.
    pub const ALPHABET: [Letter; Self::COUNT] = {
        let mut letters = [Letter(b'a'); Self::COUNT];
        let mut i = 0;
        while i < Self::COUNT {
            letters[i] = Letter(b'a' + i as u8);
            i += 1;
        }
        letters
    };

    /// Creates a letter from a character.
    ///
    /// # Errors
    ///
    /// Returns [`LetterError`] if `c` is not an ASCII letter.
    #[instrument]
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(LetterError::new(format!("'{}' is not a letter", c.escape_default())))
        }
    }

    /// Returns the lowercase character.
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Returns the uppercase character, as shown on screen.
    pub fn to_upper(self) -> char {
        self.0.to_ascii_uppercase() as char
    }

    /// Position of this letter in [`Letter::ALPHABET`] (0-25).
    pub fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    /// Letter at the given alphabet position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALPHABET.get(index).copied()
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_ordered() {
        assert_eq!(Letter::ALPHABET[0].as_char(), 'a');
        assert_eq!(Letter::ALPHABET[25].as_char(), 'z');
        for (i, letter) in Letter::ALPHABET.iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
    }

    #[test]
    fn test_uppercase_is_folded() {
        let letter = Letter::new('Q').unwrap();
        assert_eq!(letter.as_char(), 'q');
        assert_eq!(letter.to_upper(), 'Q');
    }

    #[test]
    fn test_rejects_non_letters() {
        assert!(Letter::new('1').is_err());
        assert!(Letter::new(' ').is_err());
        assert!(Letter::new('é').is_err());
    }

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(Letter::from_index(2), Some(Letter::new('c').unwrap()));
        assert_eq!(Letter::from_index(26), None);
    }
}
