//! Assembly: Endgame - guess the word before Assembly is all that is left.

mod catalog;
mod error;
mod farewell;
mod game;
mod letter;
mod view;
mod word;

pub use catalog::{Catalog, Language, Rgb};
pub use error::{CatalogError, LetterError, WordError};
pub use farewell::farewell;
pub use game::{Game, GameStatus, GuessOutcome, GuessedLetters};
pub use letter::Letter;
pub use view::{GameView, KeyCap, KeyState, LanguageChip, StatusBanner, TITLE, WordSlot};
pub use word::{RandomWords, ScriptedWords, SecretWord, WordSource};
