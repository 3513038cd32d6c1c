//! Assembly: Endgame - a terminal word-guessing game.
//!
//! Guess the secret word one letter at a time. Every wrong guess eliminates
//! a programming language; lose them all but one and Assembly takes over.
//!
//! # Architecture
//!
//! - **Catalog**: word list and language list, loaded once and validated
//! - **Game**: secret word + guessed letters, with win/loss derived on demand
//! - **View**: pure function from a game snapshot to what the screen shows
//! - **TUI**: ratatui/crossterm shell with keyboard cursor and confetti
//!
//! # Example
//!
//! ```
//! use assembly_endgame::{Catalog, Game, Letter, ScriptedWords};
//!
//! # fn example() -> anyhow::Result<()> {
//! let catalog = Catalog::builtin()?;
//! let mut words = ScriptedWords::from_strs(&["go"])?;
//! let mut game = Game::start(&catalog, &mut words);
//!
//! game.guess(Letter::new('g')?);
//! game.guess(Letter::new('o')?);
//! assert!(game.is_won());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;
mod tui;

// Crate-level exports - Game types
pub use games::endgame::{
    Catalog, CatalogError, Game, GameStatus, GameView, GuessOutcome, GuessedLetters, KeyCap,
    KeyState, Language, LanguageChip, Letter, LetterError, RandomWords, Rgb, ScriptedWords,
    SecretWord, StatusBanner, TITLE, WordError, WordSlot, WordSource, farewell,
};

// Crate-level exports - Terminal UI
pub use tui::{
    App, Command, Confetti, ConfettiOptions, KEYS_PER_ROW, command_for, draw, move_cursor,
    run_app, run_tui,
};
