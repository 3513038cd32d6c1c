//! Pure view model derived from a game snapshot.
//!
//! [`GameView::new`] is the whole renderer: it reads the game and the
//! catalog and returns plain data. Drawing that data is the terminal
//! layer's job.

use super::catalog::{Catalog, Rgb};
use super::farewell::farewell;
use super::game::Game;
use super::letter::Letter;
use tracing::instrument;

/// Title shown in the header.
pub const TITLE: &str = "Assembly: Endgame";

/// Message shown in the status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusBanner {
    /// Nothing to report.
    Blank,
    /// The last guess was wrong and eliminated a language.
    Farewell(String),
    /// The word was found.
    Won,
    /// Only the survivor is left.
    Lost,
}

impl StatusBanner {
    /// Heading line, if the banner has one.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            StatusBanner::Won => Some("You win!"),
            StatusBanner::Lost => Some("Game over!"),
            StatusBanner::Blank | StatusBanner::Farewell(_) => None,
        }
    }

    /// Body text of the banner.
    pub fn body(&self) -> &str {
        match self {
            StatusBanner::Blank => "",
            StatusBanner::Farewell(text) => text,
            StatusBanner::Won => "Well done! 🎉",
            StatusBanner::Lost => "You lose! Better start learning Assembly 😭",
        }
    }
}

/// One language chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChip {
    /// Language name.
    pub name: String,
    /// Chip background.
    pub background: Rgb,
    /// Chip text color.
    pub color: Rgb,
    /// Eliminated by a wrong guess.
    pub lost: bool,
}

/// One character slot of the word row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSlot {
    /// Not guessed yet.
    Hidden,
    /// Guessed; holds the uppercase letter.
    Revealed(char),
    /// Never guessed, shown because the round was lost.
    Missed(char),
}

/// Highlight of a keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum KeyState {
    /// Not guessed.
    Unused,
    /// Guessed and in the word.
    Correct,
    /// Guessed and not in the word.
    Wrong,
}

/// One on-screen keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCap {
    /// The letter this key guesses.
    pub letter: Letter,
    /// Highlight.
    pub state: KeyState,
    /// Input is disabled once the round is over.
    pub disabled: bool,
}

/// Everything the screen shows, derived from one game snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// Header tagline.
    pub tagline: String,
    /// Status banner.
    pub banner: StatusBanner,
    /// One chip per catalog language, in order.
    pub chips: Vec<LanguageChip>,
    /// One slot per character of the secret word.
    pub word: Vec<WordSlot>,
    /// One key per alphabet letter.
    pub keyboard: Vec<KeyCap>,
    /// The "New game" control is visible.
    pub show_reset: bool,
    /// The round was won; the celebration should play.
    pub celebrate: bool,
}

impl GameView {
    /// Derives the view for `game`.
    #[instrument(skip_all)]
    pub fn new(game: &Game, catalog: &Catalog) -> Self {
        let wrong = game.wrong_guess_count();
        let lost = game.is_lost();
        let over = game.is_over();
        let guessed = game.guessed();

        let banner = if !over && game.last_guess_is_wrong() {
            game.eliminated_language(catalog)
                .map(|l| StatusBanner::Farewell(farewell(l.name())))
                .unwrap_or(StatusBanner::Blank)
        } else if game.is_won() {
            StatusBanner::Won
        } else if lost {
            StatusBanner::Lost
        } else {
            StatusBanner::Blank
        };

        let chips = catalog
            .languages()
            .iter()
            .enumerate()
            .map(|(i, l)| LanguageChip {
                name: l.name().clone(),
                background: *l.background(),
                color: *l.color(),
                lost: i < wrong,
            })
            .collect();

        let word = game
            .word()
            .letters()
            .iter()
            .map(|&l| {
                if guessed.contains(l) {
                    WordSlot::Revealed(l.to_upper())
                } else if lost {
                    WordSlot::Missed(l.to_upper())
                } else {
                    WordSlot::Hidden
                }
            })
            .collect();

        let keyboard = Letter::ALPHABET
            .iter()
            .map(|&letter| {
                let state = match (guessed.contains(letter), game.word().contains(letter)) {
                    (true, true) => KeyState::Correct,
                    (true, false) => KeyState::Wrong,
                    (false, _) => KeyState::Unused,
                };
                KeyCap {
                    letter,
                    state,
                    disabled: over,
                }
            })
            .collect();

        Self {
            tagline: format!(
                "Guess the word in under {} attempts to keep the programming world safe from {}!",
                game.tolerance(),
                catalog.survivor().name()
            ),
            banner,
            chips,
            word,
            keyboard,
            show_reset: over,
            celebrate: game.is_won(),
        }
    }
}
