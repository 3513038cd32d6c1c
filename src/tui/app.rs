//! Application state and logic.

use crate::games::endgame::{Catalog, Game, GameStatus, GameView, GuessOutcome, Letter, WordSource};
use crossterm::event::KeyEvent;
use rand::rngs::ThreadRng;
use tracing::{debug, info, instrument};

use super::confetti::{Confetti, ConfettiOptions};
use super::input::{Command, command_for, move_cursor};

/// Main application state: one game, its catalog, and screen-only state
/// (keyboard cursor, confetti, quit flag).
pub struct App<W: WordSource> {
    catalog: Catalog,
    words: W,
    game: Game,
    cursor: Letter,
    confetti: Option<Confetti>,
    rng: ThreadRng,
    should_quit: bool,
}

impl<W: WordSource> App<W> {
    /// Creates the application and starts the first round.
    #[instrument(skip_all)]
    pub fn new(catalog: Catalog, mut words: W) -> Self {
        let game = Game::start(&catalog, &mut words);
        info!(tolerance = catalog.tolerance(), "Application created");
        Self {
            catalog,
            words,
            game,
            cursor: Letter::ALPHABET[0],
            confetti: None,
            rng: rand::rng(),
            should_quit: false,
        }
    }

    /// The current round.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The catalog in use.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Key under the keyboard cursor.
    pub fn cursor(&self) -> Letter {
        self.cursor
    }

    /// Running celebration, if any.
    pub fn confetti(&self) -> Option<&Confetti> {
        self.confetti.as_ref()
    }

    /// The user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// View of the current round.
    pub fn view(&self) -> GameView {
        GameView::new(&self.game, &self.catalog)
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match command_for(key) {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Guess(letter) => {
                self.cursor = letter;
                self.guess(letter);
            }
            Command::Move(code) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            Command::Activate => {
                if self.game.is_over() {
                    self.reset();
                } else {
                    self.guess(self.cursor);
                }
            }
            Command::None => {}
        }
    }

    /// Guesses a letter, starting the confetti when the round is won.
    #[instrument(skip(self), fields(letter = %letter))]
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        let outcome = self.game.guess(letter);
        if outcome == GuessOutcome::Correct && self.game.status() == GameStatus::Won {
            info!("Round won, starting confetti");
            self.confetti = Some(Confetti::new(ConfettiOptions::default()));
        }
        outcome
    }

    /// Starts a new round and stops any celebration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset(&mut self.words);
        self.confetti = None;
    }

    /// Advances animations by one frame.
    pub fn tick(&mut self) {
        if let Some(confetti) = &mut self.confetti {
            confetti.tick(&mut self.rng);
            if confetti.is_finished() {
                debug!("Confetti finished");
                self.confetti = None;
            }
        }
    }
}
