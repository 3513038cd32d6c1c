//! Game state and rules for a round of Assembly: Endgame.

use super::catalog::{Catalog, Language};
use super::letter::Letter;
use super::word::{SecretWord, WordSource};
use tracing::{debug, info, instrument};

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum GameStatus {
    /// Guesses are accepted.
    Playing,
    /// Every letter of the word was found.
    Won,
    /// Every language but the survivor was eliminated.
    Lost,
}

impl GameStatus {
    /// Returns true for `Won` and `Lost`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// What a call to [`Game::guess`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum GuessOutcome {
    /// New letter, present in the word.
    Correct,
    /// New letter, absent from the word.
    Wrong,
    /// Letter was already guessed; nothing changed.
    Repeated,
    /// The round is over; nothing changed.
    Ignored,
}

/// Letters guessed this round, without duplicates, in first-guess order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<Letter>,
}

impl GuessedLetters {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `letter`; returns false if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        if self.contains(letter) {
            false
        } else {
            self.letters.push(letter);
            true
        }
    }

    /// Returns true if `letter` has been guessed.
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// The most recently inserted letter.
    pub fn last(&self) -> Option<Letter> {
        self.letters.last().copied()
    }

    /// Letters in first-guess order.
    pub fn as_slice(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of distinct letters guessed.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns true if nothing has been guessed.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Removes every letter.
    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

/// One round: the secret word, the guesses so far and the number of
/// wrong guesses that can be survived.
///
/// Only the word and the guesses are stored; win/loss and counts are
/// derived on every call.
#[derive(Debug, Clone)]
pub struct Game {
    word: SecretWord,
    guessed: GuessedLetters,
    tolerance: usize,
}

impl Game {
    /// Starts a round with the given word.
    ///
    /// `tolerance` is the number of wrong guesses that end the game,
    /// normally [`Catalog::tolerance`].
    #[instrument(skip(word), fields(length = word.len()))]
    pub fn new(word: SecretWord, tolerance: usize) -> Self {
        Self {
            word,
            guessed: GuessedLetters::new(),
            tolerance,
        }
    }

    /// Starts a round for `catalog` with a word drawn from `source`.
    #[instrument(skip_all)]
    pub fn start(catalog: &Catalog, source: &mut impl WordSource) -> Self {
        Self::new(source.pick_word(), catalog.tolerance())
    }

    /// The secret word.
    pub fn word(&self) -> &SecretWord {
        &self.word
    }

    /// Letters guessed so far.
    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    /// Wrong guesses that end the round.
    pub fn tolerance(&self) -> usize {
        self.tolerance
    }

    /// Records a guess.
    ///
    /// Repeated letters and guesses after the round is over change nothing.
    #[instrument(skip(self), fields(letter = %letter))]
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_over() {
            debug!("Guess ignored, round is over");
            return GuessOutcome::Ignored;
        }

        if !self.guessed.insert(letter) {
            debug!("Letter already guessed");
            return GuessOutcome::Repeated;
        }

        let outcome = if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong
        };

        debug!(
            %outcome,
            wrong = self.wrong_guess_count(),
            status = %self.status(),
            "Guess recorded"
        );
        if self.is_over() {
            info!(status = %self.status(), word = %self.word, "Round finished");
        }
        outcome
    }

    /// Starts a new round with a fresh word from `source`.
    #[instrument(skip_all)]
    pub fn reset(&mut self, source: &mut impl WordSource) {
        self.word = source.pick_word();
        self.guessed.clear();
        info!(length = self.word.len(), "New round started");
    }

    /// Guessed letters that are not in the word.
    pub fn wrong_guess_count(&self) -> usize {
        self.guessed
            .as_slice()
            .iter()
            .filter(|l| !self.word.contains(**l))
            .count()
    }

    /// Wrong guesses still available before the round is lost.
    pub fn attempts_left(&self) -> usize {
        self.tolerance.saturating_sub(self.wrong_guess_count())
    }

    /// Every letter of the word has been guessed.
    pub fn is_won(&self) -> bool {
        self.word.letters().iter().all(|l| self.guessed.contains(*l))
    }

    /// The wrong-guess threshold has been reached.
    pub fn is_lost(&self) -> bool {
        self.wrong_guess_count() >= self.tolerance
    }

    /// Won or lost.
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// The most recent guess is not in the word.
    pub fn last_guess_is_wrong(&self) -> bool {
        self.guessed
            .last()
            .is_some_and(|l| !self.word.contains(l))
    }

    /// Current phase.
    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// The language killed by the most recent wrong guess, if any.
    pub fn eliminated_language<'a>(&self, catalog: &'a Catalog) -> Option<&'a Language> {
        self.wrong_guess_count()
            .checked_sub(1)
            .and_then(|i| catalog.languages().get(i))
    }
}
