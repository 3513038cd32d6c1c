//! Key mapping and cursor movement for the on-screen keyboard.

use crate::games::endgame::Letter;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys per keyboard row.
pub const KEYS_PER_ROW: usize = 13;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Guess this letter.
    Guess(Letter),
    /// Move the keyboard cursor.
    Move(KeyCode),
    /// Activate whatever the cursor points at.
    Activate,
    /// Leave the game.
    Quit,
    /// Nothing to do.
    None,
}

/// Maps a crossterm key event to a [`Command`].
pub fn command_for(key: KeyEvent) -> Command {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return Command::None;
    }

    match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char(c) if c.is_ascii_alphabetic() => match Letter::new(c) {
            Ok(letter) => Command::Guess(letter),
            Err(_) => Command::None,
        },
        KeyCode::Enter | KeyCode::Char(' ') => Command::Activate,
        code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
            Command::Move(code)
        }
        _ => Command::None,
    }
}

/// Moves the keyboard cursor based on arrow keys.
///
/// The keyboard is two rows of [`KEYS_PER_ROW`] keys; the cursor stops at
/// the edges.
pub fn move_cursor(cursor: Letter, key: KeyCode) -> Letter {
    let index = cursor.index();
    let row = index / KEYS_PER_ROW;
    let col = index % KEYS_PER_ROW;
    let rows = Letter::COUNT.div_ceil(KEYS_PER_ROW);

    let target = match key {
        KeyCode::Left if col > 0 => index - 1,
        KeyCode::Right if col + 1 < KEYS_PER_ROW => index + 1,
        KeyCode::Up if row > 0 => index - KEYS_PER_ROW,
        KeyCode::Down if row + 1 < rows => index + KEYS_PER_ROW,
        _ => index,
    };

    Letter::from_index(target).unwrap_or(cursor)
}
