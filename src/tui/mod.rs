//! Terminal UI for Assembly: Endgame.

mod app;
mod confetti;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::{Backend, CrosstermBackend}};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::games::endgame::{Catalog, WordSource};

pub use app::App;
pub use confetti::{Confetti, ConfettiOptions};
pub use input::{Command, KEYS_PER_ROW, command_for, move_cursor};
pub use ui::draw;

/// Input poll timeout; also the animation frame time.
const FRAME: Duration = Duration::from_millis(33);

/// Runs the game in the terminal until the player quits.
///
/// The terminal is restored before any error is returned.
pub fn run_tui<W: WordSource>(catalog: Catalog, words: W) -> Result<()> {
    info!("Starting Assembly: Endgame TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, words);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, poll, dispatch, animate; until the app asks to quit.
#[instrument(skip_all)]
pub fn run_app<B, W>(terminal: &mut Terminal<B>, app: &mut App<W>) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    W: WordSource,
{
    info!("Starting event loop");

    while !app.should_quit() {
        let view = app.view();
        terminal.draw(|f| draw(f, &view, app.cursor(), app.confetti()))?;

        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        app.tick();
    }

    info!("Event loop finished");
    Ok(())
}
