//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::AppConfig;

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip(config), fields(reversed = *config.reversed_display()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut app = App::new(*config.reversed_display());
    let res = run_app(&mut terminal, &mut app);

    terminal.show_cursor()?;
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.controller().history().len() - 1,
        "Terminal UI closed"
    );
    res
}

/// Draw, wait for a key, apply it; repeat.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }
    }
}
