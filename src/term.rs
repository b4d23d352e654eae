// Terminal session management
//
// Raw mode, alternate screen and mouse capture are entered together and must
// be restored together, even when a navigator errors out mid-loop. The guard
// restores on drop so a panic never leaves the user's shell in raw mode.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    restored: bool,
}

impl TerminalSession {
    /// Enter raw mode + alternate screen + mouse capture.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Draw one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal
            .draw(render)
            .context("Failed to draw terminal")?;
        Ok(())
    }

    /// Block until the next input event. The navigators are fully
    /// event-driven: no tick, no timeout.
    pub fn next_event(&mut self) -> Result<Event> {
        event::read().context("Failed to read terminal event")
    }

    /// Restore the terminal. Safe to call once; drop covers the error paths.
    pub fn leave(mut self) -> Result<()> {
        self.restore().context("Failed to restore terminal")
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Last-ditch restore; errors here have nowhere useful to go
        let _ = self.restore();
    }
}
