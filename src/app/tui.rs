//! Terminal frontend on ratatui + crossterm

use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use super::frontend::{Frontend, Screen};
use crate::render::{draw_screen, Theme};

/// Full-screen terminal UI
///
/// Raw mode and the alternate screen are active while the value lives and
/// restored on drop, also when the app bails out with an error.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    active: bool,
}

impl TuiFrontend {
    pub fn new(theme: Theme) -> anyhow::Result<Self> {
        enter_screen()?;
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            theme,
            active: true,
        })
    }

    /// Give the terminal back to the shell
    pub fn restore(&mut self) -> anyhow::Result<()> {
        if self.active {
            self.active = false;
            leave_screen()?;
        }
        Ok(())
    }

    fn resume(&mut self) -> anyhow::Result<()> {
        if !self.active {
            enter_screen()?;
            self.active = true;
            self.terminal.clear()?;
        }
        Ok(())
    }
}

fn enter_screen() -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
    Ok(())
}

fn leave_screen() -> anyhow::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl Frontend for TuiFrontend {
    fn next_key(&mut self, idle: Duration) -> anyhow::Result<Option<KeyEvent>> {
        if !event::poll(idle)? {
            return Ok(None);
        }
        match event::read()? {
            // Windows reports releases too
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, screen: &Screen<'_>) -> anyhow::Result<()> {
        let theme = self.theme;
        self.terminal
            .draw(|frame| draw_screen(frame, screen, &theme))?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    fn suspend(&mut self, run: &mut dyn FnMut() -> anyhow::Result<()>) -> anyhow::Result<()> {
        self.restore()?;
        let result = run();
        self.resume()?;
        result
    }

    fn flush_input(&mut self) -> anyhow::Result<()> {
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        Ok(())
    }
}
