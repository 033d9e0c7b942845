//! Base application: terminal ownership and the event loop.
//!
//! `App` puts the terminal into raw mode on the alternate screen and
//! restores it on drop. Screens implement [`TuiApp`] and get the event loop
//! for free.

pub mod status_footer;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

/// Owns the ratatui terminal.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    /// Enter raw mode and the alternate screen.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e).context("Failed to create terminal");
            }
        };

        let mut app = Self {
            terminal,
            tick_rate,
            should_quit: false,
        };
        app.terminal.clear()?;
        app.terminal.hide_cursor()?;
        Ok(app)
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Draw one frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Terminal size as (width, height).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Wait up to `timeout` for the next terminal event.
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// A full-screen application driven by [`TuiApp::run`].
pub trait TuiApp {
    /// The base app owning the terminal.
    fn app(&mut self) -> &mut App;

    /// Handle one key press.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()>;

    /// Advance time-driven state to `now`.
    fn on_tick(&mut self, _now: Instant) {}

    /// Earliest instant at which `on_tick` has work to do.
    fn next_deadline(&self, _now: Instant) -> Option<Instant> {
        None
    }

    /// Draw the current state.
    fn draw(&mut self) -> Result<()>;

    /// Run the event loop until the app quits.
    fn run(&mut self) -> Result<()> {
        loop {
            let now = Instant::now();
            self.on_tick(now);
            self.draw()?;
            if self.app().should_quit() {
                return Ok(());
            }

            let tick_rate = self.app().tick_rate();
            let timeout = self
                .next_deadline(now)
                .map(|at| at.saturating_duration_since(Instant::now()).min(tick_rate))
                .unwrap_or(tick_rate);

            match self.app().next_event(timeout)? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key, Instant::now())?;
                }
                // Resize and everything else just trigger a redraw
                _ => {}
            }
        }
    }
}
