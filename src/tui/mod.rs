//! Interactive terminal estimator.
//!
//! A sidebar of input controls on the left; the score, the indicator chart
//! and the prototype panel on the right. Every key that changes an input
//! re-evaluates the whole view before the next frame.
//!
//! ```rust,no_run
//! use coolmap::core::EstimatorInputs;
//! use coolmap::tui::EstimatorTui;
//!
//! let mut tui = EstimatorTui::new(EstimatorInputs::default())?;
//! tui.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod actions;
pub mod app;
pub mod theme;
pub mod view;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::core::EstimatorInputs;
use app::EstimatorApp;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Estimator TUI manager. Restores the terminal on drop.
pub struct EstimatorTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: EstimatorApp,
}

impl EstimatorTui {
    /// Enter raw mode and the alternate screen with `initial` as the
    /// starting (and reset) values.
    pub fn new(initial: EstimatorInputs) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: EstimatorApp::new(initial),
        })
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.app.take_needs_redraw() {
                self.terminal.draw(|f| view::render(f, &self.app))?;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Resize(_, _) => self.app.request_redraw(),
                _ => {}
            }
        }

        self.cleanup()?;
        Ok(())
    }

    /// Clean up and restore terminal
    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for EstimatorTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
