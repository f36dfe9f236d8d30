//! Raw mode and alternate screen setup.
//!
//! The restore closure is armed as soon as raw mode is on. It runs from
//! `Drop`, or from the panic hook when the binary is built with
//! `panic = "abort"` and nothing unwinds.

use std::io::{self, Stdout};
use std::sync::{Arc, Mutex, PoisonError};

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Runs its cleanup exactly once: on drop, on `restore`, or on panic.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn new(cleanup: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(Some(Box::new(cleanup)))),
        }
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_cleanup(&cleanup);
            default_hook(info);
        }));
    }

    pub fn restore(&self) {
        run_cleanup(&self.cleanup);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn run_cleanup(slot: &Mutex<Option<Cleanup>>) {
    let taken = slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    if let Some(cleanup) = taken {
        cleanup();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Switch the terminal into TUI mode. Every failure after raw mode is
/// enabled drops the already-armed guard, which undoes it.
pub fn enter() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    guard.install_panic_hook();

    execute!(io::stdout(), EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((terminal, guard))
}
