//! Terminal User Interface for the timer.
//!
//! Built with ratatui and crossterm. One tokio task owns the [`App`]; key
//! presses (read on a helper thread) and ticks (from the core [`Ticker`])
//! arrive on the same channel, and the screen is redrawn after each one.

mod app;
mod event;
mod terminal;
mod ui;

pub use app::App;
pub use event::Action;

use std::io;
use std::thread;
use std::time::Duration;

use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent};
use pomodoro_core::Ticker;
use tokio::sync::mpsc::{self, UnboundedSender};

const INPUT_POLL: Duration = Duration::from_millis(200);

enum Msg {
    /// Carries the generation of the ticker that produced it.
    Tick(u64),
    Key(KeyEvent),
    Resized,
    InputFailed(String),
}

/// Run the interactive loop until the user quits.
pub async fn run(mut app: App) -> io::Result<()> {
    let (mut terminal, _guard) = terminal::enter()?;
    terminal.hide_cursor()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_reader(tx.clone());

    let mut ticker = Ticker::new();
    let mut generation = 0u64;
    sync_ticker(&mut ticker, &mut generation, &app, &tx);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::render(frame, &app)) {
            break Err(e);
        }

        let Some(msg) = rx.recv().await else {
            break Ok(());
        };
        match msg {
            Msg::Tick(id) if id == generation => app.on_tick(),
            // Queued by a ticker that has since been cancelled.
            Msg::Tick(_) => {}
            Msg::Key(key) => {
                if let Some(action) = event::map_key(key) {
                    app.apply(action);
                }
            }
            Msg::Resized => {}
            Msg::InputFailed(e) => break Err(io::Error::other(e)),
        }
        if app.should_quit() {
            break Ok(());
        }

        sync_ticker(&mut ticker, &mut generation, &app, &tx);
    };

    ticker.stop();
    tracing::info!("timer closed");
    result
}

fn sync_ticker(ticker: &mut Ticker, generation: &mut u64, app: &App, tx: &UnboundedSender<Msg>) {
    let running = app.engine().is_running();
    if running && !ticker.is_active() {
        *generation += 1;
    }
    let current = *generation;
    ticker.sync(running, tx, move || Msg::Tick(current));
}

/// Blocking crossterm reads live on their own thread; it exits once the
/// loop drops the receiver.
fn spawn_input_reader(tx: UnboundedSender<Msg>) {
    thread::spawn(move || {
        while !tx.is_closed() {
            let ready = match term_event::poll(INPUT_POLL) {
                Ok(ready) => ready,
                Err(e) => {
                    let _ = tx.send(Msg::InputFailed(e.to_string()));
                    return;
                }
            };
            if !ready {
                continue;
            }
            let msg = match term_event::read() {
                Ok(TermEvent::Key(key)) => Msg::Key(key),
                Ok(TermEvent::Resize(..)) => Msg::Resized,
                Ok(_) => continue,
                Err(e) => Msg::InputFailed(e.to_string()),
            };
            let failed = matches!(msg, Msg::InputFailed(_));
            if tx.send(msg).is_err() || failed {
                return;
            }
        }
    });
}
