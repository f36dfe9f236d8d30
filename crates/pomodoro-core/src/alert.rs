//! Alerts fired when a session runs out.
//!
//! The engine never plays anything itself: it emits
//! `Event::SessionTransitioned` and the front end hands every event to an
//! [`AlertDispatcher`]. Sink failures are logged and dropped here.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::AlertConfig;
use crate::error::AlertError;
use crate::events::Event;
use crate::timer::SessionMode;

/// Something that can make noise. Implementations must not block for long.
pub trait AlertSink: Send {
    fn name(&self) -> &'static str;

    /// Play an alert for a switch into `to`.
    fn play(&mut self, to: SessionMode) -> Result<(), AlertError>;
}

/// Rings the terminal bell (BEL) on stdout.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AlertSink for TerminalBell {
    fn name(&self) -> &'static str {
        "bell"
    }

    fn play(&mut self, _to: SessionMode) -> Result<(), AlertError> {
        let mut out = std::io::stdout();
        out.write_all(b"\x07").map_err(AlertError::Bell)?;
        out.flush().map_err(AlertError::Bell)
    }
}

/// Spawns an external player and does not wait for it.
///
/// `POMODORO_MODE` is set to `focusing` or `on_break` in the child's
/// environment so one script can pick different sounds.
#[derive(Debug, Clone)]
pub struct SoundCommand {
    command: String,
}

impl SoundCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl AlertSink for SoundCommand {
    fn name(&self) -> &'static str {
        "sound_command"
    }

    fn play(&mut self, to: SessionMode) -> Result<(), AlertError> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or(AlertError::EmptyCommand)?;
        let mode = match to {
            SessionMode::Idle => "idle",
            SessionMode::Focusing => "focusing",
            SessionMode::OnBreak => "on_break",
        };
        let mut child = Command::new(program)
            .args(parts)
            .env("POMODORO_MODE", mode)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| AlertError::Spawn {
                command: self.command.clone(),
                source,
            })?;
        // Reap off-thread so the caller never waits on the player.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// Routes transition events to the configured sinks.
#[derive(Default)]
pub struct AlertDispatcher {
    sinks: Vec<Box<dyn AlertSink>>,
    fired: u64,
}

impl AlertDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AlertConfig) -> Self {
        let mut dispatcher = Self::new();
        if !config.enabled {
            return dispatcher;
        }
        if config.bell {
            dispatcher.add_sink(TerminalBell);
        }
        if let Some(command) = config.sound_command.as_deref() {
            dispatcher.add_sink(SoundCommand::new(command));
        }
        dispatcher
    }

    pub fn add_sink(&mut self, sink: impl AlertSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn is_silent(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Number of transitions alerted so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// React to an engine event. Anything but a transition is ignored.
    pub fn handle(&mut self, event: &Event) {
        let Event::SessionTransitioned { from, to, .. } = event else {
            return;
        };
        self.fired += 1;
        tracing::info!(?from, ?to, "session transitioned");
        for sink in &mut self.sinks {
            if let Err(e) = sink.play(*to) {
                tracing::warn!(sink = sink.name(), error = %e, "alert failed");
            }
        }
    }
}
