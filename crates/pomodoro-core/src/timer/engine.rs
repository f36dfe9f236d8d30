//! Timer engine implementation.
//!
//! The engine owns the session state, the duration settings and the run
//! flag. It has no clock of its own: whoever drives it (see
//! [`Ticker`](super::Ticker)) calls `tick()` once per second while
//! `is_running()` holds.
//!
//! ## State Transitions
//!
//! ```text
//! Idle --play--> Focusing --0s--> OnBreak --0s--> Focusing ...
//!   ^                |                 |
//!   +------stop------+-------stop------+
//! ```
//!
//! A tick first looks at the remaining time: when it is already zero the
//! session flips to the other mode, otherwise it counts down by one. The
//! readout therefore shows `00:00` for one tick before the flip.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(DurationSettings::default());
//! engine.play_pause();
//! // Once per second:
//! if let Some(event) = engine.tick() { /* SessionTransitioned */ }
//! ```

use chrono::Utc;

use super::durations::{DurationKind, DurationSettings};
use super::progress::progress_pct;
use super::session::{SessionMode, SessionState};
use crate::events::Event;

#[derive(Debug, Clone)]
pub struct TimerEngine {
    durations: DurationSettings,
    session: SessionState,
    running: bool,
    /// Running ticks since the last stop.
    elapsed_secs: u64,
}

impl TimerEngine {
    /// Starts Idle and paused.
    pub fn new(durations: DurationSettings) -> Self {
        Self {
            durations,
            session: SessionState::idle(),
            running: false,
            elapsed_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn mode(&self) -> SessionMode {
        self.session.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.session.remaining_secs
    }

    pub fn durations(&self) -> DurationSettings {
        self.durations
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.session.mode.total_secs(&self.durations)
    }

    /// 0.0 .. 100.0 progress within the current session.
    pub fn progress_pct(&self) -> f64 {
        progress_pct(&self.session, &self.durations)
    }

    /// Duration edits are only accepted while paused.
    pub fn can_edit_durations(&self) -> bool {
        !self.running
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.session.mode,
            label: self.session.mode.label().map(str::to_owned),
            running: self.running,
            remaining_secs: self.session.remaining_secs,
            total_secs: self.total_secs(),
            progress_pct: self.progress_pct(),
            focus_minutes: self.durations.focus_minutes(),
            break_minutes: self.durations.break_minutes(),
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Toggle between running and paused.
    ///
    /// Going to running from Idle opens a focus session sized from the
    /// current settings; otherwise the existing session resumes untouched.
    pub fn play_pause(&mut self) -> Event {
        let at = Utc::now();
        if self.running {
            self.running = false;
            return Event::TimerPaused {
                mode: self.session.mode,
                remaining_secs: self.session.remaining_secs,
                at,
            };
        }

        self.running = true;
        if self.session.is_idle() {
            self.session = SessionState::focusing(&self.durations);
            Event::TimerStarted {
                mode: self.session.mode,
                remaining_secs: self.session.remaining_secs,
                at,
            }
        } else {
            Event::TimerResumed {
                mode: self.session.mode,
                remaining_secs: self.session.remaining_secs,
                at,
            }
        }
    }

    /// Back to Idle, paused, accumulator cleared. Safe to call repeatedly.
    pub fn stop(&mut self) -> Event {
        self.session = SessionState::idle();
        self.running = false;
        self.elapsed_secs = 0;
        Event::TimerStopped { at: Utc::now() }
    }

    /// Advance one second. Returns `Some(Event::SessionTransitioned)` on the
    /// tick that flips the mode; ticks while paused or Idle do nothing.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running || self.session.is_idle() {
            return None;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);

        if self.session.is_exhausted() {
            let from = self.session.mode;
            self.session = self.session.next_session(&self.durations);
            return Some(Event::SessionTransitioned {
                from,
                to: self.session.mode,
                remaining_secs: self.session.remaining_secs,
                at: Utc::now(),
            });
        }

        self.session = self.session.next_tick();
        None
    }

    pub fn increase_focus(&mut self) -> Option<Event> {
        self.edit(DurationKind::Focus, DurationSettings::increase_focus)
    }

    pub fn decrease_focus(&mut self) -> Option<Event> {
        self.edit(DurationKind::Focus, DurationSettings::decrease_focus)
    }

    pub fn increase_break(&mut self) -> Option<Event> {
        self.edit(DurationKind::Break, DurationSettings::increase_break)
    }

    pub fn decrease_break(&mut self) -> Option<Event> {
        self.edit(DurationKind::Break, DurationSettings::decrease_break)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn edit(
        &mut self,
        setting: DurationKind,
        apply: fn(&mut DurationSettings) -> bool,
    ) -> Option<Event> {
        if !self.can_edit_durations() {
            tracing::debug!(?setting, "duration edit ignored while running");
            return None;
        }
        if !apply(&mut self.durations) {
            return None;
        }
        Some(Event::DurationChanged {
            setting,
            minutes: self.durations.minutes(setting),
            at: Utc::now(),
        })
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(DurationSettings::default())
    }
}
