use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{DurationKind, SessionMode};

/// Every state change in the controller produces an Event.
/// Front ends render from them; the alert dispatcher reacts to transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A new focus session began from Idle.
    TimerStarted {
        mode: SessionMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: SessionMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        mode: SessionMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerStopped {
        at: DateTime<Utc>,
    },
    /// The active session ran out and the other mode took over.
    SessionTransitioned {
        from: SessionMode,
        to: SessionMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    DurationChanged {
        setting: DurationKind,
        minutes: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: SessionMode,
        label: Option<String>,
        running: bool,
        remaining_secs: u64,
        total_secs: u64,
        progress_pct: f64,
        focus_minutes: u32,
        break_minutes: u32,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
}
