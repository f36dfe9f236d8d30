use serde::{Deserialize, Serialize};

use super::durations::DurationSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Idle,
    Focusing,
    OnBreak,
}

impl SessionMode {
    /// Human readable label; Idle has none.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            SessionMode::Idle => None,
            SessionMode::Focusing => Some("Focusing"),
            SessionMode::OnBreak => Some("On Break"),
        }
    }

    /// Configured length of this mode in seconds, 0 for Idle.
    pub fn total_secs(&self, durations: &DurationSettings) -> u64 {
        match self {
            SessionMode::Idle => 0,
            SessionMode::Focusing => durations.focus_secs(),
            SessionMode::OnBreak => durations.break_secs(),
        }
    }
}

/// The mode plus the seconds left in it.
///
/// All transitions are pure: they take the current value and return the
/// next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub mode: SessionMode,
    pub remaining_secs: u64,
}

impl SessionState {
    pub const fn idle() -> Self {
        Self {
            mode: SessionMode::Idle,
            remaining_secs: 0,
        }
    }

    /// A fresh focus session sized from the current settings.
    pub fn focusing(durations: &DurationSettings) -> Self {
        Self {
            mode: SessionMode::Focusing,
            remaining_secs: durations.focus_secs(),
        }
    }

    pub fn on_break(durations: &DurationSettings) -> Self {
        Self {
            mode: SessionMode::OnBreak,
            remaining_secs: durations.break_secs(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.mode == SessionMode::Idle
    }

    pub fn is_exhausted(&self) -> bool {
        !self.is_idle() && self.remaining_secs == 0
    }

    /// One second less, saturating at zero.
    pub fn next_tick(self) -> Self {
        Self {
            remaining_secs: self.remaining_secs.saturating_sub(1),
            ..self
        }
    }

    /// Flip to the other mode, sized from the settings at the time of the flip.
    /// Idle stays Idle.
    pub fn next_session(self, durations: &DurationSettings) -> Self {
        match self.mode {
            SessionMode::Idle => self,
            SessionMode::Focusing => Self::on_break(durations),
            SessionMode::OnBreak => Self::focusing(durations),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::idle()
    }
}
