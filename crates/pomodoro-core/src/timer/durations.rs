//! Bounded focus/break length counters.
//!
//! Both counters move in fixed steps and silently refuse to leave their
//! range. Whether an edit is allowed at all (the timer must not be
//! running) is decided by the controller, not here.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const FOCUS_MIN_MINUTES: u32 = 5;
pub const FOCUS_MAX_MINUTES: u32 = 60;
pub const FOCUS_STEP_MINUTES: u32 = 5;

pub const BREAK_MIN_MINUTES: u32 = 1;
pub const BREAK_MAX_MINUTES: u32 = 15;
pub const BREAK_STEP_MINUTES: u32 = 1;

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Which of the two counters an edit touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationKind {
    Focus,
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSettings {
    focus_minutes: u32,
    break_minutes: u32,
}

impl DurationSettings {
    /// Build settings from user-supplied minutes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a value is outside its range
    /// or (for focus) not a multiple of the step.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Result<Self, ConfigError> {
        if !(FOCUS_MIN_MINUTES..=FOCUS_MAX_MINUTES).contains(&focus_minutes)
            || focus_minutes % FOCUS_STEP_MINUTES != 0
        {
            return Err(ConfigError::InvalidValue {
                key: "durations.focus_minutes".into(),
                message: format!(
                    "{focus_minutes} is not a multiple of {FOCUS_STEP_MINUTES} in \
                     {FOCUS_MIN_MINUTES}..={FOCUS_MAX_MINUTES}"
                ),
            });
        }
        if !(BREAK_MIN_MINUTES..=BREAK_MAX_MINUTES).contains(&break_minutes) {
            return Err(ConfigError::InvalidValue {
                key: "durations.break_minutes".into(),
                message: format!(
                    "{break_minutes} is outside {BREAK_MIN_MINUTES}..={BREAK_MAX_MINUTES}"
                ),
            });
        }
        Ok(Self {
            focus_minutes,
            break_minutes,
        })
    }

    pub fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    pub fn focus_secs(&self) -> u64 {
        u64::from(self.focus_minutes) * 60
    }

    pub fn break_secs(&self) -> u64 {
        u64::from(self.break_minutes) * 60
    }

    pub fn minutes(&self, kind: DurationKind) -> u32 {
        match kind {
            DurationKind::Focus => self.focus_minutes,
            DurationKind::Break => self.break_minutes,
        }
    }

    // ── Edits ────────────────────────────────────────────────────────
    //
    // Each returns `true` when the value actually changed.

    pub fn increase_focus(&mut self) -> bool {
        step_up(&mut self.focus_minutes, FOCUS_STEP_MINUTES, FOCUS_MAX_MINUTES)
    }

    pub fn decrease_focus(&mut self) -> bool {
        step_down(&mut self.focus_minutes, FOCUS_STEP_MINUTES, FOCUS_MIN_MINUTES)
    }

    pub fn increase_break(&mut self) -> bool {
        step_up(&mut self.break_minutes, BREAK_STEP_MINUTES, BREAK_MAX_MINUTES)
    }

    pub fn decrease_break(&mut self) -> bool {
        step_down(&mut self.break_minutes, BREAK_STEP_MINUTES, BREAK_MIN_MINUTES)
    }
}

impl Default for DurationSettings {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

fn step_up(value: &mut u32, step: u32, ceiling: u32) -> bool {
    if *value + step > ceiling {
        return false;
    }
    *value += step;
    true
}

fn step_down(value: &mut u32, step: u32, floor: u32) -> bool {
    if *value < floor + step {
        return false;
    }
    *value -= step;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_25_and_5() {
        let d = DurationSettings::default();
        assert_eq!(d.focus_minutes(), 25);
        assert_eq!(d.break_minutes(), 5);
        assert_eq!(d.focus_secs(), 1500);
        assert_eq!(d.break_secs(), 300);
    }

    #[test]
    fn focus_stops_at_ceiling() {
        let mut d = DurationSettings::new(55, 5).unwrap();
        assert!(d.increase_focus());
        assert_eq!(d.focus_minutes(), 60);
        assert!(!d.increase_focus());
        assert_eq!(d.focus_minutes(), 60);
    }

    #[test]
    fn focus_stops_at_floor() {
        let mut d = DurationSettings::new(10, 5).unwrap();
        assert!(d.decrease_focus());
        assert!(!d.decrease_focus());
        assert_eq!(d.focus_minutes(), 5);
    }

    #[test]
    fn break_moves_by_one_within_bounds() {
        let mut d = DurationSettings::new(25, 14).unwrap();
        assert!(d.increase_break());
        assert!(!d.increase_break());
        assert_eq!(d.break_minutes(), 15);

        let mut d = DurationSettings::new(25, 2).unwrap();
        assert!(d.decrease_break());
        assert!(!d.decrease_break());
        assert_eq!(d.break_minutes(), 1);
    }

    #[test]
    fn new_rejects_out_of_range_values() {
        assert!(DurationSettings::new(0, 5).is_err());
        assert!(DurationSettings::new(65, 5).is_err());
        assert!(DurationSettings::new(25, 0).is_err());
        assert!(DurationSettings::new(25, 16).is_err());
    }

    #[test]
    fn new_rejects_focus_off_step() {
        let err = DurationSettings::new(27, 5).unwrap_err();
        assert!(err.to_string().contains("durations.focus_minutes"));
    }

    #[derive(Debug, Clone, Copy)]
    enum Edit {
        IncFocus,
        DecFocus,
        IncBreak,
        DecBreak,
    }

    fn edit_strategy() -> impl Strategy<Value = Edit> {
        prop_oneof![
            Just(Edit::IncFocus),
            Just(Edit::DecFocus),
            Just(Edit::IncBreak),
            Just(Edit::DecBreak),
        ]
    }

    proptest! {
        #[test]
        fn durations_never_leave_their_ranges(
            focus_step in 1u32..=12,
            break_minutes in 1u32..=15,
            edits in proptest::collection::vec(edit_strategy(), 0..200),
        ) {
            let mut d = DurationSettings::new(focus_step * 5, break_minutes).unwrap();
            for edit in edits {
                match edit {
                    Edit::IncFocus => { d.increase_focus(); }
                    Edit::DecFocus => { d.decrease_focus(); }
                    Edit::IncBreak => { d.increase_break(); }
                    Edit::DecBreak => { d.decrease_break(); }
                }
                prop_assert!((5..=60).contains(&d.focus_minutes()));
                prop_assert_eq!(d.focus_minutes() % 5, 0);
                prop_assert!((1..=15).contains(&d.break_minutes()));
            }
        }
    }
}
