//! Display-only derivations: progress percentage and clock formatting.

use super::durations::DurationSettings;
use super::session::SessionState;

/// Percentage (0.0 ..= 100.0) of the active session already elapsed.
///
/// Idle reports 0. The value is clamped because a paused session keeps its
/// remaining time when the durations are edited underneath it.
pub fn progress_pct(session: &SessionState, durations: &DurationSettings) -> f64 {
    let total = session.mode.total_secs(durations);
    if total == 0 {
        return 0.0;
    }
    let elapsed = total as f64 - session.remaining_secs as f64;
    (elapsed / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// `MM:SS`. Minutes are not wrapped into hours.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Duration setting readout, `MM:00`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes:02}:00")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::session::SessionMode;

    #[test]
    fn half_way_through_focus_is_fifty_percent() {
        let d = DurationSettings::default();
        let s = SessionState {
            mode: SessionMode::Focusing,
            remaining_secs: 750,
        };
        assert_eq!(progress_pct(&s, &d), 50.0);
    }

    #[test]
    fn break_progress_uses_break_total() {
        let d = DurationSettings::default();
        let s = SessionState {
            mode: SessionMode::OnBreak,
            remaining_secs: 75,
        };
        assert_eq!(progress_pct(&s, &d), 75.0);
    }

    #[test]
    fn idle_is_zero() {
        assert_eq!(
            progress_pct(&SessionState::idle(), &DurationSettings::default()),
            0.0
        );
    }

    #[test]
    fn clamped_when_remaining_exceeds_total() {
        let d = DurationSettings::new(5, 1).unwrap();
        let s = SessionState {
            mode: SessionMode::Focusing,
            remaining_secs: 1500,
        };
        assert_eq!(progress_pct(&s, &d), 0.0);
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_minutes(5), "05:00");
        assert_eq!(format_minutes(15), "15:00");
    }
}
