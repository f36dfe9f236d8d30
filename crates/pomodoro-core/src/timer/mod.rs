mod durations;
mod engine;
mod progress;
mod session;
mod ticker;

pub use durations::{
    DurationKind, DurationSettings, BREAK_MAX_MINUTES, BREAK_MIN_MINUTES, BREAK_STEP_MINUTES,
    DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES, FOCUS_MAX_MINUTES, FOCUS_MIN_MINUTES,
    FOCUS_STEP_MINUTES,
};
pub use engine::TimerEngine;
pub use progress::{format_clock, format_minutes, progress_pct};
pub use session::{SessionMode, SessionState};
pub use ticker::{Ticker, TICK_PERIOD};
