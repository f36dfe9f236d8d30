//! # Pomodoro Core Library
//!
//! Business logic for a focus/break Pomodoro timer, shared by every front
//! end (currently the `pomodoro` terminal binary).
//!
//! ## Architecture
//!
//! - **Timer Engine**: a clock-less state machine (`Idle`, `Focusing`,
//!   `OnBreak`) advanced by `tick()`
//! - **Ticker**: the cancellable one-second tokio task that drives it
//! - **Alerts**: side effects for session transitions, kept outside the engine
//! - **Config**: TOML start-up preferences
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`DurationSettings`]: bounded focus/break lengths
//! - [`Ticker`]: repeating tick resource
//! - [`AlertDispatcher`]: transition alerts
//! - [`Config`]: application configuration management

pub mod alert;
pub mod config;
pub mod error;
pub mod events;
pub mod timer;

pub use alert::{AlertDispatcher, AlertSink, SoundCommand, TerminalBell};
pub use config::Config;
pub use error::{AlertError, ConfigError, CoreError};
pub use events::Event;
pub use timer::{DurationKind, DurationSettings, SessionMode, SessionState, Ticker, TimerEngine};
