use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Overrides the configured level, e.g. `POMODORO_LOG=debug`.
pub const LOG_ENV: &str = "POMODORO_LOG";

pub enum LogTarget {
    Stderr,
    /// Append to a file; used while the terminal UI owns the screen.
    File(PathBuf),
}

pub fn init_tracing(level: &str, target: LogTarget) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| e.to_string())?;
    Ok(())
}
