use std::path::{Path, PathBuf};

use clap::Args;
use pomodoro_core::{AlertDispatcher, Config, TimerEngine};

use super::DurationArgs;
use crate::logging::{init_tracing, LogTarget};
use crate::tui::{self, Action, App};

const LOG_FILE: &str = "pomodoro.log";

#[derive(Args, Debug)]
pub struct StartArgs {
    #[command(flatten)]
    pub durations: DurationArgs,
    /// Begin the first focus session immediately
    #[arg(long)]
    pub now: bool,
    /// No bell or sound command for this run
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: StartArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = Config::path()?;
    let config = Config::load_from(&config_path)?;
    let log_path = log_path(&config_path);
    if let Some(dir) = log_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    init_tracing(&config.log.level, LogTarget::File(log_path))?;

    let durations = args.durations.resolve(&config)?;
    let alerts = if args.quiet {
        AlertDispatcher::new()
    } else {
        AlertDispatcher::from_config(&config.alert)
    };
    tracing::info!(
        focus_minutes = durations.focus_minutes(),
        break_minutes = durations.break_minutes(),
        silent = alerts.is_silent(),
        "starting timer"
    );

    let mut app = App::new(TimerEngine::new(durations), alerts);
    if args.now {
        app.apply(Action::PlayPause);
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(tui::run(app))?;
    Ok(())
}

/// The log file lives next to whichever config file is in use.
fn log_path(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map_or_else(|| PathBuf::from(LOG_FILE), |dir| dir.join(LOG_FILE))
}
