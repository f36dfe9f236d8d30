//! Headless run: start a session, apply a number of ticks instantly and
//! report every event. Handy for scripts and for checking the schedule of
//! transitions without waiting on a real clock.

use clap::Args;
use pomodoro_core::timer::format_clock;
use pomodoro_core::{AlertDispatcher, Config, Event, TimerEngine};

use super::DurationArgs;
use crate::logging::{init_tracing, LogTarget};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub durations: DurationArgs,
    /// Number of one-second ticks to apply after pressing play
    #[arg(long, default_value_t = 0)]
    pub ticks: u64,
    /// Pause after this many ticks (remaining ticks are then ignored)
    #[arg(long, value_name = "TICK")]
    pub pause_at: Option<u64>,
    /// Emit one JSON object per line
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.log.level, LogTarget::Stderr)?;

    let mut engine = TimerEngine::new(args.durations.resolve(&config)?);
    // Counts transitions only; a headless run never makes noise.
    let mut alerts = AlertDispatcher::new();

    emit(&engine.play_pause(), args.json)?;
    for tick in 1..=args.ticks {
        if let Some(event) = engine.tick() {
            alerts.handle(&event);
            if !args.json {
                print!("tick {tick}: ");
            }
            emit(&event, args.json)?;
        }
        if args.pause_at == Some(tick) {
            emit(&engine.play_pause(), args.json)?;
        }
    }

    emit(&engine.snapshot(), args.json)?;
    if !args.json {
        println!("alerts: {}", alerts.fired());
    }
    Ok(())
}

fn emit(event: &Event, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    } else {
        println!("{}", describe(event));
    }
    Ok(())
}

fn describe(event: &Event) -> String {
    match event {
        Event::TimerStarted { remaining_secs, .. } => {
            format!("started: Focusing {}", format_clock(*remaining_secs))
        }
        Event::TimerPaused { remaining_secs, .. } => {
            format!("paused at {}", format_clock(*remaining_secs))
        }
        Event::TimerResumed { remaining_secs, .. } => {
            format!("resumed at {}", format_clock(*remaining_secs))
        }
        Event::TimerStopped { .. } => "stopped".to_string(),
        Event::SessionTransitioned {
            from,
            to,
            remaining_secs,
            ..
        } => format!(
            "{} -> {} ({})",
            from.label().unwrap_or("Idle"),
            to.label().unwrap_or("Idle"),
            format_clock(*remaining_secs)
        ),
        Event::DurationChanged {
            setting, minutes, ..
        } => format!("{setting:?} duration set to {minutes} min"),
        Event::StateSnapshot {
            label,
            running,
            remaining_secs,
            progress_pct,
            elapsed_secs,
            ..
        } => format!(
            "{} {} [{:.0}%] {} (elapsed {}s)",
            label.as_deref().unwrap_or("Idle"),
            format_clock(*remaining_secs),
            progress_pct,
            if *running { "running" } else { "paused" },
            elapsed_secs
        ),
    }
}
