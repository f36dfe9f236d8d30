pub mod config;
pub mod simulate;
pub mod start;

use clap::Args;
use pomodoro_core::{Config, ConfigError, DurationSettings};

/// One-run overrides for the configured durations.
#[derive(Args, Debug, Clone, Default)]
pub struct DurationArgs {
    /// Focus length in minutes (5-60, multiple of 5)
    #[arg(long = "focus", value_name = "MINUTES")]
    pub focus_minutes: Option<u32>,
    /// Break length in minutes (1-15)
    #[arg(long = "break", value_name = "MINUTES")]
    pub break_minutes: Option<u32>,
}

impl DurationArgs {
    pub fn resolve(&self, config: &Config) -> Result<DurationSettings, ConfigError> {
        DurationSettings::new(
            self.focus_minutes
                .unwrap_or(config.durations.focus_minutes),
            self.break_minutes
                .unwrap_or(config.durations.break_minutes),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_take_precedence_over_config() {
        let args = DurationArgs {
            focus_minutes: Some(50),
            break_minutes: None,
        };
        let durations = args.resolve(&Config::default()).unwrap();
        assert_eq!(durations.focus_minutes(), 50);
        assert_eq!(durations.break_minutes(), 5);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let args = DurationArgs {
            focus_minutes: None,
            break_minutes: Some(20),
        };
        assert!(args.resolve(&Config::default()).is_err());
    }
}
