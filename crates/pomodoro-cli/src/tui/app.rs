use pomodoro_core::{AlertDispatcher, Event, SessionMode, TimerEngine};

use super::event::Action;

const LOCKED_MSG: &str = "Durations are locked while the timer runs";

/// Terminal front end state: the engine plus what only the UI cares about.
pub struct App {
    engine: TimerEngine,
    alerts: AlertDispatcher,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(engine: TimerEngine, alerts: AlertDispatcher) -> Self {
        Self {
            engine,
            alerts,
            status: None,
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn apply(&mut self, action: Action) {
        let event = match action {
            Action::PlayPause => {
                self.status = None;
                Some(self.engine.play_pause())
            }
            Action::Stop => {
                self.status = None;
                Some(self.engine.stop())
            }
            Action::IncreaseFocus => self.edit(TimerEngine::increase_focus),
            Action::DecreaseFocus => self.edit(TimerEngine::decrease_focus),
            Action::IncreaseBreak => self.edit(TimerEngine::increase_break),
            Action::DecreaseBreak => self.edit(TimerEngine::decrease_break),
            Action::Quit => {
                self.should_quit = true;
                None
            }
        };
        if let Some(event) = event {
            self.record(&event);
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(event) = self.engine.tick() {
            self.record(&event);
        }
    }

    fn edit(&mut self, apply: fn(&mut TimerEngine) -> Option<Event>) -> Option<Event> {
        if !self.engine.can_edit_durations() {
            self.status = Some(LOCKED_MSG.into());
            return None;
        }
        self.status = None;
        apply(&mut self.engine)
    }

    fn record(&mut self, event: &Event) {
        tracing::debug!(?event, "timer event");
        self.alerts.handle(event);
        if let Event::SessionTransitioned { to, .. } = event {
            self.status = Some(match to {
                SessionMode::OnBreak => "Time for a break".into(),
                _ => "Back to focus".into(),
            });
        }
    }
}
