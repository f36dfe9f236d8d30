//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything a key press can ask of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Stop,
    IncreaseFocus,
    DecreaseFocus,
    IncreaseBreak,
    DecreaseBreak,
    Quit,
}

pub const HELP: &str =
    "space:play/pause | s:stop | \u{2191}/\u{2193}:focus | \u{2192}/\u{2190}:break | q:quit";

pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::PlayPause,
        KeyCode::Char('s') => Action::Stop,
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Action::IncreaseFocus,
        KeyCode::Down | KeyCode::Char('-') => Action::DecreaseFocus,
        KeyCode::Right | KeyCode::Char(']') => Action::IncreaseBreak,
        KeyCode::Left | KeyCode::Char('[') => Action::DecreaseBreak,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_controls() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Action::PlayPause));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(Action::Stop));
        assert_eq!(map_key(press(KeyCode::Up)), Some(Action::IncreaseFocus));
        assert_eq!(map_key(press(KeyCode::Char('-'))), Some(Action::DecreaseFocus));
        assert_eq!(map_key(press(KeyCode::Right)), Some(Action::IncreaseBreak));
        assert_eq!(map_key(press(KeyCode::Char('['))), Some(Action::DecreaseBreak));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(key), None);
    }
}
