//! Key bindings per screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::quiz::{Action, ConfigEdit, Screen, Session};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Apply(Action),
    Quit,
}

/// Map a key press to a command for the session's current state
pub fn map_key(session: &Session, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    if key.code == KeyCode::Esc {
        return Some(Command::Quit);
    }

    let action = match session.screen() {
        Screen::Main => match key.code {
            KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => Action::Explore,
            KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Command::Quit),
            _ => return None,
        },
        Screen::Settings => match key.code {
            KeyCode::Right | KeyCode::Char('l') => Action::EditConfig(ConfigEdit::NextTable),
            KeyCode::Left | KeyCode::Char('h') => Action::EditConfig(ConfigEdit::PreviousTable),
            KeyCode::Up | KeyCode::Char('+') => Action::EditConfig(ConfigEdit::MoreQuestions),
            KeyCode::Down | KeyCode::Char('-') => Action::EditConfig(ConfigEdit::FewerQuestions),
            KeyCode::Char('d') | KeyCode::Char('D') => {
                Action::EditConfig(ConfigEdit::NextDifficulty)
            }
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Action::Start,
            KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Command::Quit),
            _ => return None,
        },
        Screen::Game if session.feedback().is_some() => match key.code {
            // Any OK-style key dismisses the feedback
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') | KeyCode::Char('O') => {
                Action::Acknowledge
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
            _ => return None,
        },
        Screen::Game => match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => Action::PressDigit(c as u8 - b'0'),
            KeyCode::Backspace | KeyCode::Delete => Action::Backspace,
            KeyCode::Enter => Action::Submit,
            KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
            _ => return None,
        },
        Screen::Score => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Command::Quit),
            _ => return None,
        },
    };
    Some(Command::Apply(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn in_game() -> Session {
        let mut session = Session::with_seed(1);
        session.apply(Action::Explore);
        session.apply(Action::Start);
        session
    }

    #[test]
    fn test_main_keys() {
        let session = Session::with_seed(1);
        assert_eq!(
            map_key(&session, press(KeyCode::Enter)),
            Some(Command::Apply(Action::Explore))
        );
        assert_eq!(map_key(&session, press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map_key(&session, press(KeyCode::Char('7'))), None);
    }

    #[test]
    fn test_settings_keys() {
        let mut session = Session::with_seed(1);
        session.apply(Action::Explore);
        assert_eq!(
            map_key(&session, press(KeyCode::Up)),
            Some(Command::Apply(Action::EditConfig(ConfigEdit::MoreQuestions)))
        );
        assert_eq!(
            map_key(&session, press(KeyCode::Char('d'))),
            Some(Command::Apply(Action::EditConfig(ConfigEdit::NextDifficulty)))
        );
        assert_eq!(
            map_key(&session, press(KeyCode::Enter)),
            Some(Command::Apply(Action::Start))
        );
    }

    #[test]
    fn test_game_keypad() {
        let session = in_game();
        assert_eq!(
            map_key(&session, press(KeyCode::Char('0'))),
            Some(Command::Apply(Action::PressDigit(0)))
        );
        assert_eq!(
            map_key(&session, press(KeyCode::Char('9'))),
            Some(Command::Apply(Action::PressDigit(9)))
        );
        assert_eq!(
            map_key(&session, press(KeyCode::Backspace)),
            Some(Command::Apply(Action::Backspace))
        );
        assert_eq!(
            map_key(&session, press(KeyCode::Enter)),
            Some(Command::Apply(Action::Submit))
        );
        assert_eq!(map_key(&session, press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_enter_acknowledges_feedback() {
        let mut session = in_game();
        session.apply(Action::Submit);
        assert_eq!(
            map_key(&session, press(KeyCode::Enter)),
            Some(Command::Apply(Action::Acknowledge))
        );
        assert_eq!(map_key(&session, press(KeyCode::Char('5'))), None);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let session = in_game();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&session, key), Some(Command::Quit));
        assert_eq!(map_key(&session, press(KeyCode::Esc)), Some(Command::Quit));
    }
}
