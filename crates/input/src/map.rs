//! Key mapping from terminal events to game actions.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the session's command queue
    Play(Command),
    Pause,
    /// Start a fresh session (also the way out of game over)
    Restart,
}

/// Map keyboard input to an action.
///
/// Release events are ignored so terminals that report them do not
/// double-apply moves.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Some(KeyAction::Play(Command::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Some(KeyAction::Play(Command::MoveRight))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Some(KeyAction::Play(Command::SoftDrop))
        }

        // Rotation
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | ' ') => {
            Some(KeyAction::Play(Command::Rotate))
        }

        // Session control
        KeyCode::Char('p' | 'P') => Some(KeyAction::Pause),
        KeyCode::Char('r' | 'R') | KeyCode::Enter => Some(KeyAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn play(cmd: Command) -> Option<KeyAction> {
        Some(KeyAction::Play(cmd))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), play(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), play(Command::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), play(Command::SoftDrop));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('H'))), play(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('d'))), play(Command::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('J'))), play(Command::SoftDrop));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('s'))), play(Command::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        for code in [
            KeyCode::Up,
            KeyCode::Char('w'),
            KeyCode::Char('K'),
            KeyCode::Char(' '),
        ] {
            assert_eq!(map_key(KeyEvent::from(code)), play(Command::Rotate));
        }
        // Counter-clockwise rotation does not exist here.
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('p'))), Some(KeyAction::Pause));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('R'))), Some(KeyAction::Restart));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(KeyAction::Restart));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_and_ctrl_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
