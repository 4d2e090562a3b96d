//! Terminal events to game commands.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::gesture::SwipeTracker;
use crate::types::Command;

/// Map a key press to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),

        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Some(Command::Rotate),

        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Feed a left-button mouse drag through the swipe tracker.
///
/// Terminal mice only report one pointer, so every event counts as a single touch.
pub fn handle_mouse_event(tracker: &mut SwipeTracker, mouse: MouseEvent) -> ArrayVec<Command, 2> {
    let x = f32::from(mouse.column);
    let y = f32::from(mouse.row);
    let mut out = ArrayVec::new();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => tracker.begin(1, x, y),
        MouseEventKind::Drag(MouseButton::Left) => out = tracker.drag(1, x, y),
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(cmd) = tracker.end() {
                out.push(cmd);
            }
        }
        _ => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Command::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Command::SoftDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Some(Command::MoveLeft)
        );
    }

    #[test]
    fn test_rotation_keys() {
        for code in [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('Z')] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), Some(Command::Rotate));
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::HardDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('P'))),
            Some(Command::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(Command::Reset)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_mouse_click_rotates() {
        let mut t = SwipeTracker::with_thresholds(2.0, 1.0, 3.0);
        assert!(handle_mouse_event(&mut t, mouse(MouseEventKind::Down(MouseButton::Left), 5, 5)).is_empty());
        let out = handle_mouse_event(&mut t, mouse(MouseEventKind::Up(MouseButton::Left), 5, 5));
        assert_eq!(out.as_slice(), &[Command::Rotate]);
    }

    #[test]
    fn test_mouse_drag_moves() {
        let mut t = SwipeTracker::with_thresholds(2.0, 1.0, 3.0);
        handle_mouse_event(&mut t, mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        let out = handle_mouse_event(&mut t, mouse(MouseEventKind::Drag(MouseButton::Left), 8, 5));
        assert_eq!(out.as_slice(), &[Command::MoveLeft]);
        let out = handle_mouse_event(&mut t, mouse(MouseEventKind::Up(MouseButton::Left), 8, 5));
        assert!(out.is_empty());
    }

    #[test]
    fn test_mouse_drag_one_row_soft_drops() {
        let mut t = SwipeTracker::with_thresholds(2.0, 1.0, 3.0);
        handle_mouse_event(&mut t, mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        let out = handle_mouse_event(&mut t, mouse(MouseEventKind::Drag(MouseButton::Left), 10, 6));
        assert_eq!(out.as_slice(), &[Command::SoftDrop]);
    }

    #[test]
    fn test_right_button_ignored() {
        let mut t = SwipeTracker::new();
        handle_mouse_event(&mut t, mouse(MouseEventKind::Down(MouseButton::Right), 1, 1));
        assert!(!t.active());
    }
}
