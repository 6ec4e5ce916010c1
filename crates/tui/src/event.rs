//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Left-button mouse events become the pointer
//! messages that drive drag-and-drop.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use taskboard_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to a pointer message.
///
/// Only the left button is tracked: press, drag and release map to
/// [`Message::PointerDown`], [`Message::PointerDrag`] and
/// [`Message::PointerUp`].
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::PointerDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::PointerUp { column, row }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel drag, dismiss help or clear selection) |
/// | `Left` | Navigate left |
/// | `Right` | Navigate right |
/// | `Up` | Navigate up |
/// | `Down` | Navigate down |
/// | `c` | Toggle the status chart |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char('c') => Some(Message::ToggleChart),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    fn make_mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn plain_c_toggles_chart() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('c'))),
            Some(Message::ToggleChart)
        );
    }

    #[test]
    fn escape_and_help_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left)),
            Some(Message::NavigateLeft)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Right)),
            Some(Message::NavigateRight)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Enter)), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn left_button_gesture_maps_to_pointer_messages() {
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)),
            Some(Message::PointerDown { column: 10, row: 5 })
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Drag(MouseButton::Left), 11, 6)),
            Some(Message::PointerDrag { column: 11, row: 6 })
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Up(MouseButton::Left), 12, 7)),
            Some(Message::PointerUp { column: 12, row: 7 })
        );
    }

    #[test]
    fn other_buttons_ignored() {
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Drag(MouseButton::Middle),
            MouseEventKind::Up(MouseButton::Right),
        ] {
            assert_eq!(mouse_to_message(&make_mouse(kind, 1, 1)), None);
        }
    }

    #[test]
    fn plain_moves_and_scrolls_ignored() {
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Moved, 10, 5)),
            None
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::ScrollDown, 10, 5)),
            None
        );
    }

    #[test]
    fn event_to_message_dispatches() {
        assert_eq!(
            event_to_message(&Event::Key(make_key(KeyCode::Left))),
            Some(Message::NavigateLeft)
        );
        assert_eq!(
            event_to_message(&Event::Mouse(make_mouse(
                MouseEventKind::Down(MouseButton::Left),
                15,
                8
            ))),
            Some(Message::PointerDown { column: 15, row: 8 })
        );
        assert_eq!(event_to_message(&Event::Resize(80, 24)), None);
    }
}
