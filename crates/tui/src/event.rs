//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to host messages.

use std::time::Duration;

use adventure_widget_protocol::{Message, Region};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

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

/// Converts an event (keyboard or mouse) to a host message.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to a host message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` or `q` | Quit |
/// | `Enter` or `Space` | Tap the widget body |
/// | `t` | Tap the title |
/// | `c` | Tap the configure button |
/// | `Tab` or `Right` | Focus next instance |
/// | `Shift+Tab` or `Left` | Focus previous instance |
/// | `r` | Refresh |
/// | `Esc` | Dismiss the last navigation request |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::Dismiss),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Tap {
            region: Region::Container,
        }),
        KeyCode::Char('t') => Some(Message::Tap {
            region: Region::Title,
        }),
        KeyCode::Char('c') => Some(Message::Tap {
            region: Region::ConfigureButton,
        }),

        KeyCode::Tab | KeyCode::Right => Some(Message::NextInstance),
        KeyCode::BackTab | KeyCode::Left => Some(Message::PrevInstance),

        KeyCode::Char('r') => Some(Message::Refresh),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, MouseEvent};

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

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), Some(Message::Quit));
    }

    #[test]
    fn plain_c_taps_configure() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('c'))),
            Some(Message::Tap {
                region: Region::ConfigureButton
            })
        );
    }

    #[test]
    fn tap_keys() {
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            assert_eq!(
                key_to_message(make_key(code)),
                Some(Message::Tap {
                    region: Region::Container
                })
            );
        }
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('t'))),
            Some(Message::Tap {
                region: Region::Title
            })
        );
    }

    #[test]
    fn focus_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Tab)), Some(Message::NextInstance));
        assert_eq!(key_to_message(make_key(KeyCode::Right)), Some(Message::NextInstance));
        assert_eq!(key_to_message(make_key(KeyCode::BackTab)), Some(Message::PrevInstance));
        assert_eq!(key_to_message(make_key(KeyCode::Left)), Some(Message::PrevInstance));
    }

    #[test]
    fn other_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('r'))), Some(Message::Refresh));
        assert_eq!(key_to_message(make_key(KeyCode::Esc)), Some(Message::Dismiss));
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn left_click_maps_to_click_at() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            event_to_message(&event),
            Some(Message::ClickAt { column: 12, row: 3 })
        );
    }

    #[test]
    fn right_click_is_ignored() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(event_to_message(&event), None);
    }
}
