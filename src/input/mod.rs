pub mod keyboard;

pub use keyboard::{is_interrupt, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Terminal events the runner cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Only presses: some terminals also report releases and repeats.
            Event::Key(key) if key.kind == KeyEventKind::Press => InputEvent::Key(key),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_release_is_not_a_key_event() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(InputEvent::from(Event::Key(key)), InputEvent::Key(key));
        key.kind = KeyEventKind::Release;
        assert_eq!(InputEvent::from(Event::Key(key)), InputEvent::Other);
        assert_eq!(InputEvent::from(Event::Resize(3, 4)), InputEvent::Resize(3, 4));
    }

    #[test]
    fn ctrl_c_is_interrupt() {
        assert!(is_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
