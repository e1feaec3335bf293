use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Scroll the demo page down (marquee slides up)
    PageDown,
    /// Scroll the demo page up (marquee slides down)
    PageUp,
    JumpToTop,
    JumpToBottom,
    None,
}

/// Translate a key event into a demo action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::PageDown,
        KeyCode::Char('k') | KeyCode::Up => Action::PageUp,
        KeyCode::Char('g') => Action::JumpToTop,
        KeyCode::Char('G') => Action::JumpToBottom,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('j'))), Action::PageDown);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), Action::PageUp);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('G'))), Action::JumpToBottom);
    }

    #[test]
    fn test_unmapped_key_is_none() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), Action::None);
    }
}
