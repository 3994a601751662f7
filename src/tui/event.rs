use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Prompt-level input events, translated from raw crossterm events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    Home,
    End,
    Submit,
    /// Ctrl+C: abandon the whole program, not just the prompt.
    Interrupt,
}

/// Translate a terminal event; `None` for anything prompts ignore.
pub fn translate(event: &Event) -> Option<PromptEvent> {
    match event {
        Event::Key(key_event) => {
            // Windows also reports releases; only act on presses.
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::trace!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
                    Some(PromptEvent::Interrupt)
                }
                (m, KeyCode::Char(_)) if m.contains(KeyModifiers::CONTROL) => None,
                (_, KeyCode::Char(c)) => Some(PromptEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(PromptEvent::Backspace),
                (_, KeyCode::Delete) => Some(PromptEvent::Delete),
                (_, KeyCode::Left) => Some(PromptEvent::CursorLeft),
                (_, KeyCode::Right) => Some(PromptEvent::CursorRight),
                (_, KeyCode::Up) => Some(PromptEvent::CursorUp),
                (_, KeyCode::Down) => Some(PromptEvent::CursorDown),
                (_, KeyCode::Home) => Some(PromptEvent::Home),
                (_, KeyCode::End) => Some(PromptEvent::End),
                (_, KeyCode::Enter) => Some(PromptEvent::Submit),
                _ => None,
            }
        }
        Event::Paste(data) => Some(PromptEvent::Paste(data.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        assert_eq!(
            translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(PromptEvent::Interrupt)
        );
    }

    #[test]
    fn test_plain_and_shifted_chars() {
        assert_eq!(
            translate(&key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(PromptEvent::InputChar('c'))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('M'), KeyModifiers::SHIFT)),
            Some(PromptEvent::InputChar('M'))
        );
    }

    #[test]
    fn test_other_control_chords_ignored() {
        assert_eq!(translate(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            translate(&key(KeyCode::Up, KeyModifiers::NONE)),
            Some(PromptEvent::CursorUp)
        );
        assert_eq!(
            translate(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(PromptEvent::Submit)
        );
        assert_eq!(translate(&key(KeyCode::Esc, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(&Event::Key(release)), None);
    }

    #[test]
    fn test_paste() {
        assert_eq!(
            translate(&Event::Paste("abc".into())),
            Some(PromptEvent::Paste("abc".into()))
        );
    }
}
