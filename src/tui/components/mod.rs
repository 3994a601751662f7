//! # Prompt Components
//!
//! One component per input primitive:
//! - `Select`: pick one entry from a list
//! - `TextInput`: single-line free text
//!
//! Each file holds the component's state type, its event type, event
//! handling, rendering and tests.

pub mod select;
pub mod text_input;

pub use select::{Select, SelectEvent, SelectState};
pub use text_input::{TextInput, TextInputEvent, TextInputState};

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// `? <message> <answer>`: the first row of every prompt, and the line left
/// behind once it is answered.
pub fn header_line<'a>(message: &'a str, answer: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled("?", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(message, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(answer, Style::default().fg(Color::Cyan)),
    ])
}

/// Display width of the header before the answer starts.
pub fn header_width(message: &str) -> usize {
    2 + message.width() + 1
}

/// Truncate to at most `max_width` terminal columns, ending in "..." if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
