//! # TextInput Component
//!
//! Single-line free-text prompt rendered after the `? <message>` header.
//!
//! The cursor is a byte offset into `buffer` and always sits on a char
//! boundary. When the text is wider than the terminal, the view scrolls so
//! the cursor stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use super::{header_line, header_width};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::PromptEvent;

/// Persistent state for a text prompt.
#[derive(Debug, Default)]
pub struct TextInputState {
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub cursor: usize,
}

/// Events emitted by the text prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    Submit(String),
    Interrupted,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    /// Byte offset where the visible part of the buffer starts so that the
    /// cursor fits within `width` columns.
    fn scroll_start(&self, width: usize) -> usize {
        let mut start = 0;
        while start < self.cursor && self.buffer[start..self.cursor].width() >= width {
            start += self.buffer[start..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
        }
        start
    }
}

impl EventHandler for TextInputState {
    type Event = TextInputEvent;

    fn handle_event(&mut self, event: &PromptEvent) -> Option<TextInputEvent> {
        match event {
            PromptEvent::Interrupt => return Some(TextInputEvent::Interrupted),
            PromptEvent::Submit => return Some(TextInputEvent::Submit(self.buffer.clone())),
            PromptEvent::InputChar(c) => {
                let mut encoded = [0; 4];
                self.insert_str(c.encode_utf8(&mut encoded));
            }
            // Single line: pasted newlines become spaces.
            PromptEvent::Paste(text) => {
                let flattened: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.insert_str(&flattened);
            }
            PromptEvent::Backspace => {
                if let Some(prev) = self.prev_boundary() {
                    self.buffer.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                }
            }
            PromptEvent::Delete => {
                if let Some(next) = self.next_boundary() {
                    self.buffer.replace_range(self.cursor..next, "");
                }
            }
            PromptEvent::CursorLeft => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
            }
            PromptEvent::CursorRight => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
            }
            PromptEvent::Home => self.cursor = 0,
            PromptEvent::End => self.cursor = self.buffer.len(),
            PromptEvent::CursorUp | PromptEvent::CursorDown => {}
        }
        None
    }
}

/// Transient render wrapper for the text prompt.
pub struct TextInput<'a> {
    state: &'a TextInputState,
    message: &'a str,
}

impl<'a> TextInput<'a> {
    pub fn new(state: &'a TextInputState, message: &'a str) -> Self {
        Self { state, message }
    }
}

impl Component for TextInput<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prefix = header_width(self.message);
        let available = (area.width as usize).saturating_sub(prefix);
        let start = self.state.scroll_start(available);

        frame.render_widget(header_line(self.message, &self.state.buffer[start..]), area);

        let cursor_col = prefix + self.state.buffer[start..self.state.cursor].width();
        let x = area.x + (cursor_col as u16).min(area.width.saturating_sub(1));
        frame.set_cursor_position((x, area.y));
    }
}
