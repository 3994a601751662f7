//! # Select Component
//!
//! Inline list prompt: a `? <message>` header followed by the choices, the
//! highlighted one marked with `❯`. Up/Down (or j/k) move, digits jump,
//! Enter picks.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SelectState` lives for the duration of one prompt
//! - `Select` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use super::{header_line, truncate_to_width};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::PromptEvent;

/// Most choices shown at once; longer lists scroll.
pub const MAX_VISIBLE_CHOICES: usize = 10;

const HIGHLIGHT_SYMBOL: &str = "❯ ";

/// Persistent state for a select prompt.
pub struct SelectState {
    pub choices: Vec<String>,
    pub selected: usize,
    pub list_state: ListState,
}

impl SelectState {
    pub fn new(choices: Vec<String>) -> Self {
        let mut list_state = ListState::default();
        if !choices.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            choices,
            selected: 0,
            list_state,
        }
    }

    /// Rows needed: the header plus the visible part of the list.
    pub fn height(&self) -> u16 {
        1 + self.choices.len().min(MAX_VISIBLE_CHOICES) as u16
    }

    fn select(&mut self, index: usize) {
        if self.choices.is_empty() {
            return;
        }
        self.selected = index.min(self.choices.len() - 1);
        self.list_state.select(Some(self.selected));
    }
}

/// Events emitted by the select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    Chosen(usize),
    Interrupted,
}

impl EventHandler for SelectState {
    type Event = SelectEvent;

    fn handle_event(&mut self, event: &PromptEvent) -> Option<SelectEvent> {
        match event {
            PromptEvent::Interrupt => Some(SelectEvent::Interrupted),
            PromptEvent::CursorUp | PromptEvent::InputChar('k') => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            PromptEvent::CursorDown | PromptEvent::InputChar('j') => {
                self.select(self.selected + 1);
                None
            }
            PromptEvent::Home => {
                self.select(0);
                None
            }
            PromptEvent::End => {
                self.select(self.choices.len().saturating_sub(1));
                None
            }
            PromptEvent::InputChar(c) => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && (digit as usize) <= self.choices.len()
                {
                    self.select(digit as usize - 1);
                }
                None
            }
            PromptEvent::Submit if !self.choices.is_empty() => {
                Some(SelectEvent::Chosen(self.selected))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the select prompt.
pub struct Select<'a> {
    state: &'a mut SelectState,
    message: &'a str,
}

impl<'a> Select<'a> {
    pub fn new(state: &'a mut SelectState, message: &'a str) -> Self {
        Self { state, message }
    }
}

impl Component for Select<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        frame.render_widget(header_line(self.message, ""), header_area);

        let label_width = (list_area.width as usize).saturating_sub(HIGHLIGHT_SYMBOL.width());
        let items: Vec<ListItem> = self
            .state
            .choices
            .iter()
            .map(|choice| ListItem::new(Line::from(truncate_to_width(choice, label_width))))
            .collect();

        let list = List::new(items)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
