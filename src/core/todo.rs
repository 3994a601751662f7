//! # Todo Model
//!
//! A todo is a task description plus a completion flag. Lists are plain
//! `Vec<Todo>` in insertion order; the 1-based position is the only identity
//! a todo has, so nothing here reorders or removes entries.

use serde::{Deserialize, Serialize};

/// Shown by list and toggle when there is nothing to work with.
pub const EMPTY_MESSAGE: &str = "No todos found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub task: String,
    pub completed: bool,
}

impl Todo {
    /// A new, not yet completed todo.
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            completed: false,
        }
    }

    /// Flip the completion flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    fn checkbox(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

/// Format one list line: `<position>. [x| ] <task>` with a 1-based position.
pub fn format_line(position: usize, todo: &Todo) -> String {
    format!("{}. [{}] {}", position, todo.checkbox(), todo.task)
}

/// Render a whole list, one line per todo, or the empty message.
pub fn render_list(todos: &[Todo]) -> Vec<String> {
    if todos.is_empty() {
        return vec![EMPTY_MESSAGE.to_string()];
    }
    todos
        .iter()
        .enumerate()
        .map(|(index, todo)| format_line(index + 1, todo))
        .collect()
}

/// Labels for the toggle menu: the task text, in positional order.
pub fn choice_labels(todos: &[Todo]) -> Vec<String> {
    todos.iter().map(|todo| todo.task.clone()).collect()
}
