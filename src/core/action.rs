//! # Menu Actions
//!
//! The shell has a single "menu" state. Every menu entry is a `MenuAction`;
//! `dispatch()` runs it and says whether to show the menu again.
//!
//! ```text
//!          ┌──────── List / Add / Toggle ───────┐
//!          ▼                                    │
//!      ┌────────┐                               │
//!  ──▶ │  Menu  │ ──────────────────────────────┘
//!      └────────┘
//!          │ Quit
//!          ▼
//!         exit
//! ```

use std::fmt;
use std::io::Write;

use crate::core::commands;
use crate::core::error::Error;
use crate::core::store::Store;
use crate::prompt::Prompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    List,
    Add,
    Toggle,
    Quit,
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [MenuAction; 4] = [
        MenuAction::List,
        MenuAction::Add,
        MenuAction::Toggle,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::List => "List Todos",
            MenuAction::Add => "Add Todo",
            MenuAction::Toggle => "Toggle Todo",
            MenuAction::Quit => "Quit",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|a| a.label().to_string()).collect()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the shell does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Back to the menu.
    Continue,
    Quit,
}

pub async fn dispatch<P, W>(
    action: MenuAction,
    store: &Store,
    prompter: &mut P,
    out: &mut W,
) -> Result<Effect, Error>
where
    P: Prompter + ?Sized,
    W: Write,
{
    match action {
        MenuAction::List => commands::list_todos(store, out).await?,
        MenuAction::Add => commands::add_todo(store, prompter, out).await?,
        MenuAction::Toggle => commands::toggle_todo(store, prompter, out).await?,
        MenuAction::Quit => return Ok(Effect::Quit),
    }
    Ok(Effect::Continue)
}
