//! # Prompts
//!
//! The two input primitives the shell needs: pick one entry from a list, or
//! type a line of free text. `Prompter` is the seam between the command
//! handlers and whatever is on the other end of the terminal.
//!
//! Implementations:
//! - [`crate::tui::TerminalPrompter`]: interactive, arrow-key driven (ratatui + crossterm)
//! - [`LinePrompter`]: numbered menus over any line-oriented reader, used when stdin is piped

mod line;

use async_trait::async_trait;
use thiserror::Error;

pub use line::LinePrompter;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("interrupted")]
    Interrupted,
    #[error("input stream closed")]
    InputClosed,
    /// Guard in each prompter's `select`; the command handlers check for an
    /// empty list before they get that far.
    #[error("nothing to choose from")]
    NoChoices,
    #[error("selection {index} is out of range for {len} choices")]
    OutOfRange { index: usize, len: usize },
}

#[async_trait(?Send)]
pub trait Prompter {
    /// Ask the user to pick one of `choices`; returns its position.
    ///
    /// An empty `choices` slice is `PromptError::NoChoices`.
    async fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, PromptError>;

    /// Ask for one line of free text. Empty answers are allowed.
    async fn input(&mut self, message: &str) -> Result<String, PromptError>;
}
