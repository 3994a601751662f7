//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;

use async_trait::async_trait;
use tempfile::TempDir;

use crate::core::store::Store;
use crate::prompt::{PromptError, Prompter};

/// One canned answer for a `ScriptedPrompter`.
#[derive(Debug, Clone)]
pub enum Answer {
    /// Pick this position, even if it is out of range.
    Select(usize),
    /// Pick the choice with this exact label.
    Label(String),
    /// Free-text answer.
    Input(String),
    /// Behave as if Ctrl+C was pressed.
    Interrupt,
}

/// A prompter that replays canned answers and records what it was asked.
/// Running out of answers behaves like a closed input stream.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    /// Prompt messages, in the order they were shown.
    pub asked: Vec<String>,
    /// Choices offered by each `select` call.
    pub offered: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
            offered: Vec::new(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }
}

#[async_trait(?Send)]
impl Prompter for ScriptedPrompter {
    async fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, PromptError> {
        self.asked.push(message.to_string());
        self.offered.push(choices.to_vec());
        if choices.is_empty() {
            return Err(PromptError::NoChoices);
        }
        match self.answers.pop_front() {
            None => Err(PromptError::InputClosed),
            Some(Answer::Select(index)) => Ok(index),
            Some(Answer::Label(label)) => choices
                .iter()
                .position(|c| *c == label)
                .ok_or(PromptError::OutOfRange {
                    index: choices.len(),
                    len: choices.len(),
                }),
            Some(Answer::Interrupt) => Err(PromptError::Interrupted),
            Some(other) => panic!("select({message:?}) got scripted answer {other:?}"),
        }
    }

    async fn input(&mut self, message: &str) -> Result<String, PromptError> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            None => Err(PromptError::InputClosed),
            Some(Answer::Input(text)) => Ok(text),
            Some(Answer::Interrupt) => Err(PromptError::Interrupted),
            Some(other) => panic!("input({message:?}) got scripted answer {other:?}"),
        }
    }
}

/// A store backed by `todos.json` in a fresh temp dir. Keep the `TempDir`
/// alive for as long as the store is used.
pub fn temp_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = Store::new(dir.path().join("todos.json"));
    (dir, store)
}
