//! Line-oriented prompter: prints numbered choices and reads answers one line
//! at a time. Answers may be the choice number or its exact label.

use std::io::Write;

use async_trait::async_trait;
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::{PromptError, Prompter};

pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> LinePrompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Next line without its terminator. EOF is `InputClosed`.
    async fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(PromptError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// Resolve an answer to a choice position: an in-range 1-based number first,
/// then the exact label, then the label with surrounding whitespace ignored.
fn parse_answer(answer: &str, choices: &[String]) -> Option<usize> {
    let trimmed = answer.trim();
    if let Ok(number) = trimmed.parse::<usize>()
        && (1..=choices.len()).contains(&number)
    {
        return Some(number - 1);
    }
    choices
        .iter()
        .position(|choice| choice == answer)
        .or_else(|| choices.iter().position(|choice| choice == trimmed))
}

#[async_trait(?Send)]
impl<R, W> Prompter for LinePrompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    async fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, PromptError> {
        if choices.is_empty() {
            return Err(PromptError::NoChoices);
        }

        writeln!(self.writer, "? {message}")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", i + 1, choice)?;
        }

        loop {
            write!(self.writer, "  Answer: ")?;
            self.writer.flush()?;
            let answer = self.read_line().await?;
            match parse_answer(&answer, choices) {
                Some(index) => {
                    debug!("Selected {:?} for {:?}", choices[index], message);
                    return Ok(index);
                }
                None => writeln!(
                    self.writer,
                    "  Please enter a number between 1 and {}.",
                    choices.len()
                )?,
            }
        }
    }

    async fn input(&mut self, message: &str) -> Result<String, PromptError> {
        write!(self.writer, "? {message} ")?;
        self.writer.flush()?;
        self.read_line().await
    }
}
