//! # TUI Adapter
//!
//! The ratatui/crossterm layer. Renders prompts in a small inline viewport
//! below the current cursor line (no alternate screen), translates key
//! events into `PromptEvent`s and feeds them to the prompt components.
//!
//! This is the only module that knows about ratatui and crossterm. Once a
//! prompt is answered its viewport is cleared and replaced with a plain
//! `? <message> <answer>` line, so the scrollback reads like a transcript.
//!
//! [`run`] picks the prompter: the interactive one when both stdin and stdout
//! are terminals, the line-based one otherwise.

mod component;
mod components;
mod event;

use std::io::{IsTerminal, Stdout, Write, stdout};

use async_trait::async_trait;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream};
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use futures::{Stream, StreamExt};
use log::{debug, info};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::{Frame, Terminal, TerminalOptions, Viewport};
use tokio::io::BufReader;

use crate::core::config::ResolvedConfig;
use crate::core::error::Error;
use crate::core::shell;
use crate::core::store::Store;
use crate::prompt::{LinePrompter, PromptError, Prompter};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{
    Select, SelectEvent, SelectState, TextInput, TextInputEvent, TextInputState,
};
use crate::tui::event::translate;

/// Raw mode + bracketed paste for the lifetime of one prompt.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(stdout(), EnableBracketedPaste)?;
        Ok(guard)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
        let _ = disable_raw_mode();
    }
}

/// Interactive prompter for a real terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    /// Draw `handler` in an inline viewport of `height` rows and feed it key
    /// events until it produces a result.
    async fn drive<H, F>(&mut self, height: u16, handler: &mut H, draw: F) -> Result<H::Event, PromptError>
    where
        H: EventHandler,
        F: FnMut(&mut Frame, &mut H),
    {
        let _guard = TerminalModeGuard::new()?;
        let mut terminal: Terminal<CrosstermBackend<Stdout>> = Terminal::with_options(
            CrosstermBackend::new(stdout()),
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        let mut events = EventStream::new();

        prompt_loop(&mut terminal, &mut events, handler, draw).await
    }

    /// Leave `? <message> <answer>` behind in the scrollback.
    fn print_answer(message: &str, answer: &str) -> Result<(), PromptError> {
        let mut out = stdout();
        writeln!(
            out,
            "{} {} {}",
            "?".green().bold(),
            message.bold(),
            answer.cyan()
        )?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl Prompter for TerminalPrompter {
    async fn select(&mut self, message: &str, choices: &[String]) -> Result<usize, PromptError> {
        if choices.is_empty() {
            return Err(PromptError::NoChoices);
        }
        let mut state = SelectState::new(choices.to_vec());
        let height = state.height();
        let event = self
            .drive(height, &mut state, |frame, state| {
                let area = frame.area();
                Select::new(state, message).render(frame, area);
            })
            .await?;

        match event {
            SelectEvent::Chosen(index) => {
                debug!("Selected {:?} for {:?}", choices[index], message);
                Self::print_answer(message, &choices[index])?;
                Ok(index)
            }
            SelectEvent::Interrupted => Err(PromptError::Interrupted),
        }
    }

    async fn input(&mut self, message: &str) -> Result<String, PromptError> {
        let mut state = TextInputState::new();
        let event = self
            .drive(1, &mut state, |frame, state| {
                let area = frame.area();
                TextInput::new(state, message).render(frame, area);
            })
            .await?;

        match event {
            TextInputEvent::Submit(text) => {
                Self::print_answer(message, &text)?;
                Ok(text)
            }
            TextInputEvent::Interrupted => Err(PromptError::Interrupted),
        }
    }
}

/// Redraw and feed events to `handler` until it yields a result or the
/// terminal fails. The viewport is cleared on every exit path.
async fn prompt_loop<B, S, H, F>(
    terminal: &mut Terminal<B>,
    events: &mut S,
    handler: &mut H,
    mut draw: F,
) -> Result<H::Event, PromptError>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    S: Stream<Item = std::io::Result<Event>> + Unpin,
    H: EventHandler,
    F: FnMut(&mut Frame, &mut H),
{
    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| draw(frame, handler)) {
            break Err(backend_error(e));
        }
        let event = match events.next().await {
            Some(Ok(event)) => event,
            Some(Err(e)) => break Err(PromptError::Io(e)),
            None => break Err(PromptError::InputClosed),
        };
        if let Some(prompt_event) = translate(&event)
            && let Some(result) = handler.handle_event(&prompt_event)
        {
            break Ok(result);
        }
    };

    terminal.clear().map_err(backend_error)?;
    outcome
}

fn backend_error<E>(e: E) -> PromptError
where
    E: std::error::Error + Send + Sync + 'static,
{
    PromptError::Io(std::io::Error::other(e))
}

/// Run the interactive shell against the configured store until Quit.
pub async fn run(config: &ResolvedConfig) -> Result<(), Error> {
    let store = Store::new(&config.store_path);
    let mut out = stdout();

    if std::io::stdin().is_terminal() && out.is_terminal() {
        info!("Starting terminal prompter");
        let mut prompter = TerminalPrompter::new();
        shell::run_shell(&store, &mut prompter, &mut out).await
    } else {
        info!("stdin/stdout not a terminal, starting line prompter");
        let mut prompter = LinePrompter::new(BufReader::new(tokio::io::stdin()), stdout());
        shell::run_shell(&store, &mut prompter, &mut out).await
    }
}
