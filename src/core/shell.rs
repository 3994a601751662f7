//! # Interactive Shell
//!
//! Show the menu, run the chosen action, repeat until Quit. Errors from any
//! action end the session and are returned to the caller.

use std::io::Write;

use log::{debug, info};

use crate::core::action::{Effect, MenuAction, dispatch};
use crate::core::error::Error;
use crate::core::store::Store;
use crate::prompt::{PromptError, Prompter};

pub const MENU_PROMPT: &str = "Select an action:";

pub async fn run_shell<P, W>(store: &Store, prompter: &mut P, out: &mut W) -> Result<(), Error>
where
    P: Prompter + ?Sized,
    W: Write,
{
    info!("Shell started with store {}", store.path().display());
    let labels = MenuAction::labels();

    loop {
        let index = prompter.select(MENU_PROMPT, &labels).await?;
        let action = MenuAction::from_index(index).ok_or(PromptError::OutOfRange {
            index,
            len: labels.len(),
        })?;
        debug!("Menu action: {}", action);

        let effect = dispatch(action, store, prompter, out).await?;
        out.flush()?;
        if effect == Effect::Quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}
