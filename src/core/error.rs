//! Top-level error for a shell session. Store read failures never get here
//! (they load as an empty list); everything that does is fatal.

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::core::store::StoreError;
use crate::prompt::PromptError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// True when the user pressed Ctrl+C at a prompt.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Error::Prompt(PromptError::Interrupted))
    }
}
