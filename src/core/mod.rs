//! # Core Application Logic
//!
//! The todo domain: the data model, the JSON store, the command handlers
//! and the menu loop. It talks to the user only through the
//! [`Prompter`](crate::prompt::Prompter) trait and a `Write` sink.
//!
//! ```text
//!   shell::run_shell ──▶ action::dispatch ──▶ commands::{list,add,toggle}
//!         │                                        │
//!         ▼                                        ▼
//!   prompt::Prompter                     store::Store (load → mutate → save)
//! ```
//!
//! ## Modules
//!
//! - [`todo`]: `Todo` and list formatting
//! - [`store`]: load/save `todos.json`
//! - [`commands`]: list / add / toggle handlers
//! - [`action`]: the `MenuAction` enum and `dispatch()`
//! - [`shell`]: the menu loop
//! - [`config`]: `~/.tickle/config.toml` and override resolution
//! - [`error`]: the session-level `Error`

pub mod action;
pub mod commands;
pub mod config;
pub mod error;
pub mod shell;
pub mod store;
pub mod todo;
