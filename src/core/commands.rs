//! # Command Handlers
//!
//! List, add and toggle. Each one is a full load → mutate → save cycle
//! against the store, so nothing is cached between menu rounds.

use std::io::Write;

use log::info;

use crate::core::error::Error;
use crate::core::store::Store;
use crate::core::todo::{self, EMPTY_MESSAGE, Todo};
use crate::prompt::{PromptError, Prompter};

pub const ADD_PROMPT: &str = "Enter a new task:";
pub const TOGGLE_PROMPT: &str = "Select a todo to toggle:";

/// Print every todo, or the empty message.
pub async fn list_todos<W: Write>(store: &Store, out: &mut W) -> Result<(), Error> {
    let todos = store.load().await;
    for line in todo::render_list(&todos) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Ask for a task and append it, not completed, at the end of the list.
pub async fn add_todo<P, W>(store: &Store, prompter: &mut P, out: &mut W) -> Result<(), Error>
where
    P: Prompter + ?Sized,
    W: Write,
{
    let task = prompter.input(ADD_PROMPT).await?;

    let mut todos = store.load().await;
    todos.push(Todo::new(task));
    store.save(&todos).await?;

    info!("Added todo #{}", todos.len());
    writeln!(out, "Todo added successfully.")?;
    Ok(())
}

/// Ask which todo to toggle (by task text) and flip its completion flag.
pub async fn toggle_todo<P, W>(store: &Store, prompter: &mut P, out: &mut W) -> Result<(), Error>
where
    P: Prompter + ?Sized,
    W: Write,
{
    let mut todos = store.load().await;
    if todos.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }

    let labels = todo::choice_labels(&todos);
    let index = prompter.select(TOGGLE_PROMPT, &labels).await?;
    let len = todos.len();
    let entry = todos
        .get_mut(index)
        .ok_or(PromptError::OutOfRange { index, len })?;
    let completed = entry.toggle();
    store.save(&todos).await?;

    info!("Toggled todo #{} (completed={})", index + 1, completed);
    writeln!(out, "Todo toggled successfully.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Answer, ScriptedPrompter, temp_store};

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    async fn seed(store: &Store, tasks: &[(&str, bool)]) {
        let todos: Vec<Todo> = tasks
            .iter()
            .map(|(task, completed)| Todo {
                task: task.to_string(),
                completed: *completed,
            })
            .collect();
        store.save(&todos).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (_dir, store) = temp_store();
        let mut out = Vec::new();
        list_todos(&store, &mut out).await.unwrap();
        assert_eq!(output(out), "No todos found.\n");
    }

    #[tokio::test]
    async fn test_list_formats_each_todo() {
        let (_dir, store) = temp_store();
        seed(&store, &[("Buy milk", false), ("Walk dog", true)]).await;
        let mut out = Vec::new();
        list_todos(&store, &mut out).await.unwrap();
        assert_eq!(output(out), "1. [ ] Buy milk\n2. [x] Walk dog\n");
    }

    #[tokio::test]
    async fn test_list_is_idempotent() {
        let (_dir, store) = temp_store();
        seed(&store, &[("a", true), ("b", false)]).await;
        let before = std::fs::read_to_string(store.path()).unwrap();

        let mut first = Vec::new();
        let mut second = Vec::new();
        list_todos(&store, &mut first).await.unwrap();
        list_todos(&store, &mut second).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_add_appends_open_todo() {
        let (_dir, store) = temp_store();
        seed(&store, &[("a", true), ("b", false)]).await;
        let mut prompter = ScriptedPrompter::new([Answer::Input("c".into())]);
        let mut out = Vec::new();

        add_todo(&store, &mut prompter, &mut out).await.unwrap();

        let todos = store.load().await;
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[2], Todo::new("c"));
        assert!(todos[0].completed);
        assert_eq!(output(out), "Todo added successfully.\n");
        assert_eq!(prompter.asked, vec![ADD_PROMPT.to_string()]);
    }

    #[tokio::test]
    async fn test_add_accepts_empty_task() {
        let (_dir, store) = temp_store();
        let mut prompter = ScriptedPrompter::new([Answer::Input(String::new())]);
        add_todo(&store, &mut prompter, &mut Vec::<u8>::new()).await.unwrap();
        assert_eq!(store.load().await, vec![Todo::new("")]);
    }

    #[tokio::test]
    async fn test_add_prompt_failure_leaves_store_untouched() {
        let (_dir, store) = temp_store();
        let mut prompter = ScriptedPrompter::default();
        let result = add_todo(&store, &mut prompter, &mut Vec::<u8>::new()).await;
        assert!(matches!(result, Err(Error::Prompt(PromptError::InputClosed))));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_toggle_flips_only_selected() {
        let (_dir, store) = temp_store();
        seed(&store, &[("a", false), ("b", true), ("c", false)]).await;
        let mut prompter = ScriptedPrompter::new([Answer::Label("b".into())]);
        let mut out = Vec::new();

        toggle_todo(&store, &mut prompter, &mut out).await.unwrap();

        let todos = store.load().await;
        let flags: Vec<bool> = todos.iter().map(|t| t.completed).collect();
        assert_eq!(flags, vec![false, false, false]);
        assert_eq!(output(out), "Todo toggled successfully.\n");
        assert_eq!(prompter.asked, vec![TOGGLE_PROMPT.to_string()]);
    }

    #[tokio::test]
    async fn test_toggle_offers_task_labels_in_order() {
        let (_dir, store) = temp_store();
        seed(&store, &[("a", true), ("b", false)]).await;
        let mut prompter = ScriptedPrompter::new([Answer::Select(0)]);
        toggle_todo(&store, &mut prompter, &mut Vec::<u8>::new()).await.unwrap();
        assert_eq!(prompter.offered, vec![vec!["a".to_string(), "b".to_string()]]);
        assert!(!store.load().await[0].completed);
    }

    #[tokio::test]
    async fn test_toggle_empty_does_not_prompt() {
        let (_dir, store) = temp_store();
        let mut prompter = ScriptedPrompter::default();
        let mut out = Vec::new();

        toggle_todo(&store, &mut prompter, &mut out).await.unwrap();

        assert_eq!(output(out), "No todos found.\n");
        assert!(prompter.asked.is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_toggle_out_of_range_selection() {
        let (_dir, store) = temp_store();
        seed(&store, &[("a", false)]).await;
        let mut prompter = ScriptedPrompter::new([Answer::Select(5)]);
        let result = toggle_todo(&store, &mut prompter, &mut Vec::<u8>::new()).await;
        assert!(matches!(
            result,
            Err(Error::Prompt(PromptError::OutOfRange { index: 5, len: 1 }))
        ));
        assert_eq!(store.load().await, vec![Todo::new("a")]);
    }

    #[tokio::test]
    async fn test_add_over_corrupt_store_starts_fresh() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "{}").unwrap();
        let mut prompter = ScriptedPrompter::new([Answer::Input("x".into())]);
        add_todo(&store, &mut prompter, &mut Vec::<u8>::new()).await.unwrap();
        assert_eq!(store.load().await, vec![Todo::new("x")]);
    }
}
