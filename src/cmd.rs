//! Command implementations for the CLI interface.
//!
//! Each handler validates its input, forwards the intent to the
//! [`TaskStore`] and prints the outcome.

use std::io::Write;

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CommandError;
use crate::storage::KeyValueStore;
use crate::store::TaskStore;
use crate::task::TaskId;
use crate::view::{self, Tab};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Short title for the task.
        title: String,
    },

    /// Mark a task done.
    Complete {
        /// Task ID to complete.
        id: TaskId,
    },

    /// Delete a task.
    Delete {
        /// Task ID to delete.
        id: TaskId,
    },

    /// List tasks in one of the views.
    List {
        /// Which tasks to show: all | active | completed.
        #[arg(long, value_enum, default_value_t = Tab::All)]
        view: Tab,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Add a new task. Blank titles are refused before reaching the store.
pub fn cmd_add<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    out: &mut impl Write,
    title: &str,
) -> Result<TaskId, CommandError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CommandError::EmptyTitle);
    }
    let task = store.create_task(title);
    check_saved(store)?;
    tracing::info!(id = task.id, "task created");
    writeln!(out, "Added task {}", task.id)?;
    Ok(task.id)
}

/// Mark a task done. An unknown id is reported but is not an error.
pub fn cmd_complete<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    out: &mut impl Write,
    id: TaskId,
) -> Result<(), CommandError> {
    if store.complete_task(id) {
        check_saved(store)?;
        writeln!(out, "Completed task {id}")?;
    } else {
        writeln!(out, "Task {id} not found.")?;
    }
    Ok(())
}

/// Delete a task. An unknown id is reported but is not an error.
pub fn cmd_delete<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    out: &mut impl Write,
    id: TaskId,
) -> Result<(), CommandError> {
    if store.delete_task(id) {
        check_saved(store)?;
        writeln!(out, "Deleted task {id}")?;
    } else {
        writeln!(out, "Task {id} not found.")?;
    }
    Ok(())
}

/// Surface a write the store could not persist.
fn check_saved<S: KeyValueStore>(store: &mut TaskStore<S>) -> Result<(), CommandError> {
    match store.take_persist_error() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// List the tasks of one view.
pub fn cmd_list<S: KeyValueStore>(
    store: &TaskStore<S>,
    out: &mut impl Write,
    tab: Tab,
) -> Result<(), CommandError> {
    view::render(out, tab, &tab.select(store))?;
    Ok(())
}

/// Write a completion script for `shell`.
pub fn cmd_completions(out: &mut impl Write, shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use crate::storage::{FileStore, MemoryStore};
    use crate::task::IdStrategy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store() -> TaskStore<MemoryStore> {
        TaskStore::with_options(MemoryStore::new(), "TASK", IdStrategy::Sequential, StdRng::seed_from_u64(0))
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_add_trims_title() {
        let mut s = store();
        let mut out: Vec<u8> = Vec::new();
        let id = cmd_add(&mut s, &mut out, "  Buy milk ").unwrap();

        assert_eq!(text(out), format!("Added task {id}\n"));
        assert_eq!(s.get(id).map(|t| t.title.as_str()), Some("Buy milk"));
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let mut s = store();
        let mut out: Vec<u8> = Vec::new();
        assert!(matches!(cmd_add(&mut s, &mut out, ""), Err(CommandError::EmptyTitle)));
        assert!(matches!(cmd_add(&mut s, &mut out, "   "), Err(CommandError::EmptyTitle)));
        assert!(s.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_complete_and_delete_messages() {
        let mut s = store();
        let id = cmd_add(&mut s, &mut io::sink(), "a").unwrap();

        let mut out: Vec<u8> = Vec::new();
        cmd_complete(&mut s, &mut out, id).unwrap();
        cmd_complete(&mut s, &mut out, 500).unwrap();
        cmd_delete(&mut s, &mut out, id).unwrap();
        cmd_delete(&mut s, &mut out, id).unwrap();

        assert_eq!(
            text(out),
            format!("Completed task {id}\nTask 500 not found.\nDeleted task {id}\nTask {id} not found.\n")
        );
    }

    #[test]
    fn test_failed_save_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("tasks");
        std::fs::write(&blocker, "x").unwrap();
        let mut s =
            TaskStore::with_options(FileStore::new(&blocker), "TASK", IdStrategy::Sequential, StdRng::seed_from_u64(0));

        let mut out: Vec<u8> = Vec::new();
        assert!(matches!(cmd_add(&mut s, &mut out, "Buy milk"), Err(CommandError::Persist(_))));
        assert!(matches!(cmd_complete(&mut s, &mut out, 1), Err(CommandError::Persist(_))));
        assert!(matches!(cmd_delete(&mut s, &mut out, 1), Err(CommandError::Persist(_))));
        assert!(out.is_empty());

        let reopened = TaskStore::open(FileStore::new(&blocker));
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_list_views() {
        let mut s = store();
        cmd_add(&mut s, &mut io::sink(), "first").unwrap();
        let second = cmd_add(&mut s, &mut io::sink(), "second").unwrap();
        cmd_complete(&mut s, &mut io::sink(), second).unwrap();

        let mut out: Vec<u8> = Vec::new();
        cmd_list(&s, &mut out, Tab::Active).unwrap();
        let active = text(out);
        assert!(active.starts_with("Active Task (1)\n"));
        assert!(active.contains("first"));
        assert!(!active.contains("second"));

        let mut out: Vec<u8> = Vec::new();
        cmd_list(&s, &mut out, Tab::Completed).unwrap();
        let done = text(out);
        assert!(done.starts_with("Completed (1)\n"));
        assert!(done.contains("second"));
    }

    #[test]
    fn test_completions_mention_subcommands() {
        let mut out: Vec<u8> = Vec::new();
        cmd_completions(&mut out, Shell::Bash);
        let script = text(out);
        assert!(script.contains("complete"));
        assert!(script.contains("todo"));
    }
}
