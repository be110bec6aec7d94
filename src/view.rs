//! Text rendering of the task views.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::storage::KeyValueStore;
use crate::store::{TaskMap, TaskStore};
use crate::task::Task;

/// Widest title printed before it gets cut with an ellipsis.
const TITLE_WIDTH: usize = 60;

/// The three task views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    #[default]
    All,
    Active,
    Completed,
}

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Active => "Active Task",
            Tab::Completed => "Completed",
        }
    }

    /// Tasks belonging to this view.
    pub fn select<S: KeyValueStore>(self, store: &TaskStore<S>) -> TaskMap {
        match self {
            Tab::All => store.all_tasks(),
            Tab::Active => store.pending_tasks(),
            Tab::Completed => store.completed_tasks(),
        }
    }
}

/// Print `tasks` under a header naming `tab`.
pub fn render(out: &mut impl Write, tab: Tab, tasks: &TaskMap) -> io::Result<()> {
    writeln!(out, "{} ({})", tab.title(), tasks.len())?;
    if tasks.is_empty() {
        writeln!(out, "No tasks.")?;
        return Ok(());
    }
    writeln!(out, "{:<5} {:<5} {}", "ID", "Done", "Title")?;
    for task in tasks.values() {
        writeln!(out, "{}", format_row(task))?;
    }
    Ok(())
}

pub fn format_row(task: &Task) -> String {
    let done = if task.is_completed { "[x]" } else { "[ ]" };
    format!("{:<5} {:<5} {}", task.id, done, truncate(&task.title, TITLE_WIDTH))
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
