//! # todo_store - a minimal to-do list
//!
//! Tasks are kept in a small JSON key-value store on disk and driven from the
//! command line.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task
//! todo add "Buy milk"
//!
//! # Mark it done
//! todo complete 417
//!
//! # Show the pending ones
//! todo list --view active
//! ```
//!
//! Data is stored in `~/.todo/TASK.json` (override with `--dir` or `TODO_DIR`).
//! The file holds one JSON object mapping task id to
//! `{"id": .., "title": .., "isCompleted": ..}`.

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod store;
pub mod task;
pub mod view;
