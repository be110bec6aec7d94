//! Runtime configuration.
//!
//! Each setting comes from the command line first, then the environment
//! (`TODO_DIR`, `TODO_KEY`), then a built-in default. Data lives in
//! `~/.todo/` unless told otherwise.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::store::DEFAULT_STORAGE_KEY;
use crate::task::IdStrategy;

pub const DIR_ENV: &str = "TODO_DIR";
pub const KEY_ENV: &str = "TODO_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub id_strategy: IdStrategy,
}

impl Config {
    /// Resolve against the process environment.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, |name| std::env::var(name).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = cli
            .dir
            .clone()
            .or_else(|| non_empty(env(DIR_ENV)).map(PathBuf::from))
            .unwrap_or_else(|| default_data_dir(env("HOME")));
        let storage_key = cli
            .key
            .clone()
            .or_else(|| non_empty(env(KEY_ENV)))
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        Config {
            data_dir,
            storage_key,
            id_strategy: cli.ids,
        }
    }
}

/// `$HOME/.todo`, or `./.todo` when there is no home directory.
pub fn default_data_dir(home: Option<String>) -> PathBuf {
    let home = non_empty(home).unwrap_or_else(|| ".".to_string());
    PathBuf::from(home).join(".todo")
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}
