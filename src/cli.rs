use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::task::IdStrategy;

/// Small, file-backed to-do list.
/// Storage defaults to ~/.todo or a directory passed via --dir.
#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Minimal to-do list")]
pub struct Cli {
    /// Directory holding the task data.
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Storage key the task collection is kept under.
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// How ids are assigned to new tasks.
    #[arg(long, global = true, value_enum, default_value_t = IdStrategy::Random)]
    pub ids: IdStrategy,

    /// More log output. May be repeated.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}
