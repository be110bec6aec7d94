use std::io;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use todo_store::cli::Cli;
use todo_store::cmd::*;
use todo_store::config::Config;
use todo_store::logging;
use todo_store::storage::FileStore;
use todo_store::store::TaskStore;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Commands that don't touch the task data.
    if let Commands::Completions { shell } = cli.command {
        cmd_completions(&mut io::stdout(), shell);
        return;
    }

    let config = Config::from_cli(&cli);
    tracing::debug!(?config, "resolved configuration");
    if let Err(e) = std::fs::create_dir_all(&config.data_dir) {
        eprintln!("Failed to create data directory {}: {}", config.data_dir.display(), e);
        std::process::exit(1);
    }

    let mut store = TaskStore::with_options(
        FileStore::new(config.data_dir.clone()),
        &config.storage_key,
        config.id_strategy,
        StdRng::from_entropy(),
    );
    let mut out = io::stdout().lock();

    let result = match cli.command {
        Commands::Add { title } => cmd_add(&mut store, &mut out, &title).map(|_| ()),
        Commands::Complete { id } => cmd_complete(&mut store, &mut out, id),
        Commands::Delete { id } => cmd_delete(&mut store, &mut out, id),
        Commands::List { view } => cmd_list(&store, &mut out, view),
        Commands::Completions { .. } => unreachable!("completions handled above"),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
