use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    let cwd = std::env::current_dir()?;
    let config = cli.config;

    match cli.command {
        Commands::Init { remote } => handle_init(&cwd, remote),
        Commands::Serve { port, host } => handle_serve(load_context(config, &cwd)?, port, host),
        Commands::Query { query, variables } => {
            handle_query(load_context(config, &cwd)?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(load_context(config, &cwd)?, mutation, variables),
    }
}

fn load_context(config: Option<PathBuf>, cwd: &Path) -> Result<CommandContext> {
    CommandContext::load(config.as_deref(), cwd).context("Failed to load bookshelf configuration")
}
