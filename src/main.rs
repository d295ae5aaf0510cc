mod cli;
mod color;
mod commands;
mod config;
mod domain;
mod integrations;
mod service;
mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};
use store::ShortcutStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve color mode from CLI flag and environment variables
    let color_mode = color::ColorMode::resolve(cli.color);

    // First-run initialization: make sure the shortcut table exists on disk
    // before any command touches it
    let config = config::Config::load()?;
    ShortcutStore::new(config.store_path()?).ensure_initialized()?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Organize { directory } => commands::organize::cmd_organize(&directory, color_mode),
        Commands::Add { name, command } => commands::add::cmd_add(&name, &command, color_mode),
        Commands::Remove { name } => commands::rm::cmd_remove(&name, color_mode),
        Commands::List => commands::list::cmd_list(),
        Commands::Exec { name } => commands::exec::cmd_exec(&name, color_mode),
        Commands::Init { force } => commands::init::cmd_init(force, color_mode),
        Commands::Completion { shell } => commands::completion::cmd_completion(&shell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
