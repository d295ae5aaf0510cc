//! Completion command - Generate shell completion scripts

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate a completion script for the given shell on stdout
///
/// # Errors
/// Returns an error if an invalid shell is specified
pub fn cmd_completion(shell: &str) -> Result<()> {
    let shell: Shell = shell.parse().map_err(|_| {
        anyhow::anyhow!("Invalid shell: {shell}. Supported shells: bash, zsh, fish")
    })?;

    generate(shell, &mut Cli::command(), "sortcut", &mut std::io::stdout());
    Ok(())
}
