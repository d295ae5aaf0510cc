use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Directory organizer and shell shortcut manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort files in a directory into subfolders by their extension
    Organize {
        /// The directory to organize
        directory: PathBuf,
    },
    /// Add a new command shortcut
    Add {
        /// Name of the shortcut
        name: String,
        /// The command to shortcut
        command: String,
    },
    /// Remove an existing command shortcut
    Remove {
        /// Name of the shortcut to remove
        name: String,
    },
    /// List all command shortcuts
    List,
    /// Execute a command shortcut
    Exec {
        /// Name of the shortcut to execute
        name: String,
    },
    /// Initialize the configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}
