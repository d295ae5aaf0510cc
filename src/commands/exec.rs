//! Exec command - Run a shortcut's stored command

use anyhow::{Context, Result};
use std::process::Command;

use crate::color;
use crate::commands::common::shortcut_service;
use crate::config::Config;

/// Run the stored command for `name` through the shell, inheriting the
/// tool's standard streams and waiting for completion. The child's exit
/// status is not surfaced. The stored string is run verbatim; it is
/// arbitrary shell text by design.
///
/// # Errors
/// Returns an error if:
/// - The store cannot be read
/// - The shell cannot be spawned
pub fn cmd_exec(name: &str, color_mode: color::ColorMode) -> Result<()> {
    let config = Config::load()?;
    let service = shortcut_service(&config)?;

    let Some(command) = service.command_for(name)? else {
        eprintln!(
            "{}",
            color::warn(color_mode, format!("No shortcut found for: {name}"))
        );
        return Ok(());
    };

    let _ = Command::new("sh")
        .args(["-c", &command])
        .status()
        .with_context(|| format!("Failed to execute shell for shortcut: {name}"))?;

    Ok(())
}
