//! Add command - Create or overwrite a shortcut and sync it to the shell

use anyhow::Result;

use crate::color;
use crate::commands::common::shortcut_service;
use crate::config::Config;

/// Create or overwrite a shortcut, persist it, and mirror it into the
/// shell startup file
///
/// # Errors
/// Returns an error if:
/// - The command contains a single quote
/// - The store or startup file cannot be updated
pub fn cmd_add(name: &str, command: &str, color_mode: color::ColorMode) -> Result<()> {
    let config = Config::load()?;
    let service = shortcut_service(&config)?;

    service.add(name, command)?;

    eprintln!(
        "{}",
        color::success(color_mode, format!("Shortcut added: {name} -> {command}"))
    );
    Ok(())
}
