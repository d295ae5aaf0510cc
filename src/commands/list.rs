//! List command - Print all shortcuts

use anyhow::Result;

use crate::commands::common::shortcut_service;
use crate::config::Config;

/// Print every shortcut as `name: command`, one per line, in storage
/// order. An empty table prints nothing. Output goes to stdout so it can
/// be piped.
///
/// # Errors
/// Returns an error if the store cannot be read
pub fn cmd_list() -> Result<()> {
    let config = Config::load()?;
    let service = shortcut_service(&config)?;

    for (name, command) in service.list()? {
        println!("{name}: {command}");
    }
    Ok(())
}
