//! Remove command - Delete a shortcut and its alias line

use anyhow::Result;

use crate::color;
use crate::commands::common::shortcut_service;
use crate::config::Config;

/// Delete a shortcut from the store and drop its alias line(s) from the
/// shell startup file. A missing name is a normal outcome, reported with
/// a message and no side effects.
///
/// # Errors
/// Returns an error if the store or startup file cannot be updated
pub fn cmd_remove(name: &str, color_mode: color::ColorMode) -> Result<()> {
    let config = Config::load()?;
    let service = shortcut_service(&config)?;

    if service.remove(name)? {
        eprintln!(
            "{}",
            color::success(color_mode, format!("Shortcut removed: {name}"))
        );
    } else {
        eprintln!(
            "{}",
            color::warn(color_mode, format!("No shortcut found for: {name}"))
        );
    }
    Ok(())
}
