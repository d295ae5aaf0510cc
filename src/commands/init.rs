//! Init command - Write the configuration file template

use anyhow::{Context, Result};

use crate::color;
use crate::config::Config;

/// Write the commented configuration template to the global config path
///
/// An existing file is left untouched unless `--force` is given.
///
/// # Errors
/// Returns an error if:
/// - The global config path cannot be determined
/// - The file cannot be written
pub fn cmd_init(force: bool, color_mode: color::ColorMode) -> Result<()> {
    let Some(path) = Config::global_config_path() else {
        anyhow::bail!(
            "Could not determine config path (HOME directory not found). \
             Please set the HOME environment variable or XDG_CONFIG_HOME."
        );
    };

    if path.exists() && !force {
        eprintln!(
            "{}",
            color::warn(
                color_mode,
                format!("Config already exists: {}", path.display())
            )
        );
        eprintln!("Use --force to overwrite");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    std::fs::write(&path, Config::template())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    eprintln!(
        "{}",
        color::success(color_mode, format!("Created config: {}", path.display()))
    );
    Ok(())
}
