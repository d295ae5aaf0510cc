//! Configuration loading logic

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::schema::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration with fallback
    ///
    /// Load priority:
    /// 1. Global config (`~/.config/sortcut/config.toml`)
    /// 2. Default config
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Get the global config path
    /// Respects `XDG_CONFIG_HOME` environment variable on all platforms.
    /// Fallback: `$HOME/.config/sortcut/config.toml`
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;

        Some(config_home.join("sortcut").join("config.toml"))
    }

    /// Resolved path to the persisted shortcut table
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn store_path(&self) -> Result<PathBuf> {
        expand_tilde(&self.store.path)
    }

    /// Resolved path to the shell startup file
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn profile_path(&self) -> Result<PathBuf> {
        expand_tilde(&self.shell.profile)
    }
}

/// Expand a leading `~` to the user's home directory
///
/// # Errors
/// Returns an error if the path starts with `~` and the home directory
/// cannot be determined
pub fn expand_tilde(path: &str) -> Result<PathBuf> {
    if path == "~" || path.starts_with("~/") {
        let home = dirs::home_dir().context(
            "Could not determine home directory. Please set the HOME environment variable.",
        )?;
        if path == "~" {
            return Ok(home);
        }
        return Ok(home.join(&path[2..]));
    }

    Ok(PathBuf::from(path))
}
