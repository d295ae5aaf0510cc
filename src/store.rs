//! Persisted shortcut table
//!
//! The table lives in a single JSON document of the shape
//! `{"shortcuts": {name: command}}`. Every operation reads the whole file
//! and every mutation rewrites it in full; there is no locking and no
//! atomic-write guarantee, which is acceptable for a single-invocation CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk shape of the shortcut table
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Shortcuts {
    /// Mapping from shortcut name to the literal shell command text
    #[serde(default)]
    pub shortcuts: BTreeMap<String, String>,
}

/// File-backed store for the shortcut table
#[derive(Debug, Clone)]
pub struct ShortcutStore {
    path: PathBuf,
}

impl ShortcutStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the shortcut table. A missing file yields an empty table; a
    /// file without the `shortcuts` key deserializes as empty and is
    /// rewritten in full on the next mutation.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load(&self) -> Result<Shortcuts> {
        if !self.path.exists() {
            return Ok(Shortcuts::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read shortcut file: {}", self.path.display()))?;
        let table: Shortcuts = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse shortcut file: {}", self.path.display()))?;
        Ok(table)
    }

    /// Overwrite the shortcut file in full, pretty-printed
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written
    pub fn save(&self, table: &Shortcuts) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create shortcut directory: {}", parent.display())
            })?;
        }

        let mut content = serde_json::to_string_pretty(table)?;
        content.push('\n');
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write shortcut file: {}", self.path.display()))?;
        Ok(())
    }

    /// First-run initialization: persist an empty table if the file is
    /// absent, so the `shortcuts` key always exists after the first run.
    /// An existing file is validated by loading it.
    ///
    /// # Errors
    /// Returns an error if an existing file is malformed or the default
    /// table cannot be written
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            self.load()?;
            return Ok(());
        }

        self.save(&Shortcuts::default())
    }
}
