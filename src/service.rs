//! Shortcut manager coordinating the store and shell synchronization

use anyhow::Result;

use crate::integrations::shell::ShellSync;
use crate::store::{ShortcutStore, Shortcuts};

/// Shortcut service over a store and a shell sync implementation
pub struct ShortcutService<S>
where
    S: ShellSync,
{
    store: ShortcutStore,
    shell: S,
}

impl<S> ShortcutService<S>
where
    S: ShellSync,
{
    /// Create a new shortcut service
    #[must_use]
    pub const fn new(store: ShortcutStore, shell: S) -> Self {
        Self { store, shell }
    }

    /// Create or overwrite a shortcut and sync the shell startup file.
    ///
    /// An existing shortcut with the same name is silently overwritten in
    /// both the store and the startup file.
    ///
    /// # Errors
    /// Returns an error if the command contains a single quote (the alias
    /// quoting scheme cannot represent it), or if the store or startup
    /// file cannot be updated
    pub fn add(&self, name: &str, command: &str) -> Result<()> {
        if command.contains('\'') {
            anyhow::bail!(
                "Shortcut command must not contain single quotes: {command}\n\
                 The alias line format alias NAME='COMMAND' cannot escape them."
            );
        }

        let mut table = self.store.load()?;
        table
            .shortcuts
            .insert(name.to_string(), command.to_string());
        self.store.save(&table)?;

        self.shell.sync_alias(name, command)?;
        self.shell.resource()?;
        Ok(())
    }

    /// Remove a shortcut. Returns whether the shortcut existed; a missing
    /// name is a normal outcome and leaves everything untouched.
    ///
    /// # Errors
    /// Returns an error if the store or startup file cannot be updated
    pub fn remove(&self, name: &str) -> Result<bool> {
        let mut table = self.store.load()?;
        if table.shortcuts.remove(name).is_none() {
            return Ok(false);
        }
        self.store.save(&table)?;

        self.shell.remove_alias(name)?;
        self.shell.resource()?;
        Ok(true)
    }

    /// Name/command pairs in storage order
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        let Shortcuts { shortcuts } = self.store.load()?;
        Ok(shortcuts.into_iter().collect())
    }

    /// Look up the command stored for `name`
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub fn command_for(&self, name: &str) -> Result<Option<String>> {
        let mut table = self.store.load()?;
        Ok(table.shortcuts.remove(name))
    }
}
