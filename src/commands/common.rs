//! Shared wiring for command handlers

use anyhow::Result;

use crate::config::Config;
use crate::integrations::shell::ShellProfile;
use crate::service::ShortcutService;
use crate::store::ShortcutStore;

/// Build the shortcut service from the loaded configuration
///
/// # Errors
/// Returns an error if a configured path cannot be resolved
pub fn shortcut_service(config: &Config) -> Result<ShortcutService<ShellProfile>> {
    let store = ShortcutStore::new(config.store_path()?);
    let shell = ShellProfile::new(config.profile_path()?, config.shell.resource);
    Ok(ShortcutService::new(store, shell))
}
