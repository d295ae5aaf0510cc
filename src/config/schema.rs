//! Configuration schema and type definitions

use serde::{Deserialize, Serialize};

/// Configuration for sortcut
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Shortcut store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the persisted shortcut table.
    /// A leading `~` expands to the user's home directory.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "~/.config/sortcut/shortcuts.json".to_string()
}

/// Shell startup file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Startup file that receives alias lines.
    /// Not auto-detected from the running shell.
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Re-source the startup file after alias changes (best effort)
    #[serde(default = "default_resource")]
    pub resource: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            resource: default_resource(),
        }
    }
}

fn default_profile() -> String {
    "~/.zshrc".to_string()
}

const fn default_resource() -> bool {
    true
}

/// Template for the configuration file
const TEMPLATE: &str = r#"# sortcut configuration
# Location: ~/.config/sortcut/config.toml
#
# All keys are optional; the values below are the defaults.

[store]
# Path to the persisted shortcut table (JSON)
# A leading `~` expands to your home directory
path = "~/.config/sortcut/shortcuts.json"

[shell]
# Startup file that receives `alias NAME='COMMAND'` lines.
# Pick the rc file of the shell you actually use, e.g. "~/.bashrc".
profile = "~/.zshrc"

# Re-source the startup file after alias changes. This runs in a child
# process and cannot update an already-running interactive shell; restart
# your shell or source the file yourself to pick up new aliases.
resource = true
"#;

impl Config {
    /// Get the configuration file template
    #[must_use]
    pub const fn template() -> &'static str {
        TEMPLATE
    }
}
