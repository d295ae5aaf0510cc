//! Alias line handling for shell startup files
//!
//! Alias entries use the exact literal form `alias NAME='COMMAND'`.
//! Single quotes inside the command cannot be represented by this quoting
//! scheme; callers reject such commands before a line is ever rendered.

/// Render the alias line persisted to the shell startup file
#[must_use]
pub fn alias_line(name: &str, command: &str) -> String {
    format!("alias {name}='{command}'")
}

/// Whether a startup-file line defines an alias for `name`.
/// Matching ignores surrounding whitespace, so indented lines count too.
#[must_use]
pub fn is_alias_for(line: &str, name: &str) -> bool {
    line.trim()
        .strip_prefix("alias ")
        .and_then(|rest| rest.strip_prefix(name))
        .is_some_and(|rest| rest.starts_with('='))
}
