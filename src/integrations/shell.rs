//! Shell startup file synchronization
//!
//! Alias lines are mirrored into a single configured startup file
//! (`~/.zshrc` by default). Updates are load-transform-write over the
//! whole file; the file is shared mutable state with no locking.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::alias::{alias_line, is_alias_for};

/// Shell sync interface for keeping the startup file in step with the store
pub trait ShellSync {
    /// Ensure the startup file holds exactly one alias line for `name`,
    /// carrying `command`
    fn sync_alias(&self, name: &str, command: &str) -> Result<()>;

    /// Drop every alias line for `name` from the startup file
    fn remove_alias(&self, name: &str) -> Result<()>;

    /// Best-effort re-source of the startup file
    fn resource(&self) -> Result<()>;
}

/// Real shell profile implementation backed by a startup file on disk
#[derive(Debug, Clone)]
pub struct ShellProfile {
    path: PathBuf,
    resource_enabled: bool,
}

impl ShellProfile {
    #[must_use]
    pub const fn new(path: PathBuf, resource_enabled: bool) -> Self {
        Self {
            path,
            resource_enabled,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the throwaway re-source script. Carries the process id so
    /// concurrent invocations do not delete each other's script.
    fn resource_script_path() -> PathBuf {
        std::env::temp_dir().join(format!("sortcut-resource-{}.sh", std::process::id()))
    }
}

impl ShellSync for ShellProfile {
    /// Replace any existing alias line for `name`, then append the new
    /// one. The startup file keeps at most one alias line per name.
    fn sync_alias(&self, name: &str, command: &str) -> Result<()> {
        self.remove_alias(name)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open shell profile: {}", self.path.display()))?;
        writeln!(file, "{}", alias_line(name, command))
            .with_context(|| format!("Failed to write shell profile: {}", self.path.display()))?;
        Ok(())
    }

    /// Keep every line that does not define an alias for `name`, removing
    /// duplicates along with the original. No-op when the file is absent.
    fn remove_alias(&self, name: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read shell profile: {}", self.path.display()))?;

        let kept: Vec<&str> = content
            .lines()
            .filter(|line| !is_alias_for(line, name))
            .collect();
        let mut rewritten = kept.join("\n");
        if !rewritten.is_empty() {
            rewritten.push('\n');
        }

        std::fs::write(&self.path, rewritten)
            .with_context(|| format!("Failed to write shell profile: {}", self.path.display()))?;
        Ok(())
    }

    /// Write a throwaway script that sources the startup file through the
    /// user's shell, run it, then delete it. The script runs in a child
    /// process and cannot alter the invoking shell's environment; its exit
    /// status is discarded.
    fn resource(&self) -> Result<()> {
        if !self.resource_enabled {
            return Ok(());
        }

        let script = Self::resource_script_path();
        let body = format!(
            "#!/bin/sh\nexec \"${{SHELL:-/bin/sh}}\" -c '. {}'\n",
            self.path.display()
        );
        std::fs::write(&script, body)
            .with_context(|| format!("Failed to write re-source script: {}", script.display()))?;

        let _ = Command::new("/bin/sh").arg(&script).status();

        std::fs::remove_file(&script)
            .with_context(|| format!("Failed to remove re-source script: {}", script.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_in(dir: &tempfile::TempDir) -> ShellProfile {
        ShellProfile::new(dir.path().join(".zshrc"), false)
    }

    fn read(profile: &ShellProfile) -> String {
        std::fs::read_to_string(profile.path()).unwrap()
    }

    #[test]
    fn test_sync_alias_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_in(&dir);

        profile.sync_alias("gs", "git status").unwrap();

        assert_eq!(read(&profile), "alias gs='git status'\n");
    }

    #[test]
    fn test_sync_alias_appends_after_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_in(&dir);
        std::fs::write(profile.path(), "export EDITOR=vim\n").unwrap();

        profile.sync_alias("gs", "git status").unwrap();

        assert_eq!(read(&profile), "export EDITOR=vim\nalias gs='git status'\n");
    }

    #[test]
    fn test_sync_alias_replaces_previous_line() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_in(&dir);

        profile.sync_alias("gs", "git status").unwrap();
        profile.sync_alias("gs", "git status -sb").unwrap();

        let content = read(&profile);
        assert_eq!(content.matches("alias gs=").count(), 1);
        assert!(content.contains("alias gs='git status -sb'"));
    }

    #[test]
    fn test_remove_alias_drops_all_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_in(&dir);
        std::fs::write(
            profile.path(),
            "alias gs='git status'\nexport EDITOR=vim\nalias gs='git status -sb'\n",
        )
        .unwrap();

        profile.remove_alias("gs").unwrap();

        assert_eq!(read(&profile), "export EDITOR=vim\n");
    }

    #[test]
    fn test_remove_alias_ignores_other_names() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_in(&dir);
        std::fs::write(profile.path(), "alias gst='git status'\n").unwrap();

        profile.remove_alias("gs").unwrap();

        assert_eq!(read(&profile), "alias gst='git status'\n");
    }

    #[test]
    fn test_remove_alias_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_in(&dir);

        profile.remove_alias("gs").unwrap();

        assert!(!profile.path().exists());
    }

    #[test]
    fn test_remove_alias_handles_indented_lines() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_in(&dir);
        std::fs::write(profile.path(), "  alias gs='git status'\n").unwrap();

        profile.remove_alias("gs").unwrap();

        assert_eq!(read(&profile), "");
    }

    #[test]
    #[serial_test::serial(resource_script)]
    fn test_resource_disabled_spawns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let profile = profile_in(&dir);

        profile.resource().unwrap();

        assert!(!ShellProfile::resource_script_path().exists());
    }

    #[test]
    #[serial_test::serial(resource_script)]
    fn test_resource_cleans_up_script() {
        let dir = tempfile::tempdir().unwrap();
        let profile = ShellProfile::new(dir.path().join(".zshrc"), true);
        std::fs::write(profile.path(), "alias gs='git status'\n").unwrap();

        profile.resource().unwrap();

        assert!(!ShellProfile::resource_script_path().exists());
    }
}
