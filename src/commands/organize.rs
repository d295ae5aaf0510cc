//! Organize command - Sort files into subfolders by extension

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::color;
use crate::domain::extension::extension_of;

/// Sort a directory's immediate files into subfolders named after their
/// extension
///
/// A target that is not an existing directory is reported and skipped
/// (exit code stays zero). Subdirectories and symlinks are left in place;
/// only regular files move. Entries are visited in `read_dir` order,
/// which is unspecified.
///
/// # Errors
/// Returns an error if:
/// - The directory cannot be listed
/// - A destination subfolder cannot be created
/// - A file cannot be moved
pub fn cmd_organize(directory: &Path, color_mode: color::ColorMode) -> Result<()> {
    if !directory.is_dir() {
        eprintln!(
            "{}",
            color::error(
                color_mode,
                format!("{} is not a valid directory", directory.display())
            )
        );
        return Ok(());
    }

    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to list directory: {}", directory.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", directory.display()))?;

        // read_dir file types do not follow symlinks, so links and
        // subdirectories both fall through here
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to inspect {}", entry.path().display()))?;
        if !file_type.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            eprintln!(
                "{}",
                color::warn(
                    color_mode,
                    format!(
                        "Skipping non-UTF-8 filename: {}",
                        file_name.to_string_lossy()
                    )
                )
            );
            continue;
        };

        let target_dir = directory.join(extension_of(name));
        fs::create_dir_all(&target_dir)
            .with_context(|| format!("Failed to create {}", target_dir.display()))?;

        move_file(&entry.path(), &target_dir.join(name))?;

        eprintln!(
            "{}",
            color::success(
                color_mode,
                format!("Moved: {name} -> {}", target_dir.display())
            )
        );
    }

    Ok(())
}

/// Move a file, overwriting any same-named file at the destination.
/// Falls back to copy-and-delete when rename fails, e.g. when source and
/// destination sit on different filesystems.
fn move_file(src: &Path, dest: &Path) -> Result<()> {
    if fs::rename(src, dest).is_ok() {
        return Ok(());
    }

    fs::copy(src, dest).with_context(|| {
        format!("Failed to move {} to {}", src.display(), dest.display())
    })?;
    fs::remove_file(src).with_context(|| format!("Failed to remove {}", src.display()))?;
    Ok(())
}
