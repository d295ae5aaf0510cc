//! File extension sorting key

/// Sorting key for a filename: the substring after the last `.`.
///
/// A name without a dot keys on the whole filename, so `README` sorts
/// into a `README/` subfolder. A leading dot is not special: `.bashrc`
/// keys on `bashrc`.
#[must_use]
pub fn extension_of(filename: &str) -> &str {
    filename
        .rfind('.')
        .map_or(filename, |idx| &filename[idx + 1..])
}
