//! Static asset copying.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Recursively copies `src` into `dest`, preserving relative structure.
///
/// Returns the number of files copied. A missing `src` copies nothing.
///
/// # Errors
///
/// Returns error if a directory cannot be listed or created, or a file
/// cannot be copied.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }

    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory {}", dest.display()))?;

    let mut copied = 0;
    let mut entries = fs::read_dir(src)
        .with_context(|| format!("Failed to list {}", src.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list {}", src.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let from = entry.path();
        let to = dest.join(entry.file_name());
        // Follows symlinks, so a linked directory is copied as a directory.
        if from.is_dir() {
            copied += copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to).with_context(|| {
                format!("Failed to copy {} to {}", from.display(), to.display())
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}
