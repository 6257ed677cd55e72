//! Output directory layout.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Subdirectories every build writes into.
pub const OUTPUT_SUBDIRS: [&str; 4] = ["css", "js", "assets", "fonts"];

/// Creates the output root and its fixed subdirectories.
///
/// Existing directories are left untouched, so calling this on a previous
/// build's output is a no-op.
///
/// # Errors
///
/// Returns error if a directory cannot be created, or a regular file
/// occupies one of the required paths.
pub fn init_output_dirs(output: &Path) -> Result<()> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    for sub in OUTPUT_SUBDIRS {
        let dir = output.join(sub);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    Ok(())
}
