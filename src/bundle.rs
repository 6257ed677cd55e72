//! Source concatenation.

use anyhow::{Context, Result};
use std::{fs, io::ErrorKind, path::Path};

/// Concatenated sources with a record of what went in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    pub text: String,
    /// Sources found on disk, in configured order.
    pub included: Vec<String>,
    /// Sources configured but absent on disk.
    pub skipped: Vec<String>,
}

impl Bundle {
    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }
}

/// Concatenates `files` (relative to `base`) in list order.
///
/// Each present file contributes a `/* <path> */` provenance line, its
/// content and a blank-line separator. Missing files are skipped; the list
/// is neither reordered nor deduplicated.
///
/// # Errors
///
/// Returns error if a file exists but cannot be read.
pub fn bundle(base: &Path, files: &[String]) -> Result<Bundle> {
    let mut out = Bundle::default();

    for rel in files {
        let path = base.join(rel);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                out.skipped.push(rel.clone());
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        out.text.push_str(&format!("/* {} */\n{}\n\n", rel, content));
        out.included.push(rel.clone());
    }

    Ok(out)
}
