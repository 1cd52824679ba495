//! Ignore pattern handling for template directories.
//! Paths listed in `.scaffoldignore` are left out of the collected template set,
//! similar to .gitignore functionality.

use crate::constants::IGNORE_FILE;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, io, path::Path};

/// Reads an ignore file and compiles its patterns into a glob set.
///
/// # Arguments
/// * `ignore_path` - Path to the ignore file
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Notes
/// - If the file doesn't exist, returns an empty GlobSet
/// - Any other read failure is returned as an IoError
/// - Blank lines and lines starting with `#` are skipped
/// - Invalid patterns will result in an IgnoreError
///
/// # Example
/// ```ignore
/// # Contents of .scaffoldignore:
/// drafts/**
/// **/*.bak
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let ignore_path = ignore_path.as_ref();
    let mut builder = GlobSetBuilder::new();

    match read_to_string(ignore_path) {
        Ok(contents) => {
            for line in contents.lines().map(str::trim) {
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                builder.add(Glob::new(line).map_err(|e| {
                    Error::IgnoreError(format!("{} loading failed: {}", IGNORE_FILE, e))
                })?);
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist", ignore_path.display());
        }
        Err(e) => return Err(Error::IoError(e)),
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("{} loading failed: {}", IGNORE_FILE, e)))
}
