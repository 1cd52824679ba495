//! Discovery of template files below a template root.

use globset::GlobSet;
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

use crate::constants::TEMPLATE_MARKER;
use crate::error::{Error, Result};
use crate::path::TemplatePath;

/// Returns true when a file name carries the template marker anywhere.
pub fn is_template_file_name(file_name: &str) -> bool {
    file_name.contains(TEMPLATE_MARKER)
}

/// Collects every template file below `template_root`.
///
/// Only regular files (or symlinks pointing at one) whose final segment contains
/// the template marker are returned, relative to `template_root`. Paths matched
/// by `ignored` are skipped.
///
/// # Errors
/// * `Error::TemplateDoesNotExistsError` if the root is missing or not a directory
/// * `Error::IoError` if traversal fails
/// * `Error::PathEncodingError` for non UTF-8 names
pub fn collect_template_paths<P: AsRef<Path>>(
    template_root: P,
    ignored: &GlobSet,
) -> Result<BTreeSet<TemplatePath>> {
    let template_root = template_root.as_ref();
    if !template_root.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: template_root.display().to_string(),
        });
    }

    let mut paths = BTreeSet::new();
    for entry in WalkDir::new(template_root).min_depth(1) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.path().is_file() || !is_template_file_name(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let relative_path = entry.path().strip_prefix(template_root).map_err(|e| {
            Error::StructureConflictError {
                path: entry.path().display().to_string(),
                reason: e.to_string(),
            }
        })?;
        let template_path = TemplatePath::from_relative(relative_path)?;

        if ignored.is_match(template_path.to_string()) {
            debug!("Skipping '{}' listed in the ignore file", template_path);
            continue;
        }

        debug!("Found template file: {}", template_path);
        paths.insert(template_path);
    }

    Ok(paths)
}
