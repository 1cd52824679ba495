//! Removal of the template marker from file and directory names.

use crate::constants::MARKER_PATTERNS;
use crate::error::{Error, Result};
use crate::tree::Tree;

/// Removes every `template_`, `template.` and `template` from `name`, in that order.
///
/// The removal is not limited to the file extension: `my_template_pkg` becomes `my_pkg`.
pub fn strip_template_marker(name: &str) -> String {
    MARKER_PATTERNS
        .iter()
        .fold(name.to_string(), |acc, pattern| acc.replace(pattern, ""))
}

/// Strips the template marker from every key of `tree` at every depth.
///
/// # Errors
/// * `Error::EmptyNameError` if a name consists of the marker only
/// * `Error::NameCollisionError` if two siblings end up with the same name
pub fn remove_template_markers(tree: &Tree) -> Result<Tree> {
    tree.rename_keys(&|key: &str| -> Result<String> {
        let stripped = strip_template_marker(key);
        if stripped.is_empty() {
            return Err(Error::EmptyNameError { original: key.to_string() });
        }
        Ok(stripped)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_template_marker() {
        assert_eq!(strip_template_marker("template.Dockerfile"), "Dockerfile");
        assert_eq!(strip_template_marker("__init__.template.py"), "__init__.py");
        assert_eq!(strip_template_marker("TEST-ROOT-DIR.template.md"), "TEST-ROOT-DIR.md");
        assert_eq!(strip_template_marker("template_setup.cfg"), "setup.cfg");
        assert_eq!(strip_template_marker("README.md"), "README.md");
    }

    #[test]
    fn test_strip_is_global() {
        assert_eq!(strip_template_marker("template.template_x"), "x");
        assert_eq!(strip_template_marker("my_template_pkg"), "my_pkg");
        assert_eq!(strip_template_marker("templates"), "s");
        assert_eq!(strip_template_marker("templating"), "templating");
        assert_eq!(strip_template_marker("x.templatecfg"), "x.cfg");
        assert_eq!(strip_template_marker("template.gitignore"), "gitignore");
    }
}
