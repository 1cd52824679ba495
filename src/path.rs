use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// A file location relative to the template root, split into segments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplatePath(Vec<String>);

impl TemplatePath {
    /// Builds a path from already split segments. Returns `None` when empty.
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self(segments))
        }
    }

    /// Splits a relative filesystem path into UTF-8 segments.
    pub fn from_relative<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => {
                    let part = part.to_str().ok_or_else(|| Error::PathEncodingError {
                        path: path.display().to_string(),
                    })?;
                    segments.push(part.to_string());
                }
                Component::CurDir => {}
                _ => {
                    return Err(Error::StructureConflictError {
                        path: path.display().to_string(),
                        reason: "template paths must be relative to the template root"
                            .to_string(),
                    })
                }
            }
        }

        Self::from_segments(segments).ok_or_else(|| Error::StructureConflictError {
            path: path.display().to_string(),
            reason: "empty template path".to_string(),
        })
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn file_name(&self) -> &str {
        // never empty, see constructors
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Path on disk below `root`.
    pub fn to_path_buf<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        self.0.iter().fold(root.as_ref().to_path_buf(), |acc, part| acc.join(part))
    }
}

impl fmt::Display for TemplatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_relative_splits_segments() {
        let path = TemplatePath::from_relative("src/{{ package }}/__init__.template.py").unwrap();
        assert_eq!(path.segments(), ["src", "{{ package }}", "__init__.template.py"]);
        assert_eq!(path.file_name(), "__init__.template.py");
        assert_eq!(path.to_string(), "src/{{ package }}/__init__.template.py");
    }

    #[test]
    fn test_from_relative_rejects_parent_dir() {
        assert!(TemplatePath::from_relative("../template.md").is_err());
        assert!(TemplatePath::from_relative("").is_err());
    }
}
