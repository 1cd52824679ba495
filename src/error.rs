//! Error handling for scaffold-tree.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while building a template tree.
///
/// Unknown placeholder names are deliberately absent: a `{{ name }}` key with no
/// matching option keeps its literal text instead of failing the build.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Template directory does not exist: {template_dir}.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Path is not valid UTF-8: {path}.")]
    PathEncodingError { path: String },

    /// A path is used both as a file and as a directory
    #[error("Structure conflict at '{path}': {reason}.")]
    StructureConflictError { path: String, reason: String },

    /// Two sibling keys end up with the same name after renaming
    #[error("Name collision: '{first}' and '{second}' both resolve to '{name}'.")]
    NameCollisionError { name: String, first: String, second: String },

    #[error("Name '{original}' is empty once the template marker is removed.")]
    EmptyNameError { original: String },

    /// Represents errors in processing ignore files
    #[error("Ignore file error: {0}.")]
    IgnoreError(String),

    /// Represents errors that occur during options parsing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors raised while substituting template content
    #[error("Template error: {0}.")]
    TemplateError(String),
}

/// Convenience type alias for Results with scaffold-tree's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;
