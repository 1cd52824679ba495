//! scaffold-tree turns a directory of templates into a project structure.
//! File and directory names carry the `template` marker and `{{ name }}`
//! placeholders; file content keeps its `$name` variables for the scaffolding
//! host to substitute when it writes the project.

/// Builds nested placeholder trees from flat template paths
pub mod assembler;

/// Pipeline orchestration and builder configuration
pub mod builder;

/// Template file discovery below a template root
pub mod collector;

/// Common constants: template marker, ignore and options file names
pub mod constants;

/// Error types and handling for scaffold-tree
pub mod error;

/// Loading of template content into leaves
pub mod filler;

/// File ignore patterns
/// Processes .scaffoldignore files to exclude specific paths
pub mod ignore;

/// Template marker removal from names
pub mod normalizer;

/// Option mapping and options file loading
/// Supports JSON and YAML formats (scaffold.json, scaffold.yml, scaffold.yaml)
pub mod options;

pub mod path;

/// `{{ name }}` segment matching
pub mod placeholder;

/// Placeholder key renaming
pub mod substitutor;

/// `$name` template content
pub mod template;

/// Project structure types
pub mod tree;

pub use builder::{build_tree_from_templates, TreeBuilder};
pub use options::Options;
pub use template::Template;
pub use tree::{FileContent, GeneratedContent, Leaf, Node, Tree, WritePolicy};
