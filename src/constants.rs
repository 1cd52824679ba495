//! Common constants used throughout scaffold-tree.

/// Substring that marks a file as a template source
pub const TEMPLATE_MARKER: &str = "template";

/// Marker spellings removed from names, applied in this order
pub const MARKER_PATTERNS: [&str; 3] = ["template_", "template.", "template"];

/// Ignore file read from the template root
pub const IGNORE_FILE: &str = ".scaffoldignore";

/// Supported options file names
pub const OPTIONS_FILES: [&str; 3] = ["scaffold.json", "scaffold.yml", "scaffold.yaml"];
