//! Turns a flat set of template paths into a nested structure.

use log::trace;

use crate::error::{Error, Result};
use crate::path::TemplatePath;
use crate::tree::{Node, Tree};

/// Builds a nested tree from relative template paths.
///
/// Paths sharing a prefix share the corresponding directories. Every terminal
/// segment is an empty directory, a placeholder later replaced by a leaf.
///
/// # Errors
/// * `Error::StructureConflictError` if a path is also the directory of another path
pub fn assemble_tree<'a, I>(paths: I) -> Result<Tree>
where
    I: IntoIterator<Item = &'a TemplatePath>,
    I::IntoIter: Clone,
{
    let paths = paths.into_iter();
    let mut root = Tree::new();

    for path in paths.clone() {
        let mut current = &mut root;
        for part in path.segments() {
            current = current.dir_entry(part).ok_or_else(|| Error::StructureConflictError {
                path: path.to_string(),
                reason: format!("'{}' is not a directory", part),
            })?;
        }
        trace!("Placed '{}'", path);
    }

    // a placeholder that gained children was also used as a directory
    for path in paths {
        match node_at(&root, path) {
            Some(Node::Dir(placeholder)) if placeholder.is_empty() => {}
            _ => {
                return Err(Error::StructureConflictError {
                    path: path.to_string(),
                    reason: "file is also used as a directory".to_string(),
                })
            }
        }
    }

    Ok(root)
}

pub(crate) fn node_at<'t>(tree: &'t Tree, path: &TemplatePath) -> Option<&'t Node> {
    let (last, parents) = path.segments().split_last()?;
    let mut current = tree;
    for part in parents {
        current = current.get(part)?.as_dir()?;
    }
    current.get(last)
}
