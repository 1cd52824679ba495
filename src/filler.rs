use log::debug;
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::TemplatePath;
use crate::template::Template;
use crate::tree::{Leaf, Node, Tree, WritePolicy};

/// Replaces the placeholder of every path with a leaf loaded from `template_root`.
///
/// Works on a copy, `tree` is left as it was. Each placeholder must be an empty
/// directory as produced by [`crate::assembler::assemble_tree`].
pub fn fill_leaves<'a, I, P>(
    paths: I,
    tree: &Tree,
    template_root: P,
    policy: WritePolicy,
) -> Result<Tree>
where
    I: IntoIterator<Item = &'a TemplatePath>,
    P: AsRef<Path>,
{
    let template_root = template_root.as_ref();
    let mut filled = tree.clone();

    for path in paths {
        let slot = placeholder_mut(&mut filled, path)?;
        let source = path.to_path_buf(template_root);
        debug!("Loading template {}", source.display());
        *slot = Node::File(Leaf::from_template(Template::from_file(&source)?, policy));
    }

    Ok(filled)
}

fn placeholder_mut<'t>(tree: &'t mut Tree, path: &TemplatePath) -> Result<&'t mut Node> {
    let conflict = |reason: &str| Error::StructureConflictError {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let (last, parents) = path
        .segments()
        .split_last()
        .ok_or_else(|| conflict("empty path"))?;

    let mut current = tree;
    for part in parents {
        current = match current.get_mut(part) {
            Some(Node::Dir(child)) => child,
            Some(Node::File(_)) => return Err(conflict("parent is a file")),
            None => return Err(conflict("path is missing from the structure")),
        };
    }

    let node = current
        .get_mut(last)
        .ok_or_else(|| conflict("path is missing from the structure"))?;
    let reason = match &*node {
        Node::Dir(placeholder) if placeholder.is_empty() => None,
        Node::Dir(_) => Some("file is also used as a directory"),
        Node::File(_) => Some("file was already filled"),
    };
    match reason {
        Some(reason) => Err(conflict(reason)),
        None => Ok(node),
    }
}
