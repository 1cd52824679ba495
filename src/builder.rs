//! Orchestration of the template tree pipeline.
//! Combines collection, assembly, filling, key substitution and marker removal
//! into the structure handed back to the scaffolding host.

use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::assembler::assemble_tree;
use crate::collector::collect_template_paths;
use crate::constants::IGNORE_FILE;
use crate::error::Result;
use crate::filler::fill_leaves;
use crate::ignore::parse_ignore_file;
use crate::normalizer::remove_template_markers;
use crate::options::Options;
use crate::substitutor::substitute_placeholder_keys;
use crate::tree::{Tree, WritePolicy};

/// Builds project structures from a template directory.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    template_root: PathBuf,
    ignore_file: Option<String>,
    policy: WritePolicy,
}

impl TreeBuilder {
    /// Creates a builder reading templates from `template_root`.
    ///
    /// Defaults: `.scaffoldignore` is honored and leaves use [`WritePolicy::Create`].
    pub fn new<P: Into<PathBuf>>(template_root: P) -> Self {
        Self {
            template_root: template_root.into(),
            ignore_file: Some(IGNORE_FILE.to_string()),
            policy: WritePolicy::default(),
        }
    }

    /// Reads ignore patterns from `name` inside the template root.
    pub fn ignore_file<S: Into<String>>(mut self, name: S) -> Self {
        self.ignore_file = Some(name.into());
        self
    }

    /// Collects every template file, ignore file or not.
    pub fn without_ignore_file(mut self) -> Self {
        self.ignore_file = None;
        self
    }

    pub fn write_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    /// Builds the structure for `options`.
    ///
    /// # Flow
    /// 1. Collects template files, minus ignored ones
    /// 2. Assembles them into a nested tree of placeholders
    /// 3. Loads every template into a leaf
    /// 4. Renames `{{ name }}` keys to option values
    /// 5. Strips the template marker from every name
    ///
    /// # Errors
    /// Filesystem failures, structure conflicts and name collisions are fatal.
    pub fn build(&self, options: &Options) -> Result<Tree> {
        debug!("Building structure from {}", self.template_root.display());

        let ignored = match &self.ignore_file {
            Some(name) => parse_ignore_file(self.template_root.join(name))?,
            None => globset::GlobSet::empty(),
        };

        let paths = collect_template_paths(&self.template_root, &ignored)?;
        debug!("Collected {} template files", paths.len());

        let placeholders = assemble_tree(&paths)?;
        let filled = fill_leaves(&paths, &placeholders, &self.template_root, self.policy)?;
        let substituted = substitute_placeholder_keys(&filled, options)?;
        let tree = remove_template_markers(&substituted)?;

        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string_pretty(&tree) {
                Ok(json) => trace!("Built structure:\n{}", json),
                Err(e) => trace!("Built structure could not be serialized: {}", e),
            }
        }

        Ok(tree)
    }

    /// Builds the structure and merges it over the host's `base` structure.
    ///
    /// Template files replace files of the same name in `base`.
    pub fn extend(&self, base: Tree, options: &Options) -> Result<Tree> {
        let files = self.build(options)?;
        Ok(base.merge(files))
    }
}

/// Builds the structure of `template_root` with default settings.
///
/// # Example
/// ```no_run
/// use scaffold_tree::{build_tree_from_templates, Options};
///
/// let options: Options = [("package", "eric-ext")].into_iter().collect();
/// let tree = build_tree_from_templates("templates", &options)?;
/// assert!(tree.leaf_at("src/eric-ext/__init__.py").is_some());
/// # Ok::<(), scaffold_tree::error::Error>(())
/// ```
pub fn build_tree_from_templates<P: AsRef<Path>>(template_root: P, options: &Options) -> Result<Tree> {
    TreeBuilder::new(template_root.as_ref()).build(options)
}
