//! In-memory project structure: directories map names to nodes, files are leaves
//! pairing their content with a write policy.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::template::Template;

/// How the host treats an existing file at the leaf's location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Write the file whether or not it already exists
    #[default]
    Create,
    /// Keep an existing file untouched
    NoOverwrite,
}

/// Content computed from the options when the host writes the file.
#[derive(Clone)]
pub struct GeneratedContent(Arc<dyn Fn(&Options) -> String + Send + Sync>);

impl GeneratedContent {
    pub fn new<F>(generate: F) -> Self
    where
        F: Fn(&Options) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(generate))
    }

    pub fn generate(&self, options: &Options) -> String {
        (self.0)(options)
    }
}

impl fmt::Debug for GeneratedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GeneratedContent(..)")
    }
}

impl PartialEq for GeneratedContent {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    /// Static template text
    Template(Template),
    /// Content produced by a function of the options
    Generated(GeneratedContent),
}

impl Serialize for FileContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FileContent::Template(template) => template.serialize(serializer),
            FileContent::Generated(_) => serializer.serialize_none(),
        }
    }
}

/// A file of the generated project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaf {
    pub content: FileContent,
    pub policy: WritePolicy,
}

impl Leaf {
    pub fn new(content: FileContent, policy: WritePolicy) -> Self {
        Self { content, policy }
    }

    pub fn from_template(template: Template, policy: WritePolicy) -> Self {
        Self::new(FileContent::Template(template), policy)
    }

    pub fn generated<F>(generate: F, policy: WritePolicy) -> Self
    where
        F: Fn(&Options) -> String + Send + Sync + 'static,
    {
        Self::new(FileContent::Generated(GeneratedContent::new(generate)), policy)
    }

    pub fn as_template(&self) -> Option<&Template> {
        match &self.content {
            FileContent::Template(template) => Some(template),
            FileContent::Generated(_) => None,
        }
    }

    /// Proposed file text before variable substitution.
    ///
    /// Template leaves yield their raw text, generated leaves are evaluated.
    pub fn contents(&self, options: &Options) -> String {
        match &self.content {
            FileContent::Template(template) => template.as_str().to_string(),
            FileContent::Generated(generated) => generated.generate(options),
        }
    }

    /// Final file text with every `$name` variable substituted.
    pub fn render(&self, options: &Options) -> Result<String> {
        match &self.content {
            FileContent::Template(template) => template.substitute(options),
            FileContent::Generated(generated) => Ok(generated.generate(options)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Dir(Tree),
    File(Leaf),
}

impl Node {
    pub fn as_dir(&self) -> Option<&Tree> {
        match self {
            Node::Dir(tree) => Some(tree),
            Node::File(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::File(leaf) => Some(leaf),
            Node::Dir(_) => None,
        }
    }
}

/// Directory level of the structure. Key order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tree(IndexMap<String, Node>);

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, node: Node) -> Option<Node> {
        self.0.insert(key.into(), node)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.0.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Child directory `key`, created empty when missing.
    ///
    /// Returns `None` when `key` already holds a file.
    pub fn dir_entry(&mut self, key: &str) -> Option<&mut Tree> {
        let node = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| Node::Dir(Tree::new()));
        match node {
            Node::Dir(tree) => Some(tree),
            Node::File(_) => None,
        }
    }

    /// Looks up a node by `/`-separated path.
    pub fn get_path(&self, path: &str) -> Option<&Node> {
        let mut parts = path.split('/').filter(|p| !p.is_empty()).peekable();
        let mut current = self;
        while let Some(part) = parts.next() {
            let node = current.0.get(part)?;
            if parts.peek().is_none() {
                return Some(node);
            }
            match node {
                Node::Dir(tree) => current = tree,
                Node::File(_) => return None,
            }
        }
        None
    }

    pub fn leaf_at(&self, path: &str) -> Option<&Leaf> {
        self.get_path(path).and_then(Node::as_leaf)
    }

    /// Every leaf with its `/`-joined path.
    pub fn leaves(&self) -> Vec<(String, &Leaf)> {
        let mut found = Vec::new();
        self.collect_leaves("", &mut found);
        found
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, found: &mut Vec<(String, &'a Leaf)>) {
        for (key, node) in &self.0 {
            let path = if prefix.is_empty() { key.clone() } else { format!("{}/{}", prefix, key) };
            match node {
                Node::Dir(tree) => tree.collect_leaves(&path, found),
                Node::File(leaf) => found.push((path, leaf)),
            }
        }
    }

    /// Rebuilds the tree with every key passed through `rename`.
    ///
    /// Children are renamed before their parent. Two sibling keys mapping to the
    /// same name are rejected.
    pub fn rename_keys<F>(&self, rename: &F) -> Result<Tree>
    where
        F: Fn(&str) -> Result<String>,
    {
        let mut renamed = IndexMap::with_capacity(self.0.len());
        let mut origins: HashMap<String, &str> = HashMap::with_capacity(self.0.len());

        for (key, node) in &self.0 {
            let node = match node {
                Node::Dir(tree) => Node::Dir(tree.rename_keys(rename)?),
                Node::File(leaf) => Node::File(leaf.clone()),
            };
            let new_key = rename(key)?;
            if let Some(first) = origins.insert(new_key.clone(), key.as_str()) {
                return Err(Error::NameCollisionError {
                    name: new_key,
                    first: first.to_string(),
                    second: key.clone(),
                });
            }
            renamed.insert(new_key, node);
        }

        Ok(Tree(renamed))
    }

    /// Merges `other` over `self`.
    ///
    /// Directories present on both sides are merged recursively; otherwise the
    /// node from `other` replaces the existing one.
    pub fn merge(mut self, other: Tree) -> Tree {
        for (key, incoming) in other.0 {
            let merged = match (self.0.get_mut(&key), incoming) {
                (Some(Node::Dir(existing)), Node::Dir(incoming)) => {
                    Node::Dir(std::mem::take(existing).merge(incoming))
                }
                (_, incoming) => incoming,
            };
            self.0.insert(key, merged);
        }
        self
    }
}

impl FromIterator<(String, Node)> for Tree {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
