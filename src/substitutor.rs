//! Renaming of `{{ name }}` keys to option values.

use log::debug;

use crate::error::Result;
use crate::options::Options;
use crate::placeholder::Placeholder;
use crate::tree::Tree;

/// Resolves a single key against the options.
///
/// Keys that are not placeholders, unnamed placeholders and names missing from
/// `options` come back unchanged.
pub fn substitute_key(key: &str, options: &Options) -> String {
    match Placeholder::parse(key) {
        Placeholder::Named(name) => match options.get(name) {
            Some(value) => value.to_string(),
            None => {
                debug!("No option named '{}', keeping '{}'", name, key);
                key.to_string()
            }
        },
        Placeholder::Unnamed => {
            debug!("Placeholder '{}' has no name, keeping it", key);
            key.to_string()
        }
        Placeholder::NotAPlaceholder => key.to_string(),
    }
}

/// Renames every placeholder key of `tree` at every depth.
///
/// Subtrees are rebuilt before their own key is renamed; leaves are carried over
/// untouched. Running it again on its output changes nothing unless an option
/// value is itself a placeholder.
pub fn substitute_placeholder_keys(tree: &Tree, options: &Options) -> Result<Tree> {
    tree.rename_keys(&|key: &str| -> Result<String> { Ok(substitute_key(key, options)) })
}
