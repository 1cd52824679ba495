//! Option mapping handed to the tree builder.
//! Options can be built in code or loaded from `scaffold.json`, `scaffold.yml`
//! or `scaffold.yaml`.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::path::Path;

/// Named option values used to resolve `{{ name }}` keys and `$name` variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Options(IndexMap<String, String>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sets an option, returning the previous value if any.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<IndexMap<String, String>> for Options {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Loads the first options file found in `dir`.
///
/// # Arguments
/// * `dir` - Directory containing the options file
/// * `options_files` - Candidate file names, tried in order
///
/// # Errors
/// * `Error::ConfigError` if none of the files exist or the content is invalid
pub fn load_options<P: AsRef<Path>>(dir: P, options_files: &[&str]) -> Result<Options> {
    for file in options_files {
        let options_path = dir.as_ref().join(file);
        if options_path.exists() {
            debug!("Loading options from {}", options_path.display());
            let content = std::fs::read_to_string(&options_path).map_err(Error::IoError)?;
            return parse_options(&content);
        }
    }

    Err(Error::ConfigError(format!(
        "No options file found (tried: {})",
        options_files.join(", ")
    )))
}

/// Parses options from JSON, falling back to YAML.
///
/// Strings, booleans and numbers are accepted and stored as strings.
pub fn parse_options(content: &str) -> Result<Options> {
    let raw_value: IndexMap<String, serde_json::Value> = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid options format: {}", e)))?,
    };

    raw_value
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                other => {
                    return Err(Error::ConfigError(format!(
                        "Option '{}' must be a string, boolean or number, got {}",
                        key, other
                    )))
                }
            };
            Ok((key, value))
        })
        .collect()
}
