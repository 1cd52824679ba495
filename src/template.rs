//! File content templates using `$name` substitution variables.
//!
//! Recognized syntax:
//! - `$name` and `${name}` are replaced by the option `name` (ASCII identifiers only)
//! - `$$` is an escaped `$`
//! - any other `$` is malformed and only reported at substitution time

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::options::Options;

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\$(?:(?P<escaped>\$)|(?P<named>(?-u:[_a-z][_a-z0-9]*))|\{(?P<braced>(?-u:[_a-z][_a-z0-9]*))\}|(?P<invalid>))",
    )
    .expect("placeholder pattern is valid")
});

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Template text carried by a leaf until the host renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new<S: Into<String>>(source: S) -> Self {
        Self { source: source.into() }
    }

    /// Reads a template file with its line endings normalized.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref()).map_err(Error::IoError)?;
        Ok(Self::new(normalize_line_endings(&data)))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Distinct variable names referenced by the template, in order of appearance.
    pub fn identifiers(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for caps in PLACEHOLDER_PATTERN.captures_iter(&self.source) {
            if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
                if !names.iter().any(|n| n == name.as_str()) {
                    names.push(name.as_str().to_string());
                }
            }
        }
        names
    }

    /// Substitutes every variable, failing on unknown names or a stray `$`.
    pub fn substitute(&self, options: &Options) -> Result<String> {
        let mut rendered = String::with_capacity(self.source.len());
        let mut last = 0;

        for caps in PLACEHOLDER_PATTERN.captures_iter(&self.source) {
            let Some(whole) = caps.get(0) else { continue };
            rendered.push_str(&self.source[last..whole.start()]);
            last = whole.end();

            if caps.name("escaped").is_some() {
                rendered.push('$');
            } else if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
                let value = options.get(name.as_str()).ok_or_else(|| {
                    Error::TemplateError(format!("missing value for '{}'", name.as_str()))
                })?;
                rendered.push_str(value);
            } else {
                let (line, col) = self.position(whole.start());
                return Err(Error::TemplateError(format!(
                    "invalid placeholder at line {}, col {}",
                    line, col
                )));
            }
        }

        rendered.push_str(&self.source[last..]);
        Ok(rendered)
    }

    /// Like [`Template::substitute`], but leaves unknown or malformed placeholders verbatim.
    pub fn safe_substitute(&self, options: &Options) -> String {
        PLACEHOLDER_PATTERN
            .replace_all(&self.source, |caps: &Captures| {
                if caps.name("escaped").is_some() {
                    return "$".to_string();
                }
                caps.name("named")
                    .or_else(|| caps.name("braced"))
                    .and_then(|name| options.get(name.as_str()))
                    .map(str::to_string)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    // 1-based line and column of a byte offset
    fn position(&self, offset: usize) -> (usize, usize) {
        let before = &self.source[..offset];
        let line = before.matches('\n').count() + 1;
        let col = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
        (line, col)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}
