//! Recognition of `{{ name }}` placeholder segments.

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Result of matching a single path segment against the placeholder syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'a> {
    /// Plain segment, used as is
    NotAPlaceholder,
    /// Braces with nothing but whitespace inside, e.g. `{{ }}`
    Unnamed,
    /// `{{ name }}`, carrying the trimmed name
    Named(&'a str),
}

impl<'a> Placeholder<'a> {
    /// Matches `segment` against `{{ <name> }}`.
    ///
    /// The whole segment must be wrapped: `pkg-{{ name }}` is not a placeholder.
    pub fn parse(segment: &'a str) -> Self {
        let inner = match segment
            .strip_prefix(OPEN)
            .and_then(|rest| rest.strip_suffix(CLOSE))
        {
            Some(inner) => inner,
            None => return Placeholder::NotAPlaceholder,
        };

        match inner.trim() {
            "" => Placeholder::Unnamed,
            name => Placeholder::Named(name),
        }
    }

    pub fn name(&self) -> Option<&'a str> {
        match self {
            Placeholder::Named(name) => Some(*name),
            _ => None,
        }
    }
}
