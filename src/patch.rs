//! Narrow, regex-anchored text substitution
//!
//! Target files are hand-maintained, so they are never parsed structurally.
//! Each field is located with its own pattern and only the matched text is
//! replaced; every other byte of the file is left as it was.

use regex::{NoExpand, Regex};

/// A single field substitution: pattern, extractor and replacer
#[derive(Debug, Clone)]
pub struct TextPatch {
    field: String,
    regex: Regex,
}

impl TextPatch {
    /// Creates a patch for `field`. The first capture group of `pattern`
    /// is the field value.
    pub fn new(field: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            field: field.into(),
            regex: Regex::new(pattern)?,
        })
    }

    /// Name of the patched field, used in error messages
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the value captured by the first match
    pub fn extract<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.regex
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Replaces every match with `replacement` taken literally.
    /// Returns `None` when the pattern does not occur.
    pub fn replace(&self, content: &str, replacement: &str) -> Option<String> {
        if !self.regex.is_match(content) {
            return None;
        }
        Some(
            self.regex
                .replace_all(content, NoExpand(replacement))
                .into_owned(),
        )
    }
}
