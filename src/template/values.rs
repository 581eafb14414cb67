//! Field identifiers and the value map a form session produces

use crate::error::TemplateError;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Returns true for the characters allowed in a field id (`[A-Za-z0-9_]`)
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whitespace as templates and required checks see it.
///
/// Unicode `White_Space` minus U+0085 (NEXT LINE), plus U+FEFF (BOM).
pub fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

/// A validated field identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(String);

impl FieldId {
    /// Validate and wrap a field id
    pub fn new(id: impl Into<String>) -> Result<Self, TemplateError> {
        let id = id.into();
        if id.is_empty() || !id.chars().all(is_word_char) {
            return Err(TemplateError::InvalidFieldId(id));
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Field values keyed by field id. A missing key reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<FieldId, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one
    pub fn insert(&mut self, id: FieldId, value: impl Into<String>) {
        self.values.insert(id, value.into());
    }

    /// Value for `id`, or `""` when absent
    pub fn get(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }

    /// True when `id` holds a non-empty value
    pub fn is_set(&self, id: &str) -> bool {
        !self.get(id).is_empty()
    }
}

impl FromIterator<(FieldId, String)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (FieldId, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
