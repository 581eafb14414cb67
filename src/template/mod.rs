//! Template rendering
//!
//! Templates are plain text with two kinds of tokens:
//!
//! ```text
//! Hi {{name}}{{#if extra}}, {{extra}}{{/if}}!
//! ```
//!
//! - `{{field}}` is replaced by the field's value (empty when missing)
//! - `{{#if field}}...{{/if}}` keeps its body only when the field has a
//!   non-empty value
//!
//! Blocks do not nest: the first `{{/if}}` after an opening token closes it.

mod scanner;
mod values;

pub use values::{is_space, FieldId, FormValues};

use crate::error::TemplateError;
use scanner::{find_open, placeholders, segments, Segment, CLOSE};

/// Render `template` with `values`.
///
/// Only the placeholders of `field_ids` are substituted; any other
/// `{{token}}` is left as literal text. The result is trimmed.
pub fn render<I>(template: &str, values: &FormValues, field_ids: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut substituted = template.to_string();
    for id in field_ids {
        let id = id.as_ref();
        let token = format!("{{{{{id}}}}}");
        if substituted.contains(&token) {
            substituted = substituted.replace(&token, values.get(id));
        }
    }

    let mut output = String::with_capacity(substituted.len());
    for segment in segments(&substituted) {
        match segment {
            Segment::Text { text, .. } => output.push_str(text),
            Segment::Block { field, body } => {
                if values.is_set(field) {
                    output.push_str(body);
                }
            }
        }
    }

    output.trim_matches(is_space).to_string()
}

/// Field ids a template refers to, each listed once in order of first use
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRefs<'a> {
    pub placeholders: Vec<&'a str>,
    pub conditionals: Vec<&'a str>,
}

impl<'a> TemplateRefs<'a> {
    /// All referenced ids, placeholders first
    pub fn fields(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.placeholders
            .iter()
            .chain(self.conditionals.iter())
            .copied()
    }
}

fn push_unique<'a>(list: &mut Vec<&'a str>, id: &'a str) {
    if !list.contains(&id) {
        list.push(id);
    }
}

/// Check that `template` is well formed and collect the fields it uses.
///
/// Rejects nested blocks, opening tokens that are never closed and stray
/// `{{/if}}` tokens.
pub fn check(template: &str) -> Result<TemplateRefs<'_>, TemplateError> {
    let mut refs = TemplateRefs::default();

    for segment in segments(template) {
        match segment {
            Segment::Text { offset, text } => {
                if let Some(open) = find_open(text, 0) {
                    return Err(TemplateError::UnclosedConditional {
                        field: open.field.to_string(),
                    });
                }
                if let Some(rel) = text.find(CLOSE) {
                    return Err(TemplateError::UnmatchedClose {
                        offset: offset + rel,
                    });
                }
                for id in placeholders(text) {
                    push_unique(&mut refs.placeholders, id);
                }
            }
            Segment::Block { field, body } => {
                if find_open(body, 0).is_some() {
                    return Err(TemplateError::NestedConditional {
                        field: field.to_string(),
                    });
                }
                push_unique(&mut refs.conditionals, field);
                for id in placeholders(body) {
                    push_unique(&mut refs.placeholders, id);
                }
            }
        }
    }

    Ok(refs)
}
