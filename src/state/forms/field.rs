//! Form field value objects

use crate::catalog::{Field, FieldKind};
use crate::template::is_space;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Numeric input kept as typed
    Number(String),
    /// Index into the field's options, `None` until something is picked
    Choice(Option<usize>),
}

impl FieldValue {
    fn empty_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::SingleLine | FieldKind::MultiLine => FieldValue::Text(String::new()),
            FieldKind::Numeric => FieldValue::Number(String::new()),
            FieldKind::Enumerated => FieldValue::Choice(None),
        }
    }
}

/// Label shown for an enumerated field with nothing picked
pub const SELECT_PROMPT: &str = "Select...";

/// Represents a single form field with its definition and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: &'static Field,
    pub value: FieldValue,
}

impl FormField {
    /// Create an empty field for a catalog definition
    pub fn new(spec: &'static Field) -> Self {
        Self {
            spec,
            value: FieldValue::empty_for(spec.kind),
        }
    }

    pub fn id(&self) -> &'static str {
        self.spec.id
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn is_multiline(&self) -> bool {
        self.spec.is_multiline()
    }

    pub fn is_enumerated(&self) -> bool {
        matches!(self.value, FieldValue::Choice(_))
    }

    /// The value that goes into the template
    pub fn value(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => s,
            FieldValue::Choice(Some(i)) => self.spec.options.get(*i).copied().unwrap_or(""),
            FieldValue::Choice(None) => "",
        }
    }

    /// True when a required field has nothing meaningful in it
    pub fn is_missing(&self) -> bool {
        self.spec.required && self.value().chars().all(is_space)
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => {
                if c != '\n' || self.spec.is_multiline() {
                    s.push(c);
                }
            }
            FieldValue::Number(s) => {
                let accepted = c.is_ascii_digit()
                    || (c == '-' && s.is_empty())
                    || (c == '.' && !s.contains('.'));
                if accepted {
                    s.push(c);
                }
            }
            FieldValue::Choice(_) => {
                // Enumerated fields are changed with next/prev option
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => {
                s.pop();
            }
            FieldValue::Choice(choice) => *choice = None,
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value = FieldValue::empty_for(self.spec.kind);
    }

    /// Select the next option, wrapping back to "nothing selected"
    pub fn next_option(&mut self) {
        let count = self.spec.options.len();
        if let FieldValue::Choice(choice) = &mut self.value {
            *choice = match *choice {
                None if count > 0 => Some(0),
                Some(i) if i + 1 < count => Some(i + 1),
                _ => None,
            };
        }
    }

    /// Select the previous option, wrapping back to "nothing selected"
    pub fn prev_option(&mut self) {
        let count = self.spec.options.len();
        if let FieldValue::Choice(choice) = &mut self.value {
            *choice = match *choice {
                None if count > 0 => Some(count - 1),
                Some(i) if i > 0 => Some(i - 1),
                _ => None,
            };
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Choice(None) => SELECT_PROMPT.to_string(),
            FieldValue::Choice(Some(_)) => format!("‹ {} ›", self.value()),
            FieldValue::Text(s) | FieldValue::Number(s) => s.clone(),
        }
    }
}
