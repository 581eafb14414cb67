//! Form state for a use case's prompt form

use super::field::FormField;
use crate::catalog::UseCase;
use crate::error::FormError;
use crate::template::{FieldId, FormValues};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Buttons in the form's action panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Generate,
    Copy,
    Back,
}

impl FormButton {
    pub const ALL: [FormButton; 3] = [FormButton::Generate, FormButton::Copy, FormButton::Back];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Generate => "Generate Prompt",
            Self::Copy => "Copy to Clipboard",
            Self::Back => "← Back",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Generate => 0,
            Self::Copy => 1,
            Self::Back => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The editable form of one use case.
///
/// Focus indexes `0..fields.len()` are input fields; index `fields.len()`
/// is the action buttons row.
#[derive(Debug, Clone)]
pub struct PromptForm {
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl PromptForm {
    pub fn new(use_case: &'static UseCase) -> Self {
        Self {
            fields: use_case.fields.iter().map(FormField::new).collect(),
            active_field_index: 0,
            selected_button: FormButton::default(),
        }
    }

    /// Index of the buttons row
    pub fn buttons_row(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.buttons_row()
    }

    pub fn focus_buttons(&mut self, button: FormButton) {
        self.active_field_index = self.buttons_row();
        self.selected_button = button;
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.next();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.prev();
    }

    pub fn current_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    /// Current values of every field
    pub fn values(&self) -> Result<FormValues, FormError> {
        let mut values = FormValues::new();
        for field in &self.fields {
            values.insert(FieldId::new(field.id())?, field.value());
        }
        Ok(values)
    }

    /// Values ready for rendering, or the first required field left empty
    pub fn validate(&self) -> Result<FormValues, FormError> {
        if let Some(missing) = self.fields.iter().find(|f| f.is_missing()) {
            return Err(FormError::MissingRequired {
                label: missing.label().to_string(),
            });
        }
        self.values()
    }

    /// Focus the first required field that is still empty
    pub fn focus_first_missing(&mut self) -> bool {
        match self.fields.iter().position(|f| f.is_missing()) {
            Some(index) => {
                self.active_field_index = index;
                true
            }
            None => false,
        }
    }
}

impl Form for PromptForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.buttons_row());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Field, UseCase};
    use crate::state::forms::field::FieldValue;

    static GREETING: UseCase = UseCase {
        id: "greeting",
        title: "Greeting",
        description: "Say hi",
        icon: "👋",
        fields: &[
            Field::text("name", "Name").required(),
            Field::text("extra", "Extra"),
            Field::select("tone", "Tone", &["Warm", "Direct"]).required(),
        ],
        template: "Hi {{name}}{{#if extra}}, {{extra}}{{/if}}! ({{tone}})",
    };

    fn expected(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (FieldId::new(*k).unwrap(), v.to_string()))
            .collect()
    }

    fn type_into(form: &mut PromptForm, text: &str) {
        let field = form.get_active_field_mut().unwrap();
        for c in text.chars() {
            field.push_char(c);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = PromptForm::new(&GREETING);
            assert_eq!(form.fields.len(), 3);
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, FormButton::Generate);
            assert_eq!(form.fields[0].id(), "name");
        }

        #[test]
        fn test_field_count_includes_buttons() {
            let form = PromptForm::new(&GREETING);
            assert_eq!(form.field_count(), 4);
            assert_eq!(form.buttons_row(), 3);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = PromptForm::new(&GREETING);
            for _ in 0..4 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons() {
            let mut form = PromptForm::new(&GREETING);
            form.prev_field();
            assert!(form.is_buttons_row_active());
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = PromptForm::new(&GREETING);
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 3);
        }

        #[test]
        fn test_buttons_wrap() {
            let mut form = PromptForm::new(&GREETING);
            form.prev_button();
            assert_eq!(form.selected_button, FormButton::Back);
            form.next_button();
            assert_eq!(form.selected_button, FormButton::Generate);
            form.next_button();
            assert_eq!(form.selected_button, FormButton::Copy);
        }

        #[test]
        fn test_focus_buttons() {
            let mut form = PromptForm::new(&GREETING);
            form.focus_buttons(FormButton::Copy);
            assert!(form.is_buttons_row_active());
            assert_eq!(form.selected_button, FormButton::Copy);
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_required_reports_first_label() {
            let form = PromptForm::new(&GREETING);
            assert_eq!(
                form.validate(),
                Err(FormError::MissingRequired {
                    label: "Name".to_string()
                })
            );
        }

        #[test]
        fn test_missing_select_is_reported() {
            let mut form = PromptForm::new(&GREETING);
            type_into(&mut form, "Sam");
            assert_eq!(
                form.validate(),
                Err(FormError::MissingRequired {
                    label: "Tone".to_string()
                })
            );
        }

        #[test]
        fn test_valid_form_produces_all_values() {
            let mut form = PromptForm::new(&GREETING);
            type_into(&mut form, "Sam");
            form.fields[2].next_option();

            let values = form.validate().unwrap();
            assert_eq!(values, expected(&[("name", "Sam"), ("extra", ""), ("tone", "Warm")]));
            assert_eq!(GREETING.render(&values), "Hi Sam! (Warm)");
        }

        #[test]
        fn test_values_do_not_require_fields() {
            let form = PromptForm::new(&GREETING);
            let values = form.values().unwrap();
            assert_eq!(values, expected(&[("name", ""), ("extra", ""), ("tone", "")]));
            assert!(!values.is_set("name"));
        }

        #[test]
        fn test_focus_first_missing() {
            let mut form = PromptForm::new(&GREETING);
            type_into(&mut form, "Sam");
            form.focus_buttons(FormButton::Generate);
            assert!(form.focus_first_missing());
            assert_eq!(form.active_field_index, 2);

            form.fields[2].next_option();
            assert!(!form.focus_first_missing());
        }

        #[test]
        fn test_choice_value_survives_clone() {
            let mut form = PromptForm::new(&GREETING);
            form.fields[2].next_option();
            let copy = form.clone();
            assert_eq!(copy.fields[2].value, FieldValue::Choice(Some(0)));
        }
    }
}
