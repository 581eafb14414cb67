//! Per-use-case generator session

use super::forms::PromptForm;
use crate::catalog::UseCase;
use crate::error::FormError;

/// Everything the generator view owns while a use case is open.
/// Dropped as a whole when the user goes back to the catalog.
#[derive(Debug, Clone)]
pub struct GeneratorSession {
    pub use_case: &'static UseCase,
    pub form: PromptForm,
    /// Last generated prompt
    pub output: Option<String>,
    /// Scroll offset of the output panel, in lines
    pub output_scroll: u16,
}

impl GeneratorSession {
    pub fn new(use_case: &'static UseCase) -> Self {
        Self {
            use_case,
            form: PromptForm::new(use_case),
            output: None,
            output_scroll: 0,
        }
    }

    /// Validate the form and render the template into `output`
    pub fn generate(&mut self) -> Result<&str, FormError> {
        let values = self.form.validate()?;
        let prompt = self.use_case.render(&values);
        self.output_scroll = 0;
        Ok(self.output.insert(prompt).as_str())
    }

    /// Scroll the output down, never past `max`
    pub fn scroll_output_down(&mut self, lines: u16, max: u16) {
        self.output_scroll = self.output_scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_output_up(&mut self, lines: u16) {
        self.output_scroll = self.output_scroll.saturating_sub(lines);
    }
}
