//! Application state and core logic

use crate::catalog::Catalog;
use crate::clipboard::ClipboardSink;
use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, Form, FormButton, GeneratorSession, Notice, NoticeKind, View};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use std::time::Instant;

/// Lines moved by one PageUp/PageDown in the output panel
const OUTPUT_PAGE: u16 = 5;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// The use cases on offer
    pub catalog: Catalog,
    /// User configuration
    pub config: TuiConfig,
    /// Where generated prompts are copied to
    clipboard: Box<dyn ClipboardSink>,
    /// Last known terminal size as (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(catalog: Catalog, config: TuiConfig, clipboard: Box<dyn ClipboardSink>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            catalog,
            config,
            clipboard,
            terminal_size: None,
            quit: false,
        };

        if let Some(id) = app.config.start_use_case.clone() {
            if !app.open_use_case(&id) {
                tracing::warn!("Configured start use case {id:?} is not in the catalog");
            }
        }

        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Furthest the output panel can scroll at the current terminal size
    fn output_scroll_limit(&self) -> u16 {
        let Some(output) = self.state.session.as_ref().and_then(|s| s.output.as_deref()) else {
            return 0;
        };
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        ui::output_scroll_limit(Rect::new(0, 0, width, height), output, self.config.show_tips())
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Housekeeping run on every loop iteration
    pub fn tick(&mut self, now: Instant) {
        self.state.expire_notice(now);
    }

    /// Open the generator for a use case with a fresh session.
    /// Returns false when the id is not in the catalog.
    pub fn open_use_case(&mut self, id: &str) -> bool {
        let (Some(use_case), Some(index)) = (self.catalog.get(id), self.catalog.position(id))
        else {
            return false;
        };
        tracing::info!("Opening use case {}", use_case.id);
        self.state.selected_index = index;
        self.state.session = Some(GeneratorSession::new(use_case));
        self.state.current_view = View::Generator;
        true
    }

    /// Go back to the catalog, discarding the current session
    pub fn go_back(&mut self) {
        if let Some(session) = self.state.session.take() {
            tracing::debug!("Closing use case {}", session.use_case.id);
        }
        self.state.current_view = View::Catalog;
    }

    /// Validate the form and render the prompt
    pub fn generate(&mut self) {
        let Some(session) = self.state.session.as_mut() else {
            return;
        };
        let use_case = session.use_case.id;
        match session.generate().map(|prompt| prompt.chars().count()) {
            Ok(chars) => {
                tracing::info!("Generated prompt for {use_case} ({chars} chars)");
            }
            Err(err) => {
                session.form.focus_first_missing();
                self.state.push_error(err.to_string());
            }
        }
    }

    /// Copy the generated prompt to the clipboard
    pub fn copy_output(&mut self, now: Instant) {
        let Some(output) = self
            .state
            .session
            .as_ref()
            .and_then(|s| s.output.clone())
        else {
            self.state.notice = Some(Notice::new(
                "Generate a prompt first",
                NoticeKind::Info,
                self.config.copy_feedback(),
                now,
            ));
            return;
        };

        match self.clipboard.set_text(&output) {
            Ok(()) => {
                self.state.notice = Some(Notice::new(
                    "✓ Copied!",
                    NoticeKind::Success,
                    self.config.copy_feedback(),
                    now,
                ));
            }
            Err(err) => {
                tracing::warn!("Clipboard write failed: {err}");
                self.push_error(format!("Could not copy the prompt: {err}"));
            }
        }
    }

    /// True while the copy acknowledgement is on screen
    pub fn copy_acknowledged(&self) -> bool {
        self.state
            .notice
            .as_ref()
            .is_some_and(|n| n.kind == NoticeKind::Success)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Catalog => self.handle_catalog_key(key),
            View::Generator => self.handle_generator_key(key, Instant::now()),
        }
        Ok(())
    }

    /// Handle keys in Catalog view
    fn handle_catalog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(self.catalog.len()),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Home | KeyCode::Char('g') => self.state.selected_index = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.state.selected_index = self.catalog.len().saturating_sub(1)
            }
            KeyCode::Enter => {
                if let Some(use_case) = self.catalog.all().get(self.state.selected_index) {
                    self.open_use_case(use_case.id);
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Generator view
    fn handle_generator_key(&mut self, key: KeyEvent, now: Instant) {
        if platform::is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('g') => self.generate(),
                KeyCode::Char('y') => self.copy_output(now),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.go_back();
                return;
            }
            KeyCode::Enter if self.buttons_row_active() => {
                match self.selected_button() {
                    FormButton::Generate => {
                        self.generate();
                        if !self.state.has_errors() {
                            if let Some(session) = self.state.session.as_mut() {
                                session.form.focus_buttons(FormButton::Copy);
                            }
                        }
                    }
                    FormButton::Copy => self.copy_output(now),
                    FormButton::Back => self.go_back(),
                }
                return;
            }
            KeyCode::PageDown => {
                let max = self.output_scroll_limit();
                if let Some(session) = self.state.session.as_mut() {
                    session.scroll_output_down(OUTPUT_PAGE, max);
                }
                return;
            }
            _ => {}
        }

        let Some(session) = self.state.session.as_mut() else {
            self.go_back();
            return;
        };
        let on_buttons = session.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => session.form.next_field(),
            KeyCode::BackTab => session.form.prev_field(),
            KeyCode::PageUp => session.scroll_output_up(OUTPUT_PAGE),
            // Action buttons
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') if on_buttons => {
                session.form.prev_button()
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') if on_buttons => {
                session.form.next_button()
            }
            // Field editing
            KeyCode::Left => {
                if let Some(field) = session.form.get_active_field_mut() {
                    field.prev_option();
                }
            }
            KeyCode::Right => {
                if let Some(field) = session.form.get_active_field_mut() {
                    field.next_option();
                }
            }
            KeyCode::Enter => {
                if session.form.current_field().is_some_and(|f| f.is_multiline()) {
                    if let Some(field) = session.form.get_active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    session.form.next_field();
                }
            }
            KeyCode::Char(' ')
                if session.form.current_field().is_some_and(|f| f.is_enumerated()) =>
            {
                if let Some(field) = session.form.get_active_field_mut() {
                    field.next_option();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(field) = session.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = session.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Delete => {
                if let Some(field) = session.form.get_active_field_mut() {
                    field.clear();
                }
            }
            _ => {}
        }
    }

    fn buttons_row_active(&self) -> bool {
        self.state
            .session
            .as_ref()
            .is_some_and(|s| s.form.is_buttons_row_active())
    }

    fn selected_button(&self) -> FormButton {
        self.state
            .session
            .as_ref()
            .map(|s| s.form.selected_button)
            .unwrap_or_default()
    }
}
