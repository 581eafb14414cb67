//! Application state definitions

use super::notice::Notice;
use super::session::GeneratorSession;
use std::collections::VecDeque;
use std::time::Instant;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Browse the use-case catalog
    #[default]
    Catalog,
    /// Fill a use case's form and generate its prompt
    Generator,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    /// Highlighted row in the catalog list
    pub selected_index: usize,

    /// Open generator session, present only in the generator view
    pub session: Option<GeneratorSession>,

    // Feedback
    errors: VecDeque<String>,
    pub notice: Option<Notice>,
}

impl AppState {
    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Drop the notice once its display window has passed
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    /// Move the catalog highlight, clamped to `len` entries
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeKind;
    use std::time::Duration;

    #[test]
    fn test_default_view_is_catalog() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Catalog);
        assert!(state.session.is_none());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
        state.dismiss_error(); // empty queue is fine
    }

    #[test]
    fn test_expire_notice() {
        let now = Instant::now();
        let mut state = AppState {
            notice: Some(Notice::new(
                "Copied!",
                NoticeKind::Success,
                Duration::from_secs(2),
                now,
            )),
            ..Default::default()
        };
        state.expire_notice(now + Duration::from_secs(1));
        assert!(state.notice.is_some());
        state.expire_notice(now + Duration::from_secs(2));
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = AppState::default();
        state.select_prev();
        assert_eq!(state.selected_index, 0);
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.selected_index, 1);
        state.select_next(0);
        assert_eq!(state.selected_index, 1);
    }
}
