//! Clipboard output
//!
//! The generator hands its text to a [`ClipboardSink`]. The real
//! implementation talks to the system clipboard; tests use the mock.

use thiserror::Error;

/// Failure to place text on the clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard is not available: {0}")]
    Unavailable(String),

    #[error("could not write to clipboard: {0}")]
    Write(String),
}

/// Trait for clipboard writes, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
///
/// A handle is opened per write so a clipboard that appears later (or a
/// permission that is granted later) still works.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        tracing::debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
