//! Clipboard functionality for copying the display.

use super::Calculator;
use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("nothing to copy while an error is shown")]
    ErrorShown,
    #[error("failed to access clipboard: {0}")]
    Access(String),
    #[error("failed to copy to clipboard: {0}")]
    Write(String),
}

/// Destination for copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        copy_to_clipboard(text)
    }
}

/// Copy text to the system clipboard.
fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::Write(e.to_string()))
}

/// Copy the calculator display into `sink`.
///
/// Error tokens are never copied.
pub fn copy_display(
    calculator: &Calculator,
    sink: &mut dyn ClipboardSink,
) -> Result<(), ClipboardError> {
    if calculator.is_error() {
        return Err(ClipboardError::ErrorShown);
    }
    sink.set_text(calculator.display())
}
