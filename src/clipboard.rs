//! Clipboard access
//!
//! Copying is a collaborator of the session: the session decides what text to
//! copy and hands it to a [`Clipboard`].

use thiserror::Error;

/// Clipboard failures
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (e.g. headless session)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the text
    #[error("Clipboard error: {0}")]
    Write(String),
}

/// Destination for copy-ready text
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError` if the text cannot be stored.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`
///
/// The handle is opened lazily on first copy so that sessions which never
/// copy work without a display server.
///
/// On X11 and Wayland the process owns the copied text: once tagger exits it
/// is gone unless a clipboard manager took it over.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
        }
        Ok(())
    }
}

/// Clipboard that keeps copied text in memory
///
/// Used when no system clipboard is wanted; the caller prints the text instead.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    history: Vec<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently copied text
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// Everything copied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history.push(text.to_string());
        Ok(())
    }
}
