//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs against a taxonomy provider.

pub mod browse;
pub mod export;
pub mod locales;
pub mod search;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use export::execute as export;
pub use locales::execute as locales;
pub use search::execute as search;

use crate::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};

/// Clipboard for a command: the system one, or an in-memory one when the
/// copied text should be printed instead
#[must_use]
pub fn clipboard_for(no_clipboard: bool) -> Box<dyn Clipboard> {
    if no_clipboard {
        Box::new(MemoryClipboard::new())
    } else {
        Box::new(SystemClipboard::new())
    }
}
