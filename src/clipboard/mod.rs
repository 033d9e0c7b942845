//! Clipboard support for copying dossier text (the contact email).
//!
//! Platform clipboard tools are tried in priority order; when none of them
//! works the text is sent to the terminal as an OSC 52 escape sequence.

mod copy;
mod error;
mod result;
mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};

/// Copy `text` using the platform tools and the terminal fallback.
pub fn copy_text(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
