//! Clipboard operation errors.

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Nothing to copy")]
    EmptyText,

    #[error("No clipboard available. Install wl-copy, xclip or xsel, or use a terminal with OSC 52 support.")]
    NoToolAvailable,
}
