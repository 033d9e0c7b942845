//! Terminal clipboard via the OSC 52 escape sequence.

use std::io::{self, Write};

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Sends the text to the hosting terminal, which places it on the clipboard.
///
/// Terminals without OSC 52 support ignore the sequence, so success only
/// means the sequence was written.
#[derive(Debug, Default)]
pub struct Osc52;

impl Osc52 {
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Osc52 {
    fn method(&self) -> CopyMethod {
        CopyMethod::Osc52
    }

    fn is_available(&self) -> bool {
        atty::is(atty::Stream::Stdout)
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut stdout = io::stdout();
        execute!(stdout, CopyToClipboard::to_clipboard_from(text))
            .and_then(|_| stdout.flush())
            .map_err(|e| CopyToolError::Failed(e.to_string()))
    }
}
