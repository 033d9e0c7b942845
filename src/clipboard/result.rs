//! Copy operation results and method identifiers.

/// The result of a successful clipboard copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyResult {
    /// Tool that accepted the text
    pub method: CopyMethod,
    /// Number of bytes copied
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(method: CopyMethod, size_bytes: usize) -> Self {
        Self { method, size_bytes }
    }

    /// User-facing message for the status line.
    pub fn message(&self, what: &str) -> String {
        if self.is_terminal_fallback() {
            format!("{} sent to terminal clipboard", what)
        } else {
            format!("{} copied to clipboard", what)
        }
    }

    /// Whether the text went through the terminal escape fallback.
    pub fn is_terminal_fallback(&self) -> bool {
        matches!(self.method, CopyMethod::Osc52)
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux Wayland
    WlCopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Terminal escape sequence
    Osc52,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::WlCopy => "wl-copy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::Osc52 => "osc52",
        }
    }
}
