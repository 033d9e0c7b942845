//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions.
//! Provides both ratatui styles (for the TUI) and ANSI escape codes (for
//! `batcomputer run` output).

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

use crate::console::LineStyle;

/// Theme configuration for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights, headings and the console border
    pub accent: Color,
    /// Emphasized text (prompt echo)
    pub emphasis: Color,
    /// Error color (unknown commands)
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::gotham()
    }
}

impl Theme {
    /// Gotham theme - gray text, yellow signal accent.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn gotham() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            emphasis: Color::White,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Classic terminal theme - green phosphor.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::Green,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            emphasis: Color::White,
            error: Color::Red,
            success: Color::LightGreen,
            background: Color::Reset,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "gotham" => Some(Self::gotham()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }

    /// Foreground color for a console line style.
    pub fn line_color(&self, style: LineStyle) -> Color {
        match style {
            LineStyle::Plain => self.text_primary,
            LineStyle::Yellow => self.accent,
            LineStyle::Dim => self.text_secondary,
            LineStyle::White => self.emphasis,
            LineStyle::Red => self.error,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, headings).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a console line.
    pub fn line_style(&self, style: LineStyle) -> Style {
        Style::default().fg(self.line_color(style))
    }

    /// Style for a `{{highlighted}}` console segment.
    pub fn highlight_style(&self) -> Style {
        self.accent_bold_style()
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text in the color of a console line style (for CLI output).
    pub fn line_text(&self, style: LineStyle, text: &str) -> String {
        paint(self.line_color(style), text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the process-wide theme. Only the first call has an effect.
pub fn set_theme(theme: Theme) -> bool {
    THEME.set(theme).is_ok()
}

/// The active theme (Gotham unless another was installed at startup).
pub fn current_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}
