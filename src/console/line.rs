//! Display lines for the command console.
//!
//! A `DisplayLine` is one unit of console output: a text with optional
//! inline highlight markers plus a line-wide style class.

use serde::{Deserialize, Serialize};

/// Opening marker for an inline highlighted run.
const HIGHLIGHT_OPEN: &str = "{{";
/// Closing marker for an inline highlighted run.
const HIGHLIGHT_CLOSE: &str = "}}";
/// Makes a following `{`, `}` or `\` literal.
const ESCAPE: char = '\\';

/// Style class applied to a whole display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// No class (regular console text)
    #[default]
    Plain,
    /// Accent color (banners, headings)
    Yellow,
    /// De-emphasized text
    Dim,
    /// Bright text (echoed prompt, emphasized entries)
    White,
    /// Error text
    Red,
}

impl LineStyle {
    /// Class name as used in serialized output.
    pub fn class_name(&self) -> &'static str {
        match self {
            LineStyle::Plain => "plain",
            LineStyle::Yellow => "yellow",
            LineStyle::Dim => "dim",
            LineStyle::White => "white",
            LineStyle::Red => "red",
        }
    }
}

/// One rendered line of console output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLine {
    /// Line text; `{{...}}` marks an inline highlighted run
    pub text: String,
    /// Line-wide style class
    pub style: LineStyle,
}

impl DisplayLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Plain)
    }

    /// An empty spacer line.
    pub fn blank() -> Self {
        Self::new(String::new(), LineStyle::Plain)
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Split the text into `(segment, highlighted)` pairs.
    ///
    /// An opening marker without a matching close is kept as literal text,
    /// as is anything escaped with [`literal`].
    pub fn segments(&self) -> Vec<(String, bool)> {
        let tokens = tokenize(&self.text);
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut highlighted = false;

        for (i, token) in tokens.iter().enumerate() {
            match token {
                Token::Char(c) => current.push(*c),
                Token::Open
                    if !highlighted && tokens[i + 1..].iter().any(|t| *t == Token::Close) =>
                {
                    flush(&mut segments, &mut current, false);
                    highlighted = true;
                }
                Token::Close if highlighted => {
                    flush(&mut segments, &mut current, true);
                    highlighted = false;
                }
                Token::Open => current.push_str(HIGHLIGHT_OPEN),
                Token::Close => current.push_str(HIGHLIGHT_CLOSE),
            }
        }

        flush(&mut segments, &mut current, false);
        segments
    }

    /// The text with highlight markers removed.
    pub fn plain_text(&self) -> String {
        self.segments().into_iter().map(|(text, _)| text).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Char(char),
    Open,
    Close,
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE if matches!(chars.peek().copied(), Some('{' | '}' | ESCAPE)) => {
                if let Some(escaped) = chars.next() {
                    tokens.push(Token::Char(escaped));
                }
            }
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                tokens.push(Token::Open);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                tokens.push(Token::Close);
            }
            c => tokens.push(Token::Char(c)),
        }
    }
    tokens
}

fn flush(segments: &mut Vec<(String, bool)>, current: &mut String, highlighted: bool) {
    if !current.is_empty() {
        segments.push((std::mem::take(current), highlighted));
    }
}

/// Escape `text` so it renders verbatim, markers included.
///
/// Use for anything the user typed before embedding it in a line.
pub fn literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '{' | '}' | ESCAPE) {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Wrap `text` in highlight markers.
pub fn highlight(text: &str) -> String {
    format!("{}{}{}", HIGHLIGHT_OPEN, text, HIGHLIGHT_CLOSE)
}
