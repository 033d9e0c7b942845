//! Console overlay rendering.
//!
//! Draws the open console as a centered panel over the dossier: output
//! lines, the prompt row and a key hint row.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::ui::centered_rect;
use crate::console::{Console, DisplayLine, PROMPT};
use crate::theme::{current_theme, Theme};

/// Smallest terminal that can host the console panel.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

/// Whether a terminal of `area` can show the console.
pub fn fits(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}

/// Area of the console panel inside `area`.
pub fn panel_area(area: Rect) -> Rect {
    let panel = centered_rect(90, 90, area);
    let width = panel.width.max(MIN_WIDTH).min(area.width);
    let height = panel.height.max(MIN_HEIGHT).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Convert a display line into styled spans, highlighting `{{...}}` runs.
pub fn to_line(line: &DisplayLine, theme: &Theme) -> Line<'static> {
    let base = theme.line_style(line.style);
    let spans: Vec<Span<'static>> = line
        .segments()
        .into_iter()
        .map(|(text, highlighted)| {
            let style = if highlighted {
                theme.highlight_style()
            } else {
                base
            };
            Span::styled(text, style)
        })
        .collect();
    Line::from(spans)
}

/// The output lines visible in a panel `height` rows tall.
pub fn visible_lines(console: &Console, height: usize) -> &[DisplayLine] {
    let output = console.output();
    let end = output.len().saturating_sub(console.scroll_back());
    let start = end.saturating_sub(height);
    &output[start..end]
}

/// Render the console panel if it is open.
pub fn render_console(frame: &mut Frame, area: Rect, console: &Console, now: Instant) {
    if !console.is_open() || !fits(area) {
        return;
    }
    let theme = current_theme();
    let panel = panel_area(area);
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(Span::styled(" BAT-COMPUTER ", theme.accent_bold_style()));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let lines: Vec<Line<'static>> = visible_lines(console, chunks[0].height as usize)
        .iter()
        .map(|line| to_line(line, &theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    frame.render_widget(Paragraph::new(prompt_line(console, now, &theme)), chunks[1]);

    let hint = if console.scroll_back() > 0 {
        format!(
            "Esc: close | Enter: run | PgUp/PgDn: scroll ({} more)",
            console.scroll_back()
        )
    } else {
        "Esc: close | Enter: run | PgUp/PgDn: scroll".to_string()
    };
    frame.render_widget(
        Paragraph::new(hint)
            .style(theme.text_secondary_style())
            .alignment(Alignment::Center),
        chunks[2],
    );
}

fn prompt_line(console: &Console, now: Instant, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::styled(PROMPT.to_string(), theme.accent_bold_style()),
        Span::raw(" "),
        Span::styled(console.input().to_string(), theme.text_style()),
    ];
    if console.is_input_focused(now) {
        spans.push(Span::styled("█", theme.accent_style()));
    }
    Line::from(spans)
}
