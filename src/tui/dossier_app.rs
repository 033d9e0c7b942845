//! Dossier TUI application
//!
//! The portfolio page: a section list with the selected section's details,
//! a search input, a help modal and the hidden console overlay. Typing the
//! activation phrase anywhere on the page (outside the search input) opens
//! the console.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use tracing::{info, warn};

use super::app::status_footer::{render_footer, render_status_line};
use super::app::{App, TuiApp};
use super::console_view::{self, render_console, to_line};
use super::ui::page_layout;
use crate::clipboard::Copy;
use crate::console::{Command, Console, DisplayLine};
use crate::theme::{current_theme, Theme};

/// Rows scrolled by PgUp/PgDn inside the console.
const CONSOLE_PAGE: usize = 5;

/// UI mode for the dossier page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Section browsing
    #[default]
    Normal,
    /// Search input has focus
    Search,
    /// Keyboard shortcut overlay
    Help,
}

/// A browsable dossier section, backed by the console command of the same
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub command: Command,
}

/// Sections in display order.
pub const SECTIONS: [Section; 6] = [
    Section {
        label: "IDENTITY",
        command: Command::Whoami,
    },
    Section {
        label: "ARSENAL",
        command: Command::Skills,
    },
    Section {
        label: "CASE FILES",
        command: Command::Projects,
    },
    Section {
        label: "RECORD",
        command: Command::Experience,
    },
    Section {
        label: "CHANNELS",
        command: Command::Contact,
    },
    Section {
        label: "STATUS",
        command: Command::Status,
    },
];

/// Page state, independent of the terminal.
pub struct DossierState {
    console: Console,
    mode: Mode,
    selected: usize,
    search_input: String,
    status_message: Option<String>,
    should_quit: bool,
    copier: Copy,
}

impl DossierState {
    pub fn new(console: Console) -> Self {
        Self::with_copier(console, Copy::new())
    }

    /// Create with a specific clipboard (for testing).
    pub fn with_copier(console: Console, copier: Copy) -> Self {
        Self {
            console,
            mode: Mode::Normal,
            selected: 0,
            search_input: String::new(),
            status_message: None,
            should_quit: false,
            copier,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_section(&self) -> Section {
        SECTIONS[self.selected]
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Adapt to the terminal size; the console needs room for its panel.
    pub fn set_viewport(&mut self, area: Rect) {
        self.console.set_enabled(console_view::fits(area));
    }

    pub fn tick(&mut self, now: Instant) {
        self.console.tick(now);
    }

    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.console.next_deadline(now)
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.console.is_open() {
            self.handle_console_key(key, now);
            return;
        }

        self.status_message = None;
        match self.mode {
            Mode::Normal => self.handle_normal_key(key, now),
            Mode::Search => self.handle_search_key(key, now),
            Mode::Help => {
                if let KeyCode::Char(c) = key.code {
                    self.console.handle_page_key(c, false, now);
                }
                self.mode = Mode::Normal;
            }
        }
    }

    fn handle_console_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.console.close(),
            KeyCode::Enter => {
                self.console.submit(now);
            }
            KeyCode::Backspace => self.console.backspace(now),
            KeyCode::PageUp => self.console.scroll_up(CONSOLE_PAGE),
            KeyCode::PageDown => self.console.scroll_down(CONSOLE_PAGE),
            KeyCode::Up => self.console.scroll_up(1),
            KeyCode::Down => self.console.scroll_down(1),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.console.type_char(c, now)
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, now: Instant) {
        if let KeyCode::Char(c) = key.code {
            if self.console.handle_page_key(c, false, now) {
                return;
            }
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(SECTIONS.len() - 1)
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = SECTIONS.len() - 1,
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Char('e') => self.copy_email(),
            KeyCode::Esc => self.search_input.clear(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => {
                self.search_input.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => {
                // The search box owns the keystroke
                self.console.handle_page_key(c, true, now);
                self.search_input.push(c);
            }
            _ => {}
        }
    }

    /// Copy the contact email to the clipboard.
    fn copy_email(&mut self) {
        let email = self.console.table().profile().email.clone();
        self.status_message = Some(match self.copier.text(&email) {
            Ok(result) => result.message("Email"),
            Err(e) => {
                warn!(error = %e, "copy email failed");
                format!("Copy failed: {}", e)
            }
        });
    }

    /// Lines shown in the detail pane: the selected section, or every
    /// matching line while a search query is active.
    pub fn detail_lines(&self) -> Vec<DisplayLine> {
        let table = self.console.table();
        if self.search_input.is_empty() {
            return table.lines(self.selected_section().command);
        }
        let query = self.search_input.to_lowercase();
        SECTIONS
            .iter()
            .flat_map(|section| table.lines(section.command))
            .filter(|line| line.plain_text().to_lowercase().contains(&query))
            .collect()
    }

    /// Render the page and, on top, the console or help overlay.
    pub fn render(&self, frame: &mut Frame, now: Instant, clock: &str) {
        let theme = current_theme();
        let area = frame.area();
        let [header, body, status, footer] = page_layout(area);

        self.render_header(frame, header, clock, &theme);
        self.render_body(frame, body, &theme);
        render_status_line(frame, status, &compute_status_text(self));
        render_footer(frame, footer, footer_keys(self.mode));

        if self.console.is_open() {
            render_console(frame, area, &self.console, now);
        } else if self.mode == Mode::Help {
            render_help_modal(frame, area, &theme);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, clock: &str, theme: &Theme) {
        let identity = &self.console.table().profile().identity;
        let line = Line::from(vec![
            Span::styled(identity.name.clone(), theme.accent_bold_style()),
            Span::styled(format!("  {}", identity.specialization), theme.text_style()),
            Span::styled(format!("  GOTHAM TIME {}", clock), theme.text_secondary_style()),
        ]);
        let header = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style())
                .title(Span::styled(" WAYNE DOSSIER ", theme.accent_style())),
        );
        frame.render_widget(header, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(1)])
            .split(area);

        let items: Vec<ListItem> = SECTIONS
            .iter()
            .map(|section| ListItem::new(section.label))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.text_secondary_style()),
            )
            .style(theme.text_style())
            .highlight_style(theme.accent_bold_style().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, chunks[0], &mut list_state);

        let title = if self.search_input.is_empty() {
            format!(" {} ", self.selected_section().label)
        } else {
            format!(" SEARCH: {} ", self.search_input)
        };
        let lines: Vec<Line<'static>> = self
            .detail_lines()
            .iter()
            .map(|line| to_line(line, theme))
            .collect();
        let detail = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.text_secondary_style())
                    .title(Span::styled(title, theme.accent_style())),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(detail, chunks[1]);
    }
}

/// Compute the status text for the current mode.
fn compute_status_text(state: &DossierState) -> String {
    if let Some(msg) = state.status_message() {
        return msg.to_string();
    }
    match state.mode {
        Mode::Search => format!("Search: {}_", state.search_input),
        Mode::Help => String::new(),
        Mode::Normal if !state.search_input.is_empty() => format!(
            "{} matches for \"{}\" (Esc to clear)",
            state.detail_lines().len(),
            state.search_input
        ),
        Mode::Normal => format!(
            "{} of {}: {}",
            state.selected + 1,
            SECTIONS.len(),
            state.selected_section().label
        ),
    }
}

/// Footer key hints for the given mode.
fn footer_keys(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Search => &[("Enter", "apply"), ("Esc", "cancel"), ("Backspace", "delete char")],
        Mode::Help => &[("any key", "close help")],
        Mode::Normal => &[
            ("\u{2191}\u{2193}", "navigate"),
            ("/", "search"),
            ("e", "copy email"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}

/// Render the help modal overlay.
fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal_width = 44.min(area.width.saturating_sub(4));
    let modal_height = 16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width - modal_width) / 2;
    let y = area.y + (area.height - modal_height) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);
    let help = Paragraph::new(build_help_text(theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(" Help "),
    );
    frame.render_widget(help, modal_area);
}

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), theme.accent_style()),
            Span::raw(desc),
        ])
    };
    vec![
        Line::from(Span::styled("Keyboard Shortcuts", theme.accent_bold_style())),
        Line::from(""),
        key("\u{2191}/\u{2193} j/k", "Previous/next section"),
        key("Home/End", "First/last section"),
        key("/", "Search the dossier"),
        key("e", "Copy email"),
        key("?", "This help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Some channels only open for those who know",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(Span::styled(
            "the right name.",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            theme.text_secondary_style(),
        )),
    ]
}

/// The dossier page bound to a real terminal.
pub struct DossierApp {
    app: App,
    state: DossierState,
}

impl DossierApp {
    pub fn new(app: App, console: Console) -> Self {
        Self {
            app,
            state: DossierState::new(console),
        }
    }
}

impl TuiApp for DossierApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        self.state.handle_key(key, now);
        if self.state.should_quit() {
            info!("quit requested");
            self.app.quit();
        }
        Ok(())
    }

    fn on_tick(&mut self, now: Instant) {
        self.state.tick(now);
    }

    fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.state.next_deadline(now)
    }

    fn draw(&mut self) -> Result<()> {
        let (width, height) = self.app.size()?;
        self.state.set_viewport(Rect::new(0, 0, width, height));

        let clock = chrono::Local::now().format("%H:%M:%S").to_string();
        let now = Instant::now();
        let state = &self.state;
        self.app.draw(|frame| state.render(frame, now, &clock))
    }
}
