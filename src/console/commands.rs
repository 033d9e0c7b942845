//! Console command table.
//!
//! Maps the closed set of console commands to the display lines they
//! produce. The table is built once per session from the profile and never
//! changes afterwards.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::line::{highlight, literal, DisplayLine, LineStyle};
use crate::profile::Profile;

/// Prompt shown in front of echoed input.
pub const PROMPT: &str = "BATMAN@GOTHAM:~$";

/// Delay before each welcome banner line, counted from the line before it.
const WELCOME_DELAYS_MS: [u64; 8] = [0, 80, 120, 160, 200, 260, 340, 380];

/// Inner width of the help box (between the vertical borders).
const HELP_INNER_WIDTH: usize = 51;

/// Number of cells in a skill bar.
const SKILL_BAR_CELLS: usize = 20;

/// Every command the console understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Whoami,
    Skills,
    Projects,
    Experience,
    Contact,
    Status,
    Gotham,
    Clear,
    Exit,
}

impl Command {
    /// All commands in help order.
    pub const ALL: [Command; 10] = [
        Command::Help,
        Command::Whoami,
        Command::Skills,
        Command::Projects,
        Command::Experience,
        Command::Contact,
        Command::Status,
        Command::Gotham,
        Command::Clear,
        Command::Exit,
    ];

    /// The lowercase name typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Whoami => "whoami",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Experience => "experience",
            Command::Contact => "contact",
            Command::Status => "status",
            Command::Gotham => "gotham",
            Command::Clear => "clear",
            Command::Exit => "exit",
        }
    }

    /// One-line description for the help listing.
    pub fn summary(&self) -> &'static str {
        match self {
            Command::Help => "Show available commands",
            Command::Whoami => "Identity profile",
            Command::Skills => "Full tech arsenal",
            Command::Projects => "Case files / deployed work",
            Command::Experience => "Employment record",
            Command::Contact => "Signal / communication channels",
            Command::Status => "Current availability",
            Command::Gotham => "???",
            Command::Clear => "Clear terminal",
            Command::Exit => "Close terminal",
        }
    }

    /// Side effect the console applies when this command is dispatched.
    pub fn effect(&self) -> Effect {
        match self {
            Command::Clear => Effect::ClearOutput,
            Command::Exit => Effect::ScheduleClose,
            _ => Effect::None,
        }
    }
}

/// Console-level side effect of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Only display lines
    #[default]
    None,
    /// Empty the output panel immediately
    ClearOutput,
    /// Close the console after the exit delay
    ScheduleClose,
}

/// The result of resolving one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// The normalized (trimmed, lowercased) input
    pub input: String,
    /// The resolved command, `None` when the input is unknown
    pub command: Option<Command>,
    /// Prompt line echoing the input
    pub echo: DisplayLine,
    /// Response lines in display order
    pub lines: Vec<DisplayLine>,
    /// Side effect to apply
    pub effect: Effect,
}

/// Lookup table from command name to command, plus the profile the
/// responses are produced from.
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: HashMap<&'static str, Command>,
    profile: Profile,
}

impl CommandTable {
    pub fn new(profile: Profile) -> Self {
        let entries = Command::ALL.iter().map(|c| (c.name(), *c)).collect();
        Self { entries, profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Look up a command by exact (already normalized) name.
    pub fn resolve(&self, name: &str) -> Option<Command> {
        self.entries.get(name).copied()
    }

    /// Resolve a raw submitted line.
    ///
    /// Returns `None` for empty or whitespace-only input.
    pub fn dispatch(&self, raw: &str) -> Option<Dispatch> {
        let input = raw.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }

        let echo = DisplayLine::new(
            format!("{} {}", highlight(PROMPT), literal(&input)),
            LineStyle::White,
        );
        let command = self.resolve(&input);
        let (lines, effect) = match command {
            Some(command) => (self.lines(command), command.effect()),
            None => (vec![not_found_line(&input)], Effect::None),
        };

        Some(Dispatch {
            input,
            command,
            echo,
            lines,
            effect,
        })
    }

    /// The display lines produced by `command`.
    pub fn lines(&self, command: Command) -> Vec<DisplayLine> {
        match command {
            Command::Help => help_lines(),
            Command::Whoami => self.whoami_lines(),
            Command::Skills => self.skills_lines(),
            Command::Projects => self.projects_lines(),
            Command::Experience => self.experience_lines(),
            Command::Contact => self.contact_lines(),
            Command::Status => self.status_lines(),
            Command::Gotham => gotham_lines(),
            Command::Clear => Vec::new(),
            Command::Exit => vec![DisplayLine::new(
                "> Closing secure channel...",
                LineStyle::Dim,
            )],
        }
    }

    fn whoami_lines(&self) -> Vec<DisplayLine> {
        let id = &self.profile.identity;
        let mut lines = vec![
            DisplayLine::plain(format!("> IDENTITY: {}", highlight(&id.name))),
            DisplayLine::plain(format!("> ALIAS: {}", id.alias)),
            DisplayLine::plain(format!("> SPECIALIZATION: {}", id.specialization)),
            DisplayLine::plain(format!("> STATUS: {}", highlight(&id.status))),
        ];
        lines.extend(
            self.profile
                .channels
                .iter()
                .map(|c| DisplayLine::plain(format!("> {}: {}", c.label, c.address))),
        );
        lines
    }

    fn skills_lines(&self) -> Vec<DisplayLine> {
        let mut lines = vec![DisplayLine::new(
            "> TECH ARSENAL — CONFIRMED PROFICIENCY:",
            LineStyle::Yellow,
        )];
        lines.extend(self.profile.skills.iter().map(|skill| {
            DisplayLine::plain(format!(
                "  [{}] {:<12}{}%",
                skill_bar(skill.percent),
                skill.name,
                skill.percent
            ))
        }));
        lines
    }

    fn projects_lines(&self) -> Vec<DisplayLine> {
        let mut lines = vec![DisplayLine::new(
            "> CASE FILES — DEPLOYED OPERATIONS:",
            LineStyle::Yellow,
        )];
        lines.extend(self.profile.projects.iter().enumerate().map(|(i, p)| {
            DisplayLine::plain(format!("  #{:03} — {:<26}[{}]", i + 1, p.title, p.stack))
        }));
        lines.push(DisplayLine::new(
            format!("> {} — View all source files", self.profile.source_url),
            LineStyle::Dim,
        ));
        lines
    }

    fn experience_lines(&self) -> Vec<DisplayLine> {
        let mut lines = vec![DisplayLine::new("> EMPLOYMENT RECORD:", LineStyle::Yellow)];
        for (i, exp) in self.profile.experience.iter().enumerate() {
            lines.push(DisplayLine::new(
                format!("  CASE #{:03} — {}", i + 1, exp.company),
                LineStyle::White,
            ));
            lines.push(DisplayLine::plain(format!("  ROLE: {}", exp.role)));
            lines.push(DisplayLine::plain(format!("  DURATION: {}", exp.duration)));
            lines.push(DisplayLine::plain(format!("  STACK: {}", exp.stack)));
            lines.extend(
                exp.highlights
                    .iter()
                    .map(|h| DisplayLine::new(format!("  → {}", h), LineStyle::Dim)),
            );
        }
        lines
    }

    fn contact_lines(&self) -> Vec<DisplayLine> {
        let mut lines = vec![DisplayLine::new(
            "> SIGNAL CHANNELS — OPEN FOR TRANSMISSION:",
            LineStyle::Yellow,
        )];
        lines.extend(
            self.profile
                .channels
                .iter()
                .map(|c| DisplayLine::plain(format!("  {:<9}→ {}", c.label, c.address))),
        );
        lines.push(DisplayLine::new(
            format!("> Response time: {}", self.profile.response_time),
            LineStyle::Dim,
        ));
        lines
    }

    fn status_lines(&self) -> Vec<DisplayLine> {
        let availability = &self.profile.availability;
        let mut lines = vec![DisplayLine::plain("> CHECKING AVAILABILITY...")];
        lines.extend(
            availability
                .open_to
                .iter()
                .map(|o| DisplayLine::new(format!("  ● OPEN TO: {}", o), LineStyle::Yellow)),
        );
        lines.push(DisplayLine::plain(format!(
            "  ● LOCATION: {}",
            availability.location
        )));
        lines.push(DisplayLine::plain(format!(
            "  ● NOTICE PERIOD: {}",
            availability.notice
        )));
        lines
    }
}

/// Lines printed when the console opens.
pub fn welcome_lines() -> Vec<DisplayLine> {
    let bar = "█".repeat(HELP_INNER_WIDTH + 1);
    vec![
        DisplayLine::blank(),
        DisplayLine::new(bar.clone(), LineStyle::Yellow),
        DisplayLine::new(
            "  BAT-COMPUTER INTERFACE — AUTHORIZED ACCESS ONLY  ",
            LineStyle::Yellow,
        ),
        DisplayLine::new(bar, LineStyle::Yellow),
        DisplayLine::blank(),
        DisplayLine::plain("> System online. Welcome, Detective."),
        DisplayLine::new(
            format!("> Type {} to see available commands.", highlight("help")),
            LineStyle::Dim,
        ),
        DisplayLine::blank(),
    ]
}

/// The welcome banner paired with the delay of each line.
pub fn welcome_steps() -> Vec<(DisplayLine, Duration)> {
    welcome_lines()
        .into_iter()
        .zip(WELCOME_DELAYS_MS)
        .map(|(line, delay)| (line, Duration::from_millis(delay)))
        .collect()
}

/// The single response line for an unknown command.
pub fn not_found_line(input: &str) -> DisplayLine {
    DisplayLine::new(
        format!(
            "> Command not found: \"{}\". Type {}.",
            literal(input),
            highlight("help")
        ),
        LineStyle::Red,
    )
}

fn help_lines() -> Vec<DisplayLine> {
    let title = "─ AVAILABLE COMMANDS ";
    let top = format!(
        "┌{}{}┐",
        title,
        "─".repeat(HELP_INNER_WIDTH.saturating_sub(title.width()))
    );
    let bottom = format!("└{}┘", "─".repeat(HELP_INNER_WIDTH));

    let mut lines = vec![DisplayLine::new(top, LineStyle::Yellow)];
    lines.extend(
        Command::ALL
            .iter()
            .filter(|c| **c != Command::Help)
            .map(|c| {
                let entry = format!("  {:<11}— {}", c.name(), c.summary());
                let style = if *c == Command::Gotham {
                    LineStyle::Dim
                } else {
                    LineStyle::Plain
                };
                DisplayLine::new(format!("│{}│", pad_to_width(&entry, HELP_INNER_WIDTH)), style)
            }),
    );
    lines.push(DisplayLine::new(bottom, LineStyle::Yellow));
    lines
}

fn gotham_lines() -> Vec<DisplayLine> {
    vec![
        DisplayLine::blank(),
        DisplayLine::new("  \"I am vengeance.\"", LineStyle::Yellow),
        DisplayLine::new("  \"I am the night.\"", LineStyle::Yellow),
        DisplayLine::new(
            "  \"I... am also available for senior dev roles.\"",
            LineStyle::White,
        ),
        DisplayLine::blank(),
    ]
}

/// Render a proficiency bar of `SKILL_BAR_CELLS` cells.
pub fn skill_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) / (100 / SKILL_BAR_CELLS)).min(SKILL_BAR_CELLS);
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(SKILL_BAR_CELLS - filled)
    )
}

/// Right-pad `text` with spaces to `width` display columns.
fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
