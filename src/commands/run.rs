//! Headless console command runner
//!
//! Resolves one console command and prints its lines immediately, with no
//! staggered timing.

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use batcomputer::cli::OutputFormat;
use batcomputer::console::{CommandTable, Dispatch, DisplayLine, Effect};
use batcomputer::theme::{current_theme, Theme};
use batcomputer::Profile;

/// JSON shape of a dispatch.
#[derive(Debug, Serialize)]
struct RunOutput<'a> {
    input: &'a str,
    command: Option<&'static str>,
    found: bool,
    effect: Effect,
    lines: &'a [DisplayLine],
}

/// Run `words` as one console command line.
pub fn handle(profile: Profile, words: &[String], format: Option<OutputFormat>) -> Result<()> {
    let format = format.unwrap_or_else(|| {
        if atty::is(atty::Stream::Stdout) {
            OutputFormat::Color
        } else {
            OutputFormat::Plain
        }
    });

    let table = CommandTable::new(profile);
    let Some(dispatch) = table.dispatch(&words.join(" ")) else {
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_dispatch(&mut out, &dispatch, format, &current_theme())?;
    out.flush()?;
    Ok(())
}

/// Write the response lines of `dispatch` in `format`.
fn write_dispatch(
    out: &mut impl Write,
    dispatch: &Dispatch,
    format: OutputFormat,
    theme: &Theme,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for line in &dispatch.lines {
                writeln!(out, "{}", line.plain_text())?;
            }
        }
        OutputFormat::Color => {
            for line in &dispatch.lines {
                writeln!(out, "{}", colorize(line, theme))?;
            }
        }
        OutputFormat::Json => {
            let output = RunOutput {
                input: &dispatch.input,
                command: dispatch.command.map(|c| c.name()),
                found: dispatch.command.is_some(),
                effect: dispatch.effect,
                lines: &dispatch.lines,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

fn colorize(line: &DisplayLine, theme: &Theme) -> String {
    line.segments()
        .into_iter()
        .map(|(text, highlighted)| {
            if highlighted {
                theme.accent_text(&text)
            } else {
                theme.line_text(line.style, &text)
            }
        })
        .collect()
}
