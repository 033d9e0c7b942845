//! Command line definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Terminal dossier with a hidden Bat-Computer console.
///
/// Run without a subcommand to open the dossier. Type the right name
/// anywhere on the page to wake the console.
#[derive(Debug, Parser)]
#[command(name = "batcomputer", version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one console command and print its output
    #[command(long_about = "Run one console command and print its output.\n\n\
        Lines are printed at once, without the console's staggered timing.\n\n\
        EXAMPLES:\n    \
        batcomputer run help\n    \
        batcomputer run skills --format json")]
    Run {
        /// Command line to dispatch, e.g. `whoami`
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,

        /// Output format (defaults to color on a terminal, plain otherwise)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// How `run` prints its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text with highlight markers removed
    Plain,
    /// ANSI colors per line style
    Color,
    /// One JSON document with the dispatch result
    Json,
}
