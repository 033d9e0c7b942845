use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use batcomputer::cli::{Cli, Commands, ConfigCommands};
use batcomputer::logging;
use batcomputer::theme::{self, Theme};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_path) = logging::default_log_path() {
        logging::init(&log_path);
    }
    info!(version = env!("CARGO_PKG_VERSION"), "batcomputer starting");

    // `config path` and `config init` must work even with a broken config file
    let config = commands::load_config(cli.config.as_deref());
    if let Ok(config) = &config {
        let selected = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
            warn!(theme = %config.ui.theme, "unknown theme, using gotham");
            Theme::default()
        });
        theme::set_theme(selected);
    }

    match cli.command {
        None => {
            let profile = commands::load_profile(cli.profile.as_deref())?;
            commands::launch::handle(&config?, profile)
        }
        Some(Commands::Run { command, format }) => {
            let profile = commands::load_profile(cli.profile.as_deref())?;
            commands::run::handle(profile, &command, format)
        }
        Some(Commands::Config(cmd)) => {
            let path = commands::config_path(cli.config.as_deref())?;
            match cmd {
                ConfigCommands::Show => commands::config::handle_show(&config?),
                ConfigCommands::Path => commands::config::handle_path(&path),
                ConfigCommands::Init { force } => commands::config::handle_init(&path, force),
            }
        }
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}
