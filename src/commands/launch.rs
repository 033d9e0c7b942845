//! Interactive dossier launcher

use anyhow::{bail, Result};
use tracing::info;

use batcomputer::console::CommandTable;
use batcomputer::tui::{App, DossierApp, TuiApp};
use batcomputer::{Config, Console, Profile};

/// Open the dossier TUI.
pub fn handle(config: &Config, profile: Profile) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("The dossier needs a terminal. Use `batcomputer run <command>` for plain output.");
    }

    let console = Console::new(CommandTable::new(profile), config.console.timing());
    let app = App::new(config.tick_rate())?;
    let mut dossier = DossierApp::new(app, console);
    info!("dossier opened");
    dossier.run()
}
