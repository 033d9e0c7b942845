//! Subcommand handlers for the `batcomputer` binary.

pub mod completions;
pub mod config;
pub mod launch;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use batcomputer::{Config, Profile};

/// The config file in effect: `--config` or the default location.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Load the effective configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = config_path(explicit)?;
    debug!(path = %path.display(), "loading config");
    Ok(Config::load_from(&path)?)
}

/// Load the dossier profile.
///
/// An explicit `--profile` must exist; the default location falls back to
/// the built-in profile.
pub fn load_profile(explicit: Option<&Path>) -> Result<Profile> {
    match explicit {
        Some(path) => Profile::load(path).context("Failed to load --profile"),
        None => match Config::profile_path() {
            Ok(path) => Ok(Profile::load_or_default(&path)?),
            Err(_) => Ok(Profile::default()),
        },
    }
}
