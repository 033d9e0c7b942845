//! Bat-Computer: a terminal portfolio dossier with a hidden command console.
//!
//! Library crate shared by the `batcomputer` binary, the integration tests
//! and `xtask`.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod console;
pub mod logging;
pub mod profile;
pub mod tui;

pub use config::Config;
pub use console::{Console, ConsoleTiming};
pub use profile::Profile;
pub use tui::theme;
