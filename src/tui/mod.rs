//! Terminal front end for the dossier
//!
//! Terminal-based UI components using ratatui/crossterm: the dossier page,
//! the console overlay and shared layout helpers.

pub mod app;
pub mod console_view;
pub mod dossier_app;
pub mod theme;
pub mod ui;

pub use app::{App, TuiApp};
pub use dossier_app::{DossierApp, DossierState, Mode};
