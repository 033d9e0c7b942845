//! The hidden Bat-Computer command console.
//!
//! - `activation`: rolling keystroke window that detects the phrase
//! - `commands`: command table and canned responses
//! - `line`: display line model with inline highlight markers
//! - `render`: staggered, cancellable line rendering
//! - `session`: the console state machine tying it together

pub mod activation;
pub mod commands;
pub mod line;
pub mod render;
pub mod session;

pub use activation::{ActivationBuffer, ACTIVATION_PHRASE};
pub use commands::{skill_bar, Command, CommandTable, Dispatch, Effect, PROMPT};
pub use line::{literal, DisplayLine, LineStyle};
pub use render::{RenderQueue, SequenceId};
pub use session::{Console, ConsoleTiming};
