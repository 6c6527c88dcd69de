//! Interactive terminal UI for composing a message.
//!
//! [`App`] wraps the [`Composer`](crate::composer::Composer) with an editor,
//! colour pickers and buttons. The remaining submodules implement the event
//! loop, rendering, screen-wide text selection and clipboard access.

mod actions;
mod clipboard;
mod config;
mod editor;
mod palette;
mod render;
mod runtime;
mod selection;
mod state;
mod style;

pub use actions::Command;
pub use clipboard::{TerminalClipboard, osc52_sequence};
pub use config::{DEFAULT_SWATCHES, SessionConfig, UiConfig};
pub use runtime::run;
pub use state::{App, ComposeOutcome};
pub use style::Theme;
