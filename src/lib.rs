//! Core crate exports for composing ANSI-coloured Discord messages.
//!
//! The root module re-exports the composer and the terminal front-end so the
//! binary (and embedders) can build a session without digging through the
//! module hierarchy.

pub mod app_dirs;
pub mod composer;
pub mod logging;
pub mod ui;

pub use composer::{
	ApplyOutcome, Clipboard, ClipboardError, ColorChannel, Composer, ComposerOptions, HexColor,
	SelectionSource, WELCOME_TEXT,
};
pub use ui::{App, ComposeOutcome, SessionConfig, Theme, UiConfig, run};
