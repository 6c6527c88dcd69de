//! Terminal-independent message composition.
//!
//! Everything needed to build a styled Discord message lives here: colour
//! parsing, the escape/markdown wrappers, the fenced renderer, the debounced
//! selection snapshot and the copy-feedback streak. The [`Composer`] ties
//! them together behind the [`SelectionSource`] and [`Clipboard`] seams so
//! the whole flow can be driven without a terminal.

mod color;
mod debounce;
mod feedback;
pub mod markup;
mod platform;
mod render;
mod state;
mod tracker;

pub use color::{ColorError, HexColor, Rgb};
pub use debounce::Debouncer;
pub use feedback::{
	CopyFeedback, DEFAULT_FLASH, DEFAULT_RESET_DELAY, FeedbackTone, MAX_COPY_STREAK,
	STREAK_PHRASES,
};
pub use markup::{ColorChannel, bold_wrap, color_wrap};
pub use platform::{Clipboard, ClipboardError, MemoryClipboard, SelectionSource, StaticSelection};
pub use render::{FENCE_LANGUAGE, fence};
pub use state::{ApplyOutcome, Composer, ComposerOptions, WELCOME_TEXT};
pub use tracker::{DEFAULT_SELECTION_DEBOUNCE, SelectionTracker};
