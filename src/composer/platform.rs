//! Narrow seams onto the host environment.
//!
//! The composer never talks to a terminal directly; the UI hands it an
//! implementation of these traits at each call site.

use thiserror::Error;

/// Read and clear whatever text the user currently has selected.
pub trait SelectionSource {
	/// The current selection as text; empty when nothing is selected.
	fn read_current_selection(&self) -> String;

	fn clear_selection(&mut self);
}

/// Failure to hand text to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
	#[error("no clipboard mechanism available")]
	Unavailable,
	#[error("clipboard write failed: {0}")]
	Io(#[from] std::io::Error),
}

/// Write text to the system clipboard.
pub trait Clipboard {
	fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A selection that is just a string, useful for scripted sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSelection(pub String);

impl StaticSelection {
	pub fn new(text: impl Into<String>) -> Self {
		Self(text.into())
	}
}

impl SelectionSource for StaticSelection {
	fn read_current_selection(&self) -> String {
		self.0.clone()
	}

	fn clear_selection(&mut self) {
		self.0.clear();
	}
}

/// Clipboard that keeps every write in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
	pub writes: Vec<String>,
}

impl Clipboard for MemoryClipboard {
	fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
		self.writes.push(text.to_string());
		Ok(())
	}
}
