//! The message composer state holder.
//!
//! [`Composer`] is the single owner of the buffer, the selection snapshot,
//! both active colours, the rendered output and every timer. The terminal
//! front-end drives it with discrete events and a periodic [`Composer::tick`].

use std::time::{Duration, Instant};

use tracing::debug;

use super::color::HexColor;
use super::feedback::{CopyFeedback, DEFAULT_FLASH, DEFAULT_RESET_DELAY};
use super::markup::{ColorChannel, bold_wrap, color_wrap};
use super::platform::{Clipboard, ClipboardError, SelectionSource};
use super::render::fence;
use super::tracker::{DEFAULT_SELECTION_DEBOUNCE, SelectionTracker};

/// Text placed in the buffer at start-up and on [`Composer::reset`].
pub const WELCOME_TEXT: &str = "Welcome to Discord Colored Text Generator!";

/// Construction parameters for a [`Composer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerOptions {
	pub welcome_text: String,
	pub initial_text: Option<String>,
	pub foreground: HexColor,
	pub background: HexColor,
	pub selection_debounce: Duration,
	pub copy_reset_delay: Duration,
	pub copied_flash: Duration,
}

impl Default for ComposerOptions {
	fn default() -> Self {
		Self {
			welcome_text: WELCOME_TEXT.to_string(),
			initial_text: None,
			foreground: HexColor::white(),
			background: HexColor::black(),
			selection_debounce: DEFAULT_SELECTION_DEBOUNCE,
			copy_reset_delay: DEFAULT_RESET_DELAY,
			copied_flash: DEFAULT_FLASH,
		}
	}
}

/// Whether a styling command changed the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
	Applied,
	NoSelection,
}

#[derive(Debug, Clone)]
pub struct Composer {
	buffer: String,
	welcome_text: String,
	foreground: HexColor,
	background: HexColor,
	rendered: Option<String>,
	selection: SelectionTracker,
	feedback: CopyFeedback,
	refocus: bool,
}

impl Default for Composer {
	fn default() -> Self {
		Self::new(ComposerOptions::default())
	}
}

impl Composer {
	pub fn new(options: ComposerOptions) -> Self {
		let buffer = options
			.initial_text
			.unwrap_or_else(|| options.welcome_text.clone());
		Self {
			buffer,
			welcome_text: options.welcome_text,
			foreground: options.foreground,
			background: options.background,
			rendered: None,
			selection: SelectionTracker::new(options.selection_debounce),
			feedback: CopyFeedback::new(options.copy_reset_delay, options.copied_flash),
			refocus: false,
		}
	}

	pub fn buffer(&self) -> &str {
		&self.buffer
	}

	/// Replace the buffer with free-typed editor content.
	pub fn set_buffer(&mut self, text: impl Into<String>) {
		self.buffer = text.into();
	}

	pub fn rendered(&self) -> Option<&str> {
		self.rendered.as_deref()
	}

	pub fn snapshot(&self) -> &str {
		self.selection.snapshot()
	}

	pub fn has_snapshot(&self) -> bool {
		self.selection.has_snapshot()
	}

	pub fn foreground(&self) -> &HexColor {
		&self.foreground
	}

	pub fn background(&self) -> &HexColor {
		&self.background
	}

	pub fn color(&self, channel: ColorChannel) -> &HexColor {
		match channel {
			ColorChannel::Foreground => &self.foreground,
			ColorChannel::Background => &self.background,
		}
	}

	pub fn set_color(&mut self, channel: ColorChannel, color: HexColor) {
		match channel {
			ColorChannel::Foreground => self.foreground = color,
			ColorChannel::Background => self.background = color,
		}
	}

	pub fn set_foreground(&mut self, color: HexColor) {
		self.set_color(ColorChannel::Foreground, color);
	}

	pub fn set_background(&mut self, color: HexColor) {
		self.set_color(ColorChannel::Background, color);
	}

	pub fn feedback(&self) -> &CopyFeedback {
		&self.feedback
	}

	pub fn welcome_text(&self) -> &str {
		&self.welcome_text
	}

	/// Record a pointer or key release against the current selection.
	pub fn observe_selection(&mut self, source: &(impl SelectionSource + ?Sized), now: Instant) {
		self.selection.observe(source, now);
	}

	/// Fire every timer that is due at `now`.
	pub fn tick(&mut self, now: Instant) {
		if self.selection.poll(now) {
			debug!(len = self.selection.snapshot().len(), "selection snapshot updated");
		}
		self.feedback.tick(now);
	}

	/// Earliest instant at which [`tick`](Self::tick) has work to do.
	pub fn next_deadline(&self) -> Option<Instant> {
		[self.selection.next_deadline(), self.feedback.next_deadline()]
			.into_iter()
			.flatten()
			.min()
	}

	/// Append the snapshot wrapped in a 24-bit colour sequence.
	pub fn apply_color(
		&mut self,
		channel: ColorChannel,
		source: &mut (impl SelectionSource + ?Sized),
	) -> ApplyOutcome {
		let rgb = self.color(channel).rgb();
		self.append_wrapped(source, |text| color_wrap(text, channel, rgb))
	}

	/// Append the snapshot wrapped in bold markers.
	pub fn apply_bold(&mut self, source: &mut (impl SelectionSource + ?Sized)) -> ApplyOutcome {
		self.append_wrapped(source, bold_wrap)
	}

	fn append_wrapped(
		&mut self,
		source: &mut (impl SelectionSource + ?Sized),
		wrap: impl FnOnce(&str) -> String,
	) -> ApplyOutcome {
		let Some(text) = self.selection.take() else {
			return ApplyOutcome::NoSelection;
		};
		let wrapped = wrap(&text);
		debug!(added = wrapped.len(), "appending styled segment");
		self.buffer.push_str(&wrapped);
		source.clear_selection();
		self.refocus = true;
		ApplyOutcome::Applied
	}

	pub fn add_line(&mut self) {
		self.buffer.push('\n');
		self.refocus = true;
	}

	/// Restore the welcome text and drop the rendered output and snapshot.
	/// Colours are left alone.
	pub fn reset(&mut self) {
		self.buffer.clone_from(&self.welcome_text);
		self.rendered = None;
		self.selection.clear();
	}

	/// Fence the current buffer. The result is not refreshed by later edits.
	pub fn generate(&mut self) -> &str {
		self.rendered.insert(fence(&self.buffer))
	}

	/// Write the rendered output to the clipboard. Returns `Ok(false)` when
	/// nothing has been generated yet.
	pub fn copy_rendered(
		&mut self,
		clipboard: &mut (impl Clipboard + ?Sized),
		now: Instant,
	) -> Result<bool, ClipboardError> {
		let Some(rendered) = self.rendered.as_deref() else {
			return Ok(false);
		};
		clipboard.write_clipboard(rendered)?;
		self.feedback.record_copy(now);
		debug!(streak = self.feedback.count(), "copied rendered output");
		Ok(true)
	}

	/// Consume a deferred request to move the caret to the end of the buffer.
	pub fn take_refocus(&mut self) -> bool {
		std::mem::take(&mut self.refocus)
	}

	/// Cancel every pending timer before the owner goes away.
	pub fn teardown(&mut self) {
		self.selection.cancel_pending();
		self.feedback.cancel();
	}
}
