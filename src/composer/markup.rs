//! Escape-sequence and markdown wrappers spliced around selected text.

use std::borrow::Cow;

use super::color::Rgb;

/// The ASCII escape control character that opens every SGR sequence.
pub const ESC: char = '\u{1b}';

/// Resets every SGR attribute.
pub const SGR_RESET: &str = "\u{1b}[0m";

/// Discord markdown bold delimiter.
pub const BOLD_MARKER: &str = "**";

/// Printable stand-in for [`ESC`] (SYMBOL FOR ESCAPE).
pub const ESC_GLYPH: char = '\u{241b}';

/// Which SGR colour slot a wrap targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
	Foreground,
	Background,
}

impl ColorChannel {
	/// The SGR parameter selecting 24-bit colour for this channel.
	pub fn sgr_code(self) -> u8 {
		match self {
			Self::Foreground => 38,
			Self::Background => 48,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Foreground => "FG",
			Self::Background => "BG",
		}
	}
}

/// Wrap `text` in a 24-bit colour SGR sequence followed by a reset.
pub fn color_wrap(text: &str, channel: ColorChannel, rgb: Rgb) -> String {
	format!(
		"{ESC}[{};2;{};{};{}m{text}{SGR_RESET}",
		channel.sgr_code(),
		rgb.r,
		rgb.g,
		rgb.b
	)
}

/// Wrap `text` between a pair of bold markers.
pub fn bold_wrap(text: &str) -> String {
	format!("{BOLD_MARKER}{text}{BOLD_MARKER}")
}

/// Replace raw escape characters with [`ESC_GLYPH`] so they can be drawn.
pub fn visible_escapes(text: &str) -> Cow<'_, str> {
	if text.contains(ESC) {
		Cow::Owned(text.replace(ESC, &ESC_GLYPH.to_string()))
	} else {
		Cow::Borrowed(text)
	}
}

/// Inverse of [`visible_escapes`].
pub fn restore_escapes(text: &str) -> Cow<'_, str> {
	if text.contains(ESC_GLYPH) {
		Cow::Owned(text.replace(ESC_GLYPH, &ESC.to_string()))
	} else {
		Cow::Borrowed(text)
	}
}
