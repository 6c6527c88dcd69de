//! Colour scheme for the composer screen.

use ratatui::style::{Color, Modifier, Style};

use crate::composer::FeedbackTone;

/// Styles for the fixed chrome of the composer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Page title.
	pub title: Style,
	/// Secondary text such as the footer.
	pub dimmed: Style,
	/// Card and pane borders.
	pub border: Style,
	/// Labels like "FG" and "Selected Text:".
	pub label: Style,
	/// Primary action buttons.
	pub button: Style,
	/// Destructive actions and the alarm state of the copy button.
	pub button_danger: Style,
	/// Copy button while the copied flash is showing.
	pub button_copied: Style,
	/// Buttons whose action currently has nothing to act on.
	pub button_disabled: Style,
	/// Screen text under a mouse selection.
	pub selection: Style,
	/// Editor caret while focused.
	pub cursor: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			title: Style::new().add_modifier(Modifier::BOLD),
			dimmed: Style::new().fg(Color::DarkGray),
			border: Style::new().fg(Color::Gray),
			label: Style::new().add_modifier(Modifier::BOLD),
			button: Style::new().fg(Color::White).bg(Color::Blue),
			button_danger: Style::new().fg(Color::White).bg(Color::Red),
			button_copied: Style::new().fg(Color::Black).bg(Color::Cyan),
			button_disabled: Style::new().fg(Color::DarkGray).bg(Color::Black),
			selection: Style::new().bg(Color::LightBlue).fg(Color::Black),
			cursor: Style::new().add_modifier(Modifier::REVERSED),
		}
	}
}

impl Theme {
	/// Style for the copy button given the current feedback tone.
	#[must_use]
	pub fn copy_button(&self, tone: FeedbackTone) -> Style {
		match tone {
			FeedbackTone::Idle => self.button,
			FeedbackTone::Copied => self.button_copied,
			FeedbackTone::Alarm => self.button_danger,
		}
	}

	/// Pick the enabled or disabled button style.
	#[must_use]
	pub fn button_when(&self, enabled: bool) -> Style {
		if enabled { self.button } else { self.button_disabled }
	}
}
