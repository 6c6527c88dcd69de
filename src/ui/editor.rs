//! The editable message buffer.
//!
//! Wraps a [`TextArea`] and translates between the composer's raw buffer and
//! what can safely be drawn: escape characters are shown as `␛` and turned
//! back into real escapes when read.

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, TextArea};

use crate::composer::markup::{restore_escapes, visible_escapes};

pub struct Editor<'a> {
	textarea: TextArea<'a>,
	block: Block<'a>,
	selection_style: Style,
	focused: bool,
	cursor: Style,
}

impl<'a> Editor<'a> {
	pub fn new(buffer: &str, block: Block<'a>, cursor: Style, selection_style: Style) -> Self {
		let mut editor = Self {
			textarea: TextArea::default(),
			block,
			selection_style,
			focused: true,
			cursor,
		};
		editor.load(buffer);
		editor
	}

	/// Replace the content with `buffer`. The caret lands at the start.
	pub fn load(&mut self, buffer: &str) {
		let lines = visible_escapes(buffer)
			.split('\n')
			.map(str::to_string)
			.collect::<Vec<_>>();
		let mut textarea = TextArea::new(lines);
		textarea.set_block(self.block.clone());
		textarea.set_cursor_line_style(Style::default());
		textarea.set_selection_style(self.selection_style);
		self.textarea = textarea;
		self.apply_cursor_style();
	}

	/// The buffer as the composer sees it.
	pub fn text(&self) -> String {
		restore_escapes(&self.textarea.lines().join("\n")).into_owned()
	}

	/// Feed a key to the text area. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	/// Text covered by the keyboard selection, if any.
	pub fn selected_text(&self) -> Option<String> {
		let (start, end) = self.textarea.selection_range()?;
		let text = slice_range(self.textarea.lines(), start, end);
		if text.is_empty() {
			None
		} else {
			Some(restore_escapes(&text).into_owned())
		}
	}

	pub fn cancel_selection(&mut self) {
		self.textarea.cancel_selection();
	}

	pub fn caret_to_end(&mut self) {
		self.textarea.cancel_selection();
		self.textarea.move_cursor(CursorMove::Bottom);
		self.textarea.move_cursor(CursorMove::End);
	}

	/// `(row, column)` of the caret.
	pub fn cursor(&self) -> (usize, usize) {
		self.textarea.cursor()
	}

	pub fn is_focused(&self) -> bool {
		self.focused
	}

	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.apply_cursor_style();
	}

	fn apply_cursor_style(&mut self) {
		let style = if self.focused {
			self.cursor
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

/// Extract the characters between two `(row, column)` positions, end
/// exclusive. Positions may arrive in either order.
fn slice_range(lines: &[String], a: (usize, usize), b: (usize, usize)) -> String {
	let (start, end) = if a <= b { (a, b) } else { (b, a) };
	let mut out = String::new();
	for row in start.0..=end.0 {
		let Some(line) = lines.get(row) else {
			break;
		};
		let from = if row == start.0 { start.1 } else { 0 };
		let to = if row == end.0 { end.1 } else { usize::MAX };
		if row > start.0 {
			out.push('\n');
		}
		out.extend(
			line.chars()
				.skip(from)
				.take(to.saturating_sub(from)),
		);
	}
	out
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn editor(text: &str) -> Editor<'static> {
		Editor::new(text, Block::bordered(), Style::default(), Style::default())
	}

	#[test]
	fn slice_within_single_line() {
		let lines = vec!["Hello world".to_string()];
		assert_eq!(slice_range(&lines, (0, 6), (0, 11)), "world");
		assert_eq!(slice_range(&lines, (0, 11), (0, 6)), "world");
	}

	#[test]
	fn slice_across_lines() {
		let lines = vec!["abc".to_string(), "def".to_string(), "ghi".to_string()];
		assert_eq!(slice_range(&lines, (0, 1), (2, 2)), "bc\ndef\ngh");
	}

	#[test]
	fn escapes_survive_load_and_read() {
		let raw = "\u{1b}[38;2;255;0;0mred\u{1b}[0m\nnext";
		let editor = editor(raw);
		assert_eq!(editor.widget().lines()[0], "␛[38;2;255;0;0mred␛[0m");
		assert_eq!(editor.text(), raw);
	}

	#[test]
	fn shift_arrows_select_text() {
		let mut editor = editor("Hello there");
		for _ in 0..5 {
			editor.input(KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT));
		}
		assert_eq!(editor.selected_text().as_deref(), Some("Hello"));

		editor.cancel_selection();
		assert_eq!(editor.selected_text(), None);
	}

	#[test]
	fn caret_moves_to_end_of_last_line() {
		let mut editor = editor("one\ntwo words");
		editor.caret_to_end();
		assert_eq!(editor.cursor(), (1, 9));
	}
}
