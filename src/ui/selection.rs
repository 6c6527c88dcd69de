//! Mouse-driven text selection over the whole screen.
//!
//! A drag is tracked in screen coordinates and resolved against the most
//! recently drawn frame, so any visible text can be picked up: the intro
//! copy, the editor, or the rendered output.

use ratatui::buffer::Buffer;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use super::editor::Editor;
use crate::composer::SelectionSource;
use crate::composer::markup::restore_escapes;

/// A drag selection in screen coordinates.
#[derive(Debug, Clone, Default)]
pub struct TextSelection {
	/// Position where the drag began (column, row).
	pub anchor: Option<(u16, u16)>,
	/// Current drag position (column, row).
	pub focus: Option<(u16, u16)>,
	/// Whether a drag is in progress.
	pub selecting: bool,
	/// Whether a finished selection exists.
	pub active: bool,
}

impl TextSelection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn start(&mut self, col: u16, row: u16) {
		self.anchor = Some((col, row));
		self.focus = Some((col, row));
		self.selecting = true;
		self.active = false;
	}

	pub fn update(&mut self, col: u16, row: u16) {
		if self.selecting {
			self.focus = Some((col, row));
		}
	}

	/// Finish the drag. A click without movement selects nothing.
	pub fn finish(&mut self) {
		self.selecting = false;
		if let (Some(anchor), Some(focus)) = (self.anchor, self.focus) {
			self.active = anchor != focus;
		}
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	pub fn has_selection(&self) -> bool {
		self.selecting || self.active
	}

	/// Selection bounds ordered so the start precedes the end in reading
	/// order. The end column is exclusive.
	pub fn normalized_bounds(&self) -> Option<((u16, u16), (u16, u16))> {
		let anchor = self.anchor?;
		let focus = self.focus?;
		let (start, end) = if (anchor.1, anchor.0) <= (focus.1, focus.0) {
			(anchor, focus)
		} else {
			(focus, anchor)
		};
		Some((start, end))
	}

	pub fn contains(&self, col: u16, row: u16) -> bool {
		let Some((start, end)) = self.normalized_bounds() else {
			return false;
		};

		if row < start.1 || row > end.1 {
			return false;
		}

		if row == start.1 && row == end.1 {
			col >= start.0 && col < end.0
		} else if row == start.1 {
			col >= start.0
		} else if row == end.1 {
			col < end.0
		} else {
			true
		}
	}
}

/// Read the selected cells of `buffer` as text. Trailing blanks on each row
/// are dropped and rows are joined with newlines.
pub fn extract_selected_text(buffer: &Buffer, selection: &TextSelection) -> Option<String> {
	if !selection.has_selection() {
		return None;
	}
	let (start, end) = selection.normalized_bounds()?;
	let area = buffer.area;
	if area.is_empty() {
		return None;
	}

	let mut rows = Vec::new();
	let last_row = end.1.min(area.bottom().saturating_sub(1));
	for row in start.1.max(area.top())..=last_row {
		let from = if row == start.1 { start.0 } else { area.left() };
		let to = if row == end.1 { end.0 } else { area.right() };
		let mut line = String::new();
		let mut col = from.max(area.left());
		while col < to.min(area.right()) {
			let Some(cell) = buffer.cell((col, row)) else {
				break;
			};
			let symbol = cell.symbol();
			line.push_str(symbol);
			col += symbol.width().max(1) as u16;
		}
		rows.push(line.trim_end().to_string());
	}

	let text = rows.join("\n");
	if text.trim().is_empty() {
		None
	} else {
		Some(restore_escapes(&text).into_owned())
	}
}

/// Paint the selected cells of `buffer` with `style`.
pub fn highlight_selection(buffer: &mut Buffer, selection: &TextSelection, style: Style) {
	let Some((start, end)) = selection.normalized_bounds() else {
		return;
	};
	let area = buffer.area;
	for row in start.1..=end.1.min(area.bottom().saturating_sub(1)) {
		for col in area.left()..area.right() {
			if selection.contains(col, row)
				&& let Some(cell) = buffer.cell_mut((col, row))
			{
				cell.set_style(style);
			}
		}
	}
}

/// The drag selection plus the last frame it is resolved against.
///
/// The selected text is read from the frame once, when the drag finishes.
/// Later frames may lay the screen out differently, so the coordinates are
/// only kept for highlighting.
#[derive(Debug, Default)]
pub struct PageSelection {
	drag: TextSelection,
	screen: Option<Buffer>,
	text: Option<String>,
}

impl PageSelection {
	/// Remember the frame that was just drawn.
	pub fn capture(&mut self, buffer: &Buffer) {
		if let Some(existing) = self.screen.as_mut()
			&& existing.area == buffer.area
		{
			existing.clone_from(buffer);
		} else {
			self.screen = Some(buffer.clone());
		}
	}

	pub fn start_drag(&mut self, col: u16, row: u16) {
		self.text = None;
		self.drag.start(col, row);
	}

	pub fn update_drag(&mut self, col: u16, row: u16) {
		self.drag.update(col, row);
	}

	/// End an in-progress drag and read its text from the captured frame.
	/// Does nothing when no drag is in progress.
	pub fn finish_drag(&mut self) {
		if !self.drag.selecting {
			return;
		}
		self.drag.finish();
		self.text = if self.drag.active {
			self.screen
				.as_ref()
				.and_then(|screen| extract_selected_text(screen, &self.drag))
		} else {
			None
		};
	}

	pub fn clear(&mut self) {
		self.drag.clear();
		self.text = None;
	}

	pub fn has_selection(&self) -> bool {
		self.drag.has_selection()
	}

	pub fn drag(&self) -> &TextSelection {
		&self.drag
	}

	/// Text of the last finished drag.
	pub fn selected_text(&self) -> Option<&str> {
		self.text.as_deref()
	}
}

/// The platform selection as the composer sees it: a finished mouse drag,
/// otherwise the editor's keyboard selection.
pub struct SelectionView<'v, 'a> {
	pub page: &'v mut PageSelection,
	pub editor: &'v mut Editor<'a>,
}

impl SelectionSource for SelectionView<'_, '_> {
	fn read_current_selection(&self) -> String {
		match self.page.selected_text() {
			Some(text) => text.to_string(),
			None => self.editor.selected_text().unwrap_or_default(),
		}
	}

	fn clear_selection(&mut self) {
		self.page.clear();
		self.editor.cancel_selection();
	}
}

#[cfg(test)]
mod tests {
	use ratatui::layout::Rect;
	use ratatui::style::Color;

	use super::*;

	fn screen(lines: &[&str]) -> Buffer {
		Buffer::with_lines(lines.iter().copied())
	}

	fn drag(from: (u16, u16), to: (u16, u16)) -> TextSelection {
		let mut selection = TextSelection::new();
		selection.start(from.0, from.1);
		selection.update(to.0, to.1);
		selection.finish();
		selection
	}

	#[test]
	fn start_update_finish() {
		let mut sel = TextSelection::new();
		assert!(!sel.has_selection());

		sel.start(10, 5);
		assert!(sel.selecting);
		assert!(!sel.active);

		sel.update(20, 5);
		assert_eq!(sel.focus, Some((20, 5)));

		sel.finish();
		assert!(!sel.selecting);
		assert!(sel.active);
	}

	#[test]
	fn click_without_drag_is_not_a_selection() {
		let mut sel = TextSelection::new();
		sel.start(10, 5);
		sel.finish();
		assert!(!sel.active);
	}

	#[test]
	fn backwards_drag_is_normalized() {
		let sel = drag((20, 7), (10, 7));
		assert_eq!(sel.normalized_bounds(), Some(((10, 7), (20, 7))));
		let sel = drag((3, 9), (40, 2));
		assert_eq!(sel.normalized_bounds(), Some(((40, 2), (3, 9))));
	}

	#[test]
	fn extracts_single_row() {
		let buffer = screen(&["│ Hello world │"]);
		let sel = drag((2, 0), (7, 0));
		assert_eq!(extract_selected_text(&buffer, &sel).as_deref(), Some("Hello"));
	}

	#[test]
	fn extracts_multiple_rows_and_trims_trailing_blanks() {
		let buffer = screen(&["first line   ", "second line  ", "third line   "]);
		let sel = drag((6, 0), (5, 2));
		assert_eq!(
			extract_selected_text(&buffer, &sel).as_deref(),
			Some("line\nsecond line\nthird")
		);
	}

	#[test]
	fn wide_characters_are_read_once() {
		let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 1));
		buffer.set_string(0, 0, "日本x", Style::default());
		let sel = drag((0, 0), (5, 0));
		assert_eq!(extract_selected_text(&buffer, &sel).as_deref(), Some("日本x"));
	}

	#[test]
	fn escape_glyphs_are_restored() {
		let buffer = screen(&["␛[0m"]);
		let sel = drag((0, 0), (4, 0));
		assert_eq!(
			extract_selected_text(&buffer, &sel).as_deref(),
			Some("\u{1b}[0m")
		);
	}

	#[test]
	fn blank_selection_reads_as_none() {
		let buffer = screen(&["          "]);
		let sel = drag((0, 0), (8, 0));
		assert_eq!(extract_selected_text(&buffer, &sel), None);
	}

	#[test]
	fn highlight_marks_only_selected_cells() {
		let mut buffer = screen(&["abcdef"]);
		let sel = drag((1, 0), (3, 0));
		let style = Style::default().bg(Color::LightBlue);
		highlight_selection(&mut buffer, &sel, style);

		assert_eq!(buffer[(0, 0)].bg, Color::Reset);
		assert_eq!(buffer[(1, 0)].bg, Color::LightBlue);
		assert_eq!(buffer[(2, 0)].bg, Color::LightBlue);
		assert_eq!(buffer[(3, 0)].bg, Color::Reset);
	}

	#[test]
	fn page_selection_reads_captured_frame() {
		let mut page = PageSelection::default();
		page.capture(&screen(&["pick me"]));
		page.start_drag(5, 0);
		page.update_drag(7, 0);
		page.finish_drag();
		assert_eq!(page.selected_text(), Some("me"));
	}

	#[test]
	fn finished_drag_text_survives_later_frames() {
		let mut page = PageSelection::default();
		page.capture(&screen(&["pick me", "       "]));
		page.start_drag(0, 0);
		page.update_drag(4, 0);
		page.finish_drag();

		page.capture(&screen(&["       ", "pick me"]));
		page.finish_drag();
		assert_eq!(page.selected_text(), Some("pick"));

		page.clear();
		assert_eq!(page.selected_text(), None);
		assert!(!page.has_selection());
	}

	#[test]
	fn click_without_drag_drops_previous_text() {
		let mut page = PageSelection::default();
		page.capture(&screen(&["pick me"]));
		page.start_drag(0, 0);
		page.update_drag(4, 0);
		page.finish_drag();

		page.start_drag(2, 0);
		page.finish_drag();
		assert_eq!(page.selected_text(), None);
	}
}
