//! Core state container for the terminal front-end.
//!
//! [`App`] owns the [`Composer`] together with the widgets that mirror it:
//! the editor, the page selection and the clickable regions recorded during
//! the last draw.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::widgets::Block;
use serde::Serialize;

use super::actions::Command;
use super::clipboard::TerminalClipboard;
use super::config::SessionConfig;
use super::editor::Editor;
use super::palette::Palette;
use super::selection::{PageSelection, SelectionView};
use super::style::Theme;
use crate::composer::{Clipboard, Composer};

/// What the session produced when the user left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposeOutcome {
	pub buffer: String,
	pub rendered: Option<String>,
}

/// A clickable region recorded while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HitTarget {
	pub area: Rect,
	pub command: Command,
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.composer.teardown();
	}
}

pub struct App<'a> {
	pub composer: Composer,
	pub(crate) editor: Editor<'a>,
	pub(crate) page: PageSelection,
	pub(crate) palette: Palette,
	pub theme: Theme,
	pub(crate) mouse: bool,
	pub(crate) hits: Vec<HitTarget>,
	pub(crate) editor_area: Option<Rect>,
	pub(crate) pressed: Option<Command>,
	pub(crate) clipboard: Box<dyn Clipboard>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] that copies through the terminal clipboard.
	pub fn new(config: SessionConfig) -> Self {
		Self::with_clipboard(config, Box::new(TerminalClipboard))
	}

	pub fn with_clipboard(config: SessionConfig, clipboard: Box<dyn Clipboard>) -> Self {
		let theme = Theme::default();
		let composer = Composer::new(config.composer);
		let block = Block::bordered()
			.title("Message")
			.border_style(theme.border);
		let editor = Editor::new(composer.buffer(), block, theme.cursor, theme.selection);
		Self {
			composer,
			editor,
			page: PageSelection::default(),
			palette: Palette::new(config.ui.swatches),
			theme,
			mouse: config.ui.mouse,
			hits: Vec::new(),
			editor_area: None,
			pressed: None,
			clipboard,
		}
	}

	/// Drive timers and deferred work. Called once per loop iteration.
	pub fn tick(&mut self, now: Instant) {
		self.composer.tick(now);
		if self.composer.take_refocus() {
			self.editor.caret_to_end();
			self.editor.set_focused(true);
		}
	}

	/// Snapshot of the session for the caller of [`run`](super::run).
	pub fn outcome(&self) -> ComposeOutcome {
		ComposeOutcome {
			buffer: self.composer.buffer().to_string(),
			rendered: self.composer.rendered().map(str::to_string),
		}
	}

	pub fn mouse_enabled(&self) -> bool {
		self.mouse
	}

	/// Text currently shown in the editor, escapes restored.
	pub fn editor_text(&self) -> String {
		self.editor.text()
	}

	/// Run `op` against the composer with the live page selection.
	pub(crate) fn with_selection<R>(
		&mut self,
		op: impl FnOnce(&mut Composer, &mut SelectionView<'_, 'a>) -> R,
	) -> R {
		let mut view = SelectionView {
			page: &mut self.page,
			editor: &mut self.editor,
		};
		op(&mut self.composer, &mut view)
	}

	/// Pointer or key release: let the composer look at the selection.
	pub(crate) fn observe_selection(&mut self, now: Instant) {
		let view = SelectionView {
			page: &mut self.page,
			editor: &mut self.editor,
		};
		self.composer.observe_selection(&view, now);
	}

	/// Reload the editor after the composer changed the buffer.
	pub(crate) fn sync_editor(&mut self) {
		self.editor.load(self.composer.buffer());
	}

	pub(crate) fn hit_at(&self, column: u16, row: u16) -> Option<Command> {
		self.hits
			.iter()
			.find(|hit| point_in_rect(column, row, hit.area))
			.map(|hit| hit.command)
	}
}

pub(crate) fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	column >= area.x
		&& column < area.x.saturating_add(area.width)
		&& row >= area.y
		&& row < area.y.saturating_add(area.height)
}
