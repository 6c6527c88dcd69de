use std::time::Instant;

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::{debug, warn};

use super::App;
use super::state::{ComposeOutcome, point_in_rect};
use crate::composer::{ApplyOutcome, ColorChannel};

/// Everything a key binding or a button can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	ApplyColor(ColorChannel),
	Bold,
	AddLine,
	Reset,
	Generate,
	Copy,
	PickSwatch(ColorChannel, usize),
	CycleSwatch(ColorChannel),
	ToggleFocus,
	Quit,
}

impl Command {
	fn from_key(key: &KeyEvent) -> Option<Self> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let command = match key.code {
			KeyCode::Esc => Self::Quit,
			KeyCode::Char('q' | 'c') if ctrl => Self::Quit,
			KeyCode::F(1) => Self::ApplyColor(ColorChannel::Foreground),
			KeyCode::F(2) => Self::ApplyColor(ColorChannel::Background),
			KeyCode::F(3) => Self::Bold,
			KeyCode::F(4) => Self::AddLine,
			KeyCode::F(5) => Self::Generate,
			KeyCode::F(6) => Self::Copy,
			KeyCode::F(8) => Self::Reset,
			KeyCode::F(9) => Self::CycleSwatch(ColorChannel::Foreground),
			KeyCode::F(10) => Self::CycleSwatch(ColorChannel::Background),
			KeyCode::Tab => Self::ToggleFocus,
			_ => return None,
		};
		Some(command)
	}
}

impl<'a> App<'a> {
	/// Process a key press. Returns the outcome once the user quits.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<ComposeOutcome> {
		match Command::from_key(&key) {
			Some(command) => {
				if let Some(outcome) = self.dispatch(command, now) {
					return Some(outcome);
				}
			}
			None if self.editor.is_focused() => {
				if self.editor.input(key) {
					self.composer.set_buffer(self.editor.text());
				}
				if self.editor.selected_text().is_some() {
					self.page.clear();
				}
			}
			None => {}
		}
		// Terminals report presses only; each handled key stands in for the
		// key release the selection tracker listens for.
		self.observe_selection(now);
		None
	}

	/// Process a mouse event. Left drags select screen text; a press and
	/// release over the same button activates it.
	pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Option<ComposeOutcome> {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(command) = self.hit_at(mouse.column, mouse.row) {
					self.pressed = Some(command);
					return None;
				}
				self.pressed = None;
				let in_editor = self
					.editor_area
					.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area));
				self.editor.set_focused(in_editor);
				self.editor.cancel_selection();
				self.page.start_drag(mouse.column, mouse.row);
			}
			MouseEventKind::Drag(MouseButton::Left) => {
				self.page.update_drag(mouse.column, mouse.row);
			}
			MouseEventKind::Up(MouseButton::Left) => {
				self.page.finish_drag();
				self.observe_selection(now);
				let pressed = self.pressed.take();
				if let Some(command) = pressed
					&& self.hit_at(mouse.column, mouse.row) == Some(command)
				{
					return self.dispatch(command, now);
				}
			}
			_ => {}
		}
		None
	}

	/// Run a command. Returns the outcome for [`Command::Quit`].
	pub fn dispatch(&mut self, command: Command, now: Instant) -> Option<ComposeOutcome> {
		debug!(?command, "dispatch");
		match command {
			Command::ApplyColor(channel) => {
				let outcome =
					self.with_selection(|composer, view| composer.apply_color(channel, view));
				if outcome == ApplyOutcome::Applied {
					self.sync_editor();
				}
			}
			Command::Bold => {
				let outcome = self.with_selection(|composer, view| composer.apply_bold(view));
				if outcome == ApplyOutcome::Applied {
					self.sync_editor();
				}
			}
			Command::AddLine => {
				self.composer.add_line();
				self.sync_editor();
			}
			Command::Reset => {
				self.composer.reset();
				self.page.clear();
				self.sync_editor();
			}
			Command::Generate => {
				self.composer.generate();
			}
			Command::Copy => {
				if let Err(err) = self.composer.copy_rendered(self.clipboard.as_mut(), now) {
					warn!(%err, "clipboard write failed");
				}
			}
			Command::PickSwatch(channel, index) => {
				if let Some(color) = self.palette.get(index).cloned() {
					self.composer.set_color(channel, color);
				}
			}
			Command::CycleSwatch(channel) => {
				if let Some(color) = self.palette.next_after(self.composer.color(channel)).cloned() {
					self.composer.set_color(channel, color);
				}
			}
			Command::ToggleFocus => {
				let focused = !self.editor.is_focused();
				self.editor.set_focused(focused);
			}
			Command::Quit => return Some(self.outcome()),
		}
		None
	}
}
