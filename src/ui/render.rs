use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::App;
use super::actions::Command;
use super::selection::highlight_selection;
use super::state::HitTarget;
use crate::composer::ColorChannel;
use crate::composer::markup::visible_escapes;

const TITLE: &str = "Discord Colored Text Generator";
const INTRO: [&str; 2] = [
	"This is a simple app that creates colored Discord messages using the ANSI color codes available on the latest Discord desktop versions.",
	"To use this, write your text, select parts of it and assign colors to them, then copy it using the button below, and send in a Discord message.",
];
const DISCLAIMER: &str = "This is an unofficial tool, it is not made or endorsed by Discord.";
const KEY_LEGEND: &str = "F1 FG · F2 BG · F3 Bold · F4 Line · F5 Generate · F6 Copy · F8 Reset · F9/F10 Swatch · Tab Focus · Esc Quit";
const RENDERED_TITLE: &str = "Formatted Text (Copy this to Discord)";

/// Tallest the rendered-output pane grows, borders included.
const MAX_RENDERED_HEIGHT: u16 = 8;
/// Tallest the "Selected Text:" card grows, borders included.
const MAX_SNAPSHOT_HEIGHT: u16 = 6;

/// A labelled button laid out in a row.
struct Button {
	label: String,
	style: Style,
	command: Option<Command>,
}

impl Button {
	fn new(label: impl Into<String>, style: Style, command: Option<Command>) -> Self {
		Self {
			label: label.into(),
			style,
			command,
		}
	}

	fn width(&self) -> u16 {
		(self.label.width() + 2) as u16
	}
}

impl App<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		self.hits.clear();
		let now = Instant::now();

		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [title, _, intro, card, footer] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(4),
			Constraint::Min(12),
			Constraint::Length(2),
		])
		.areas(area);

		frame.render_widget(
			Paragraph::new(TITLE)
				.style(self.theme.title)
				.alignment(Alignment::Center),
			title,
		);
		frame.render_widget(
			Paragraph::new(INTRO.iter().map(|text| Line::from(*text)).collect::<Vec<_>>())
				.wrap(Wrap { trim: true }),
			intro,
		);

		self.draw_card(frame, card, now);

		frame.render_widget(
			Paragraph::new(vec![
				Line::styled(DISCLAIMER, self.theme.dimmed),
				Line::styled(KEY_LEGEND, self.theme.dimmed),
			])
			.alignment(Alignment::Center),
			footer,
		);

		if self.page.has_selection() {
			highlight_selection(frame.buffer_mut(), self.page.drag(), self.theme.selection);
		}
		self.page.capture(frame.buffer_mut());
	}

	fn draw_card(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
		let block = Block::bordered()
			.title(Span::styled("Create your text", self.theme.label))
			.border_style(self.theme.border);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let snapshot_height = if self.composer.has_snapshot() {
			bordered_height(self.composer.snapshot(), MAX_SNAPSHOT_HEIGHT)
		} else {
			0
		};
		let rendered_height = self
			.composer
			.rendered()
			.map_or(0, |text| bordered_height(text, MAX_RENDERED_HEIGHT) + 1);
		let [buttons, _, pickers, snapshot, editor, generate, rendered] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(4),
			Constraint::Length(snapshot_height),
			Constraint::Min(3),
			Constraint::Length(1),
			Constraint::Length(rendered_height),
		])
		.areas(inner);

		let has_snapshot = self.composer.has_snapshot();
		self.draw_buttons(
			frame,
			buttons,
			vec![
				Button::new("Reset All", self.theme.button_danger, Some(Command::Reset)),
				Button::new(
					"Bold",
					self.theme.button_when(has_snapshot),
					has_snapshot.then_some(Command::Bold),
				),
				Button::new("Line", self.theme.button, Some(Command::AddLine)),
			],
			Alignment::Left,
		);

		let [fg, bg] =
			Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(pickers);
		self.draw_picker(frame, fg, ColorChannel::Foreground);
		self.draw_picker(frame, bg, ColorChannel::Background);

		if has_snapshot {
			let block = Block::bordered()
				.title(Span::styled("Selected Text:", self.theme.label))
				.border_style(self.theme.border);
			let text = visible_escapes(self.composer.snapshot()).into_owned();
			frame.render_widget(Paragraph::new(text).block(block), snapshot);
		}

		self.editor_area = Some(editor);
		frame.render_widget(self.editor.widget(), editor);

		self.draw_buttons(
			frame,
			generate,
			vec![Button::new(
				"Generate Formatted Text",
				self.theme.button,
				Some(Command::Generate),
			)],
			Alignment::Center,
		);

		if let Some(text) = self.composer.rendered() {
			let text = visible_escapes(text).into_owned();
			let [pane, copy] =
				Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(rendered);
			let block = Block::bordered()
				.title(Span::styled(RENDERED_TITLE, self.theme.label))
				.border_style(self.theme.border);
			frame.render_widget(Paragraph::new(text).block(block), pane);

			let feedback = self.composer.feedback();
			let label = feedback.label(now);
			let style = self.theme.copy_button(feedback.tone(now));
			let tooltip = feedback.tooltip(now);
			self.draw_buttons(
				frame,
				copy,
				vec![Button::new(label, style, Some(Command::Copy))],
				Alignment::Center,
			);
			let hint = Span::styled(tooltip, self.theme.dimmed);
			let hint_width = tooltip.width() as u16;
			if copy.width > hint_width {
				let hint_area = Rect {
					x: copy.right() - hint_width,
					width: hint_width,
					..copy
				};
				frame.render_widget(Paragraph::new(Line::from(hint)), hint_area);
			}
		}
	}

	fn draw_picker(&mut self, frame: &mut Frame, area: Rect, channel: ColorChannel) {
		let [header, swatches, _, apply] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.areas(area);

		let current = self.composer.color(channel).clone();
		let sample = match channel {
			ColorChannel::Foreground => Style::new().fg(current.rgb().into()),
			ColorChannel::Background => Style::new().bg(current.rgb().into()),
		};
		frame.render_widget(
			Paragraph::new(Line::from(vec![
				Span::styled(channel.label(), self.theme.label),
				Span::raw(" "),
				Span::raw(current.to_string()),
				Span::raw(" "),
				Span::styled(" Aa ", sample),
			])),
			header,
		);

		let mut spans = Vec::new();
		let mut x = swatches.x;
		for (index, swatch) in self.palette.swatches().iter().enumerate() {
			if x + 4 > swatches.right() {
				break;
			}
			let selected = *swatch == current;
			let (open, close) = if selected { ("[", "]") } else { (" ", " ") };
			spans.push(Span::styled(open, self.theme.label));
			spans.push(Span::styled("██", Style::new().fg(swatch.rgb().into())));
			spans.push(Span::styled(close, self.theme.label));
			self.hits.push(HitTarget {
				area: Rect::new(x, swatches.y, 4, 1),
				command: Command::PickSwatch(channel, index),
			});
			x += 4;
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), swatches);

		let enabled = self.composer.has_snapshot();
		let label = match channel {
			ColorChannel::Foreground => "Apply Foreground",
			ColorChannel::Background => "Apply Background",
		};
		self.draw_buttons(
			frame,
			apply,
			vec![Button::new(
				label,
				self.theme.button_when(enabled),
				enabled.then_some(Command::ApplyColor(channel)),
			)],
			Alignment::Left,
		);
	}

	/// Lay buttons out in a single row and record their hit areas.
	fn draw_buttons(
		&mut self,
		frame: &mut Frame,
		area: Rect,
		buttons: Vec<Button>,
		alignment: Alignment,
	) {
		if area.height == 0 {
			return;
		}
		let total: u16 = buttons.iter().map(|button| button.width() + 1).sum::<u16>().saturating_sub(1);
		let mut x = match alignment {
			Alignment::Center => area.x + area.width.saturating_sub(total) / 2,
			Alignment::Right => area.x + area.width.saturating_sub(total),
			Alignment::Left => area.x,
		};

		for button in buttons {
			let width = button.width().min(area.right().saturating_sub(x));
			if width == 0 {
				break;
			}
			let rect = Rect::new(x, area.y, width, 1);
			let style = button.style.add_modifier(Modifier::BOLD);
			frame.render_widget(
				Paragraph::new(Span::styled(format!(" {} ", button.label), style)),
				rect,
			);
			if let Some(command) = button.command {
				self.hits.push(HitTarget { area: rect, command });
			}
			x = x.saturating_add(width + 1);
		}
	}
}

/// Rows needed to show `text` inside a bordered block, capped at `max`.
fn bordered_height(text: &str, max: u16) -> u16 {
	let lines = u16::try_from(text.lines().count()).unwrap_or(u16::MAX);
	lines.max(1).saturating_add(2).min(max)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bordered_height_fits_text_and_caps() {
		assert_eq!(bordered_height("one", 6), 3);
		assert_eq!(bordered_height("one\ntwo\nthree", 6), 5);
		assert_eq!(bordered_height("", 6), 3);
		let huge = "x\n".repeat(70_000);
		assert_eq!(bordered_height(&huge, MAX_RENDERED_HEIGHT), MAX_RENDERED_HEIGHT);
	}
}
