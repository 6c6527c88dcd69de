//! Escalating copy-button feedback.
//!
//! Each copy arms its own reset; the earliest one to expire zeroes the
//! streak, even if a later copy is still inside its own window.

use std::time::{Duration, Instant};

/// The counter saturates at this value.
pub const MAX_COPY_STREAK: u8 = 10;

/// Default delay before a copy's reset timer fires.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Default duration of the transient "copied" state.
pub const DEFAULT_FLASH: Duration = Duration::from_millis(1000);

/// Phrases indexed by `count - 1`. The last entry is out of reach while the
/// counter caps at [`MAX_COPY_STREAK`].
pub const STREAK_PHRASES: [&str; 11] = [
	"Copied!",
	"Double Copy!",
	"Triple Copy!",
	"Dominating!!",
	"Rampage!!",
	"Mega Copy!!",
	"Unstoppable!!",
	"Wicked Sick!!",
	"Monster Copy!!!",
	"GODLIKE!!!",
	"BEYOND GODLIKE!!!!",
];

const IDLE_LABEL: &str = "Copy text as Discord formatted";
const PLAIN_COPIED_LABEL: &str = "Copied to clipboard";

/// Counter value above which the button switches to the alarm colour.
const HIGH_WATER_MARK: u8 = 8;

/// Colour treatment for the copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
	Idle,
	Copied,
	Alarm,
}

#[derive(Debug, Clone)]
pub struct CopyFeedback {
	count: u8,
	resets: Vec<Instant>,
	copied_until: Option<Instant>,
	reset_delay: Duration,
	flash: Duration,
}

impl Default for CopyFeedback {
	fn default() -> Self {
		Self::new(DEFAULT_RESET_DELAY, DEFAULT_FLASH)
	}
}

impl CopyFeedback {
	pub fn new(reset_delay: Duration, flash: Duration) -> Self {
		Self {
			count: 0,
			resets: Vec::new(),
			copied_until: None,
			reset_delay,
			flash,
		}
	}

	pub fn count(&self) -> u8 {
		self.count
	}

	/// Register a successful copy at `now`.
	pub fn record_copy(&mut self, now: Instant) {
		self.count = self.count.saturating_add(1).min(MAX_COPY_STREAK);
		self.resets.push(now + self.reset_delay);
		self.copied_until = Some(now + self.flash);
	}

	/// Fire any reset timers that are due.
	pub fn tick(&mut self, now: Instant) {
		if self.resets.iter().any(|deadline| *deadline <= now) {
			self.count = 0;
			self.resets.retain(|deadline| *deadline > now);
		}
		if self.copied_until.is_some_and(|until| until <= now) {
			self.copied_until = None;
		}
	}

	/// Drop every outstanding timer.
	pub fn cancel(&mut self) {
		self.resets.clear();
		self.copied_until = None;
	}

	pub fn is_copied(&self, now: Instant) -> bool {
		self.copied_until.is_some_and(|until| until > now)
	}

	/// Earliest pending reset or end of the copied flash.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.resets.iter().copied().chain(self.copied_until).min()
	}

	pub fn pending_timers(&self) -> usize {
		self.resets.len()
	}

	pub fn label(&self, now: Instant) -> &'static str {
		if !self.is_copied(now) {
			return IDLE_LABEL;
		}
		match self.count {
			0 => PLAIN_COPIED_LABEL,
			count => STREAK_PHRASES[usize::from(count) - 1],
		}
	}

	pub fn tooltip(&self, now: Instant) -> &'static str {
		if self.is_copied(now) { "Copied" } else { "Copy" }
	}

	pub fn tone(&self, now: Instant) -> FeedbackTone {
		if self.count > HIGH_WATER_MARK {
			FeedbackTone::Alarm
		} else if self.is_copied(now) {
			FeedbackTone::Copied
		} else {
			FeedbackTone::Idle
		}
	}
}
