use std::time::{Duration, Instant};

use super::debounce::Debouncer;
use super::platform::SelectionSource;

/// Default quiescence window before a selection change is recorded.
pub const DEFAULT_SELECTION_DEBOUNCE: Duration = Duration::from_millis(100);

/// Keeps a debounced snapshot of the most recent non-empty selection.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
	snapshot: String,
	pending: Debouncer<String>,
}

impl Default for SelectionTracker {
	fn default() -> Self {
		Self::new(DEFAULT_SELECTION_DEBOUNCE)
	}
}

impl SelectionTracker {
	pub fn new(debounce: Duration) -> Self {
		Self {
			snapshot: String::new(),
			pending: Debouncer::new(debounce),
		}
	}

	/// React to a pointer or key release. Empty selections are ignored so the
	/// previous snapshot survives clicks on buttons.
	pub fn observe(&mut self, source: &(impl SelectionSource + ?Sized), now: Instant) {
		let text = source.read_current_selection();
		if !text.is_empty() {
			self.pending.schedule(text, now);
		}
	}

	/// Promote a due pending selection into the snapshot. Returns `true` when
	/// the snapshot changed.
	pub fn poll(&mut self, now: Instant) -> bool {
		match self.pending.fire(now) {
			Some(text) => {
				self.snapshot = text;
				true
			}
			None => false,
		}
	}

	pub fn snapshot(&self) -> &str {
		&self.snapshot
	}

	pub fn has_snapshot(&self) -> bool {
		!self.snapshot.is_empty()
	}

	/// Hand out the snapshot and clear it. A pending update is dropped too.
	pub fn take(&mut self) -> Option<String> {
		self.pending.cancel();
		if self.snapshot.is_empty() {
			None
		} else {
			Some(std::mem::take(&mut self.snapshot))
		}
	}

	pub fn clear(&mut self) {
		self.pending.cancel();
		self.snapshot.clear();
	}

	pub fn cancel_pending(&mut self) {
		self.pending.cancel();
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_pending()
	}

	pub fn next_deadline(&self) -> Option<Instant> {
		self.pending.deadline()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::composer::platform::StaticSelection;

	#[test]
	fn snapshot_updates_after_debounce_window() {
		let start = Instant::now();
		let mut tracker = SelectionTracker::default();
		tracker.observe(&StaticSelection::new("Hello"), start);
		assert!(!tracker.has_snapshot());
		assert!(tracker.is_pending());

		assert!(!tracker.poll(start + Duration::from_millis(50)));
		assert!(tracker.poll(start + DEFAULT_SELECTION_DEBOUNCE));
		assert_eq!(tracker.snapshot(), "Hello");
	}

	#[test]
	fn empty_selection_keeps_previous_snapshot() {
		let start = Instant::now();
		let mut tracker = SelectionTracker::default();
		tracker.observe(&StaticSelection::new("keep"), start);
		tracker.poll(start + DEFAULT_SELECTION_DEBOUNCE);

		tracker.observe(&StaticSelection::default(), start + Duration::from_secs(1));
		assert!(!tracker.is_pending());
		assert_eq!(tracker.snapshot(), "keep");
	}

	#[test]
	fn rapid_changes_produce_single_update() {
		let start = Instant::now();
		let mut tracker = SelectionTracker::default();
		tracker.observe(&StaticSelection::new("H"), start);
		tracker.observe(&StaticSelection::new("He"), start + Duration::from_millis(30));
		tracker.observe(&StaticSelection::new("Hel"), start + Duration::from_millis(60));

		assert!(!tracker.poll(start + Duration::from_millis(120)));
		assert!(tracker.poll(start + Duration::from_millis(160)));
		assert_eq!(tracker.snapshot(), "Hel");
	}

	#[test]
	fn take_consumes_snapshot_and_pending_update() {
		let start = Instant::now();
		let mut tracker = SelectionTracker::default();
		tracker.observe(&StaticSelection::new("one"), start);
		tracker.poll(start + DEFAULT_SELECTION_DEBOUNCE);
		tracker.observe(&StaticSelection::new("two"), start + Duration::from_millis(150));

		assert_eq!(tracker.take().as_deref(), Some("one"));
		assert!(!tracker.has_snapshot());
		assert!(!tracker.poll(start + Duration::from_secs(5)));
		assert_eq!(tracker.take(), None);
	}
}
