use std::time::{Duration, Instant};

/// Trailing-edge debouncer driven by explicit timestamps.
///
/// Every [`schedule`](Self::schedule) replaces the pending value and pushes
/// the deadline out to `now + wait`; [`fire`](Self::fire) yields the value once
/// the window has been quiet for `wait`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	wait: Duration,
	pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
	pub fn new(wait: Duration) -> Self {
		Self {
			wait,
			pending: None,
		}
	}

	pub fn schedule(&mut self, value: T, now: Instant) {
		self.pending = Some((value, now + self.wait));
	}

	/// Take the pending value if its deadline has passed.
	pub fn fire(&mut self, now: Instant) -> Option<T> {
		if self.deadline().is_some_and(|deadline| deadline <= now) {
			return self.pending.take().map(|(value, _)| value);
		}
		None
	}

	pub fn cancel(&mut self) {
		self.pending = None;
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|(_, deadline)| *deadline)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const WAIT: Duration = Duration::from_millis(100);

	#[test]
	fn fires_only_after_quiet_window() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(WAIT);
		debouncer.schedule("a", start);

		assert_eq!(debouncer.fire(start + Duration::from_millis(99)), None);
		assert_eq!(debouncer.fire(start + WAIT), Some("a"));
		assert!(!debouncer.is_pending());
		assert_eq!(debouncer.fire(start + WAIT * 2), None);
	}

	#[test]
	fn rapid_schedules_collapse_to_latest() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(WAIT);
		debouncer.schedule("first", start);
		debouncer.schedule("second", start + Duration::from_millis(60));
		debouncer.schedule("third", start + Duration::from_millis(120));

		assert_eq!(debouncer.fire(start + Duration::from_millis(200)), None);
		assert_eq!(
			debouncer.deadline(),
			Some(start + Duration::from_millis(220))
		);
		assert_eq!(
			debouncer.fire(start + Duration::from_millis(220)),
			Some("third")
		);
	}

	#[test]
	fn cancel_drops_pending_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(WAIT);
		debouncer.schedule(1, start);
		debouncer.cancel();
		assert_eq!(debouncer.fire(start + WAIT * 10), None);
		assert_eq!(debouncer.deadline(), None);
	}
}
