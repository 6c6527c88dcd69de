use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::crossterm::execute;
use tracing::info;

use super::App;
use super::config::SessionConfig;
use super::state::ComposeOutcome;

/// Longest pause between loop iterations.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Construct an [`App`] for the provided configuration and run it to
/// completion.
pub fn run(config: SessionConfig) -> Result<ComposeOutcome> {
	let mut app = App::new(config);
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<ComposeOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		if self.mouse_enabled() {
			execute!(io::stdout(), EnableMouseCapture)?;
		}
		info!("composer session started");

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<ComposeOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				let now = Instant::now();
				let outcome = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
					Event::Mouse(mouse) => self.handle_mouse(mouse, now),
					_ => None,
				};
				if outcome.is_some() {
					maybe_outcome = outcome;
					break;
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			// Deferred work (debounced selection, caret refocus, copy streak
			// reset) runs after events so the editor already holds new text.
			self.tick(Instant::now());

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(idle_time(self.composer.next_deadline(), Instant::now()));
		};

		self.composer.teardown();
		if self.mouse_enabled() {
			let _ = execute!(io::stdout(), DisableMouseCapture);
		}
		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		info!("composer session ended");
		result
	}
}

/// How long the loop may sleep before the next frame or composer deadline.
fn idle_time(deadline: Option<Instant>, now: Instant) -> Duration {
	deadline.map_or(FRAME_INTERVAL, |deadline| {
		deadline.saturating_duration_since(now).min(FRAME_INTERVAL)
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn idle_time_wakes_for_near_deadlines() {
		let now = Instant::now();
		assert_eq!(idle_time(None, now), FRAME_INTERVAL);
		assert_eq!(
			idle_time(Some(now + Duration::from_millis(5)), now),
			Duration::from_millis(5)
		);
		assert_eq!(idle_time(Some(now + Duration::from_secs(2)), now), FRAME_INTERVAL);
		assert_eq!(idle_time(Some(now), now + Duration::from_millis(1)), Duration::ZERO);
	}
}
