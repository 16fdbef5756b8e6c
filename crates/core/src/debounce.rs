//! Cancellable deadline used to collapse bursts of input into one action.
//!
//! The debounce never reads the clock itself: callers pass `now` into every
//! method, which keeps the event loop in charge of time and lets tests step
//! through bursts deterministically.

use std::time::{Duration, Instant};

/// A single scheduled task that is replaced by every new schedule call.
#[derive(Debug, Clone)]
pub struct Debounce {
	interval: Duration,
	deadline: Option<Instant>,
}

impl Debounce {
	/// Create an idle debounce with the given quiet interval.
	#[must_use]
	pub const fn new(interval: Duration) -> Self {
		Self {
			interval,
			deadline: None,
		}
	}

	/// Schedule the task `interval` after `now`, cancelling any pending one.
	///
	/// Returns `true` when a pending task was replaced.
	pub fn schedule(&mut self, now: Instant) -> bool {
		self.deadline.replace(now + self.interval).is_some()
	}

	/// Drop the pending task, returning whether there was one.
	pub fn cancel(&mut self) -> bool {
		self.deadline.take().is_some()
	}

	/// Whether a task is waiting to fire.
	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.deadline.is_some()
	}

	/// Time left until the pending task is due, if any.
	#[must_use]
	pub fn remaining(&self, now: Instant) -> Option<Duration> {
		self.deadline
			.map(|deadline| deadline.saturating_duration_since(now))
	}

	/// Consume the pending task if its deadline has passed.
	///
	/// Returns `true` exactly once per scheduled burst.
	pub fn fire(&mut self, now: Instant) -> bool {
		match self.deadline {
			Some(deadline) if deadline <= now => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const INTERVAL: Duration = Duration::from_millis(200);

	#[test]
	fn fires_once_after_quiet_interval() {
		let start = Instant::now();
		let mut debounce = Debounce::new(INTERVAL);
		assert!(!debounce.schedule(start));
		assert!(!debounce.fire(start + Duration::from_millis(199)));
		assert!(debounce.fire(start + INTERVAL));
		assert!(!debounce.fire(start + Duration::from_secs(5)));
	}

	#[test]
	fn rescheduling_pushes_the_deadline() {
		let start = Instant::now();
		let mut debounce = Debounce::new(INTERVAL);
		debounce.schedule(start);
		assert!(debounce.schedule(start + Duration::from_millis(150)));
		assert!(!debounce.fire(start + Duration::from_millis(300)));
		assert_eq!(
			debounce.remaining(start + Duration::from_millis(300)),
			Some(Duration::from_millis(50))
		);
		assert!(debounce.fire(start + Duration::from_millis(350)));
	}

	#[test]
	fn cancel_discards_pending_task() {
		let start = Instant::now();
		let mut debounce = Debounce::new(INTERVAL);
		debounce.schedule(start);
		assert!(debounce.cancel());
		assert!(!debounce.is_pending());
		assert!(!debounce.fire(start + INTERVAL));
		assert!(!debounce.cancel());
	}
}
