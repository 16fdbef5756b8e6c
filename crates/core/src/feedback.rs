//! Short-lived banner reporting the outcome of an apply.

use std::time::{Duration, Instant};

use crate::error::ApplyError;
use crate::remote::ApplyLevels;

/// How long a banner stays visible.
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
	Success,
	Error,
}

/// A message with an expiry time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
	pub kind: FeedbackKind,
	pub message: String,
	pub expires_at: Instant,
}

impl Feedback {
	/// Banner for a request the applier accepted.
	pub fn applied(request: &ApplyLevels, now: Instant) -> Self {
		Self {
			kind: FeedbackKind::Success,
			message: format!(
				"Set {} logger(s) to {}",
				request.loggers.len(),
				request.level.label()
			),
			expires_at: now + FEEDBACK_DURATION,
		}
	}

	/// Banner for a rejected request.
	pub fn failed(error: &ApplyError, now: Instant) -> Self {
		Self {
			kind: FeedbackKind::Error,
			message: format!("Failed: {error}"),
			expires_at: now + FEEDBACK_DURATION,
		}
	}

	#[must_use]
	pub fn is_expired(&self, now: Instant) -> bool {
		now >= self.expires_at
	}
}

/// Holds at most one banner; a new one replaces the old immediately.
#[derive(Debug, Clone, Default)]
pub struct FeedbackSlot {
	current: Option<Feedback>,
}

impl FeedbackSlot {
	pub fn show(&mut self, feedback: Feedback) {
		self.current = Some(feedback);
	}

	/// The banner to display at `now`, if one is still live.
	#[must_use]
	pub fn current(&self, now: Instant) -> Option<&Feedback> {
		self.current
			.as_ref()
			.filter(|feedback| !feedback.is_expired(now))
	}

	/// Forget an expired banner. Returns `true` when one was dropped.
	pub fn clear_expired(&mut self, now: Instant) -> bool {
		if self
			.current
			.as_ref()
			.is_some_and(|feedback| feedback.is_expired(now))
		{
			self.current = None;
			return true;
		}
		false
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::level::Level;

	#[test]
	fn banner_expires_after_three_seconds() {
		let now = Instant::now();
		let request = ApplyLevels {
			level: Level::Debug,
			loggers: vec!["a".into(), "b".into()],
		};
		let mut slot = FeedbackSlot::default();
		slot.show(Feedback::applied(&request, now));

		let live = slot.current(now + Duration::from_millis(2999)).unwrap();
		assert_eq!(live.message, "Set 2 logger(s) to DEBUG");
		assert!(slot.current(now + FEEDBACK_DURATION).is_none());
		assert!(slot.clear_expired(now + FEEDBACK_DURATION));
		assert!(!slot.clear_expired(now + FEEDBACK_DURATION));
	}

	#[test]
	fn failure_banner_carries_message() {
		let now = Instant::now();
		let error = ApplyError::Remote {
			code: "home_assistant_error".into(),
			message: "Service not found".into(),
		};
		let feedback = Feedback::failed(&error, now);
		assert_eq!(feedback.kind, FeedbackKind::Error);
		assert_eq!(feedback.message, "Failed: Service not found");
	}
}
