use std::time::Instant;

use log::{error, info, warn};
use logpick_core::Feedback;

use super::App;
use crate::worker::RemoteResult;

impl App<'_> {
	/// Drain finished remote work into the picker and the banner.
	pub(crate) fn pump_remote(&mut self, now: Instant) {
		while let Some(result) = self.remote.try_recv() {
			self.absorb_remote(result, now);
		}
	}

	pub(crate) fn absorb_remote(&mut self, result: RemoteResult, now: Instant) {
		match result {
			RemoteResult::Fetched { outcome, .. } => match outcome {
				Ok(listing) => {
					info!("loaded {} loggers", listing.loggers.len());
					self.picker.load_listing(listing);
				}
				Err(err) => {
					error!("logger fetch failed: {err}");
					self.picker.fail(err.to_string());
				}
			},
			RemoteResult::Applied {
				request, outcome, ..
			} => {
				let feedback = match &outcome {
					Ok(()) => Feedback::applied(&request, now),
					Err(err) => Feedback::failed(err, now),
				};
				match &outcome {
					Ok(()) => info!("{}", feedback.message),
					Err(err) => warn!("apply of {} failed: {err}", request.level),
				}
				self.feedback.show(feedback);
				if outcome.is_ok() {
					self.picker.record_applied(&request);
					self.applied.push(request);
				}
			}
		}
	}
}
