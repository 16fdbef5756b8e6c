//! Contracts for the two remote collaborators the picker depends on.
//!
//! A [`LoggerSource`] supplies the candidate list once per session and a
//! [`LevelApplier`] accepts a level for a set of logger names. Front-ends
//! usually hand a single [`Backend`] implementing both to a worker thread.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ApplyError, SourceError};
use crate::level::Level;

/// Response of the `logger_manager/get_loggers` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerListing {
	/// Logger names in source-defined order.
	pub loggers: Vec<String>,
	/// Whether the host served the list from its discovery cache.
	#[serde(default)]
	pub cached: bool,
	/// Age of the cached list in seconds; zero for a fresh discovery.
	#[serde(default)]
	pub cache_age: u64,
	/// Levels the integration currently enforces, keyed by logger name.
	#[serde(default, alias = "managed_loggers", skip_serializing_if = "BTreeMap::is_empty")]
	pub managed: BTreeMap<String, Level>,
}

impl LoggerListing {
	/// Build an uncached listing from plain names.
	pub fn new<I, S>(loggers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			loggers: loggers.into_iter().map(Into::into).collect(),
			cached: false,
			cache_age: 0,
			managed: BTreeMap::new(),
		}
	}

	/// Attach the managed levels of some loggers.
	#[must_use]
	pub fn with_managed<I, S>(mut self, managed: I) -> Self
	where
		I: IntoIterator<Item = (S, Level)>,
		S: Into<String>,
	{
		self.managed
			.extend(managed.into_iter().map(|(name, level)| (name.into(), level)));
		self
	}
}

/// Payload of the `logger_manager.apply_levels` service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyLevels {
	pub level: Level,
	pub loggers: Vec<String>,
}

/// Supplies the full candidate list.
pub trait LoggerSource {
	/// Fetch the available logger names.
	fn fetch_loggers(&mut self) -> Result<LoggerListing, SourceError>;
}

/// Applies a level to a set of loggers.
pub trait LevelApplier {
	/// Apply `request.level` to every logger in `request.loggers`.
	fn apply_levels(&mut self, request: &ApplyLevels) -> Result<(), ApplyError>;
}

/// A collaborator that can be moved onto a worker thread and serves both
/// fetch and apply requests.
pub trait Backend: LoggerSource + LevelApplier + Send {}

impl<T> Backend for T where T: LoggerSource + LevelApplier + Send {}

impl<T: LoggerSource + ?Sized> LoggerSource for Box<T> {
	fn fetch_loggers(&mut self) -> Result<LoggerListing, SourceError> {
		(**self).fetch_loggers()
	}
}

impl<T: LevelApplier + ?Sized> LevelApplier for Box<T> {
	fn apply_levels(&mut self, request: &ApplyLevels) -> Result<(), ApplyError> {
		(**self).apply_levels(request)
	}
}

/// In-memory backend with a fixed listing, recording every applied request.
#[derive(Debug, Clone)]
pub struct StaticBackend {
	listing: Result<LoggerListing, SourceError>,
	apply_failure: Option<ApplyError>,
	applied: Vec<ApplyLevels>,
}

impl StaticBackend {
	/// Serve `listing` on every fetch.
	pub fn new(listing: LoggerListing) -> Self {
		Self {
			listing: Ok(listing),
			apply_failure: None,
			applied: Vec::new(),
		}
	}

	/// Fail every fetch with `error`.
	pub fn failing(error: SourceError) -> Self {
		Self {
			listing: Err(error),
			apply_failure: None,
			applied: Vec::new(),
		}
	}

	/// Fail every apply with `error`.
	#[must_use]
	pub fn with_apply_failure(mut self, error: ApplyError) -> Self {
		self.apply_failure = Some(error);
		self
	}

	/// Requests accepted so far.
	pub fn applied(&self) -> &[ApplyLevels] {
		&self.applied
	}
}

impl LoggerSource for StaticBackend {
	fn fetch_loggers(&mut self) -> Result<LoggerListing, SourceError> {
		self.listing.clone()
	}
}

impl LevelApplier for StaticBackend {
	fn apply_levels(&mut self, request: &ApplyLevels) -> Result<(), ApplyError> {
		if request.loggers.is_empty() {
			return Err(ApplyError::EmptySelection);
		}
		if let Some(error) = &self.apply_failure {
			return Err(error.clone());
		}
		self.applied.push(request.clone());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn listing_tolerates_missing_cache_fields() {
		let listing: LoggerListing =
			serde_json::from_str(r#"{"loggers": ["homeassistant.core"]}"#).unwrap();
		assert_eq!(listing.loggers, vec!["homeassistant.core"]);
		assert!(!listing.cached);
		assert_eq!(listing.cache_age, 0);
	}

	#[test]
	fn apply_payload_uses_wire_names() {
		let request = ApplyLevels {
			level: Level::Warning,
			loggers: vec!["custom_components.foo".into()],
		};
		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(
			value,
			serde_json::json!({"level": "warning", "loggers": ["custom_components.foo"]})
		);
	}

	#[test]
	fn static_backend_records_and_rejects() {
		let mut backend = StaticBackend::new(LoggerListing::new(["a"]));
		let request = ApplyLevels {
			level: Level::Info,
			loggers: vec!["a".into()],
		};
		backend.apply_levels(&request).unwrap();
		assert_eq!(backend.applied(), &[request.clone()]);

		let empty = ApplyLevels {
			level: Level::Info,
			loggers: Vec::new(),
		};
		assert_eq!(
			backend.apply_levels(&empty),
			Err(ApplyError::EmptySelection)
		);

		let mut failing = StaticBackend::new(LoggerListing::default())
			.with_apply_failure(ApplyError::Unavailable("offline".into()));
		assert_eq!(
			failing.apply_levels(&request),
			Err(ApplyError::Unavailable("offline".into()))
		);
	}
}
