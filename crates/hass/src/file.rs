use std::fs;
use std::path::PathBuf;

use log::info;
use logpick_core::{
	ApplyError, ApplyLevels, LevelApplier, LoggerListing, LoggerSource, SourceError,
};
use serde::Deserialize;

use crate::error::HassError;

/// Offline collaborator serving loggers from a JSON file.
///
/// The file holds either a plain array of names or a `get_loggers` result
/// object. Applying levels only logs the request.
#[derive(Debug, Clone)]
pub struct FileSource {
	path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListingFile {
	Names(Vec<String>),
	Listing(LoggerListing),
}

impl FileSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	fn read(&self) -> Result<LoggerListing, HassError> {
		let display = self.path.display().to_string();
		let text = fs::read_to_string(&self.path).map_err(|err| HassError::File {
			path: display.clone(),
			reason: err.to_string(),
		})?;
		let parsed: ListingFile = serde_json::from_str(&text).map_err(|err| HassError::File {
			path: display,
			reason: err.to_string(),
		})?;
		Ok(match parsed {
			ListingFile::Names(names) => LoggerListing::new(names),
			ListingFile::Listing(listing) => listing,
		})
	}
}

impl LoggerSource for FileSource {
	fn fetch_loggers(&mut self) -> Result<LoggerListing, SourceError> {
		Ok(self.read()?)
	}
}

impl LevelApplier for FileSource {
	fn apply_levels(&mut self, request: &ApplyLevels) -> Result<(), ApplyError> {
		if request.loggers.is_empty() {
			return Err(ApplyError::EmptySelection);
		}
		info!(
			"dry run: would set {} to {}",
			request.loggers.join(", "),
			request.level
		);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use logpick_core::Level;
	use tempfile::NamedTempFile;

	use super::*;

	fn file_with(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn reads_plain_name_arrays() {
		let file = file_with(r#"["homeassistant.core", "custom_components.hacs"]"#);
		let listing = FileSource::new(file.path()).fetch_loggers().unwrap();
		assert_eq!(listing.loggers.len(), 2);
		assert!(!listing.cached);
	}

	#[test]
	fn reads_listing_objects() {
		let file = file_with(r#"{"loggers": ["a"], "cached": true, "cache_age": 7}"#);
		let listing = FileSource::new(file.path()).fetch_loggers().unwrap();
		assert_eq!(
			listing,
			LoggerListing {
				loggers: vec!["a".into()],
				cached: true,
				cache_age: 7,
				..LoggerListing::default()
			}
		);
	}

	#[test]
	fn listing_objects_may_carry_current_levels() {
		let file = file_with(r#"{"loggers": ["a", "b"], "managed": {"b": "critical"}}"#);
		let listing = FileSource::new(file.path()).fetch_loggers().unwrap();
		assert_eq!(listing.managed.len(), 1);
		assert_eq!(listing.managed["b"], Level::Critical);
	}

	#[test]
	fn missing_and_invalid_files_fail() {
		let missing = FileSource::new("/nonexistent/loggers.json").fetch_loggers();
		assert!(matches!(missing, Err(SourceError::Unavailable(_))));

		let file = file_with("{not json");
		let err = FileSource::new(file.path()).fetch_loggers().unwrap_err();
		assert!(err.to_string().contains("could not read"));
	}

	#[test]
	fn apply_is_a_dry_run() {
		let mut source = FileSource::new("unused.json");
		let request = ApplyLevels { level: Level::Error, loggers: vec!["a".into()] };
		assert!(source.apply_levels(&request).is_ok());
	}
}
