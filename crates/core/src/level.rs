//! Log verbosity levels understood by the `apply_levels` service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLevelError;

/// A log level accepted by the Home Assistant logger service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	#[default]
	Debug,
	Info,
	Warning,
	Error,
	Critical,
	/// Clears the override so the logger inherits its parent's level.
	NotSet,
}

impl Level {
	/// Every level in selector order: the five real levels, then `notset`.
	pub const ALL: [Self; 6] = [
		Self::Debug,
		Self::Info,
		Self::Warning,
		Self::Error,
		Self::Critical,
		Self::NotSet,
	];

	/// Wire name of the level.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Debug => "debug",
			Self::Info => "info",
			Self::Warning => "warning",
			Self::Error => "error",
			Self::Critical => "critical",
			Self::NotSet => "notset",
		}
	}

	/// Upper-case label used in the selector and feedback messages.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Debug => "DEBUG",
			Self::Info => "INFO",
			Self::Warning => "WARNING",
			Self::Error => "ERROR",
			Self::Critical => "CRITICAL",
			Self::NotSet => "NOTSET",
		}
	}

	fn position(self) -> usize {
		Self::ALL
			.iter()
			.position(|level| *level == self)
			.unwrap_or_default()
	}

	/// The following level in selector order, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.position() + 1) % Self::ALL.len()]
	}

	/// The preceding level in selector order, wrapping around.
	#[must_use]
	pub fn previous(self) -> Self {
		let len = Self::ALL.len();
		Self::ALL[(self.position() + len - 1) % len]
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Level {
	type Err = ParseLevelError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|level| level.as_str() == normalized)
			.ok_or_else(|| ParseLevelError {
				value: value.to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_case_insensitively() {
		assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warning);
		assert_eq!(" notset ".parse::<Level>().unwrap(), Level::NotSet);
		assert!("verbose".parse::<Level>().is_err());
	}

	#[test]
	fn cycling_wraps_in_both_directions() {
		assert_eq!(Level::Critical.next(), Level::NotSet);
		assert_eq!(Level::NotSet.next(), Level::Debug);
		assert_eq!(Level::Debug.previous(), Level::NotSet);
	}

	#[test]
	fn serializes_lowercase() {
		let json = serde_json::to_string(&Level::Critical).unwrap();
		assert_eq!(json, "\"critical\"");
		let parsed: Level = serde_json::from_str("\"notset\"").unwrap();
		assert_eq!(parsed, Level::NotSet);
	}
}
