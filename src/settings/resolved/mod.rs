use std::path::PathBuf;

use logpick_core::Level;
use logpick_hass::HassConfig;
use logpick_tui::UiLabels;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the picker gets its loggers from and sends level changes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
	/// A live Home Assistant instance.
	Hass(HassConfig),
	/// A JSON listing on disk; applying is a dry run.
	File(PathBuf),
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub source: SourceConfig,
	pub initial_query: String,
	pub level: Level,
	pub theme: Option<String>,
	pub labels: UiLabels,
	/// `flexi_logger` specification such as `info` or `warn,logpick_hass=debug`.
	pub log_spec: String,
	pub log_dir: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
