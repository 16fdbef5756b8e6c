use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use logpick_core::Level;
use logpick_hass::HassConfig;
use logpick_tui::UiLabels;
use serde::Deserialize;

use super::resolved::{
	ConfigError, ConfigSources, ResolvedConfig, SettingSource, SourceConfig, validation,
};
use crate::cli::CliArgs;

pub(super) const DEFAULT_LOG_SPEC: &str = "info";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) hass: HassSection,
	pub(super) source: SourceSection,
	pub(super) ui: UiSection,
	pub(super) logging: LoggingSection,
}

/// `[hass]`: connection to Home Assistant.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct HassSection {
	pub(super) url: Option<String>,
	pub(super) token: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

/// `[source]`: offline alternative to `[hass]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) loggers_file: Option<PathBuf>,
}

/// `[ui]`: picker presentation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) level: Option<String>,
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
}

/// `[logging]`: log file output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) directory: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		override_with(&mut self.hass.url, &cli.url);
		override_with(&mut self.hass.token, &cli.token);
		override_with(&mut self.hass.timeout_secs, &cli.timeout);
		override_with(&mut self.source.loggers_file, &cli.loggers_file);
		override_with(&mut self.ui.theme, &cli.theme);
		override_with(&mut self.ui.initial_query, &cli.initial_query);
		override_with(&mut self.ui.level, &cli.level);
		override_with(&mut self.ui.title, &cli.title);
		override_with(&mut self.logging.level, &cli.log_level);
		override_with(&mut self.logging.directory, &cli.log_dir);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			hass_url: detect_source(
				cli.url.is_some(),
				self.hass.url.is_some(),
				"LOGPICK__HASS__URL",
				"--url",
				"hass.url",
			),
			hass_token: detect_source(
				cli.token.is_some(),
				self.hass.token.is_some(),
				"LOGPICK__HASS__TOKEN",
				"--token",
				"hass.token",
			),
			hass_timeout: detect_source(
				cli.timeout.is_some(),
				self.hass.timeout_secs.is_some(),
				"LOGPICK__HASS__TIMEOUT_SECS",
				"--timeout",
				"hass.timeout_secs",
			),
			ui_level: detect_source(
				cli.level.is_some(),
				self.ui.level.is_some(),
				"LOGPICK__UI__LEVEL",
				"--level",
				"ui.level",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"LOGPICK__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_spec: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"LOGPICK__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let level = match &self.ui.level {
			Some(value) => validation::parse_level(value, sources.source_for_level())?,
			None => Level::default(),
		};

		let source = match self.source.loggers_file {
			Some(path) => SourceConfig::File(path),
			None => SourceConfig::Hass(resolve_hass(self.hass, &sources)?),
		};

		let mut labels = UiLabels::default();
		if let Some(title) = self.ui.title {
			labels = labels.with_title(title);
		}
		if let Some(placeholder) = self.ui.placeholder {
			labels = labels.with_placeholder(placeholder);
		}

		let config = ResolvedConfig {
			source,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			level,
			theme: self.ui.theme,
			labels,
			log_spec: self
				.logging
				.level
				.unwrap_or_else(|| DEFAULT_LOG_SPEC.to_string()),
			log_dir: self.logging.directory,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn resolve_hass(section: HassSection, sources: &ConfigSources) -> Result<HassConfig, ConfigError> {
	let Some(url) = section.url.filter(|url| !url.trim().is_empty()) else {
		return Err(ConfigError::invalid(
			"hass.url",
			"",
			sources.source_for_url(),
			"required unless a loggers file is given",
		));
	};
	let Some(token) = section.token.filter(|token| !token.trim().is_empty()) else {
		return Err(ConfigError::invalid(
			"hass.token",
			"",
			sources.source_for_token(),
			"required to authenticate with Home Assistant",
		));
	};

	let mut hass = HassConfig::new(url.trim(), token.trim());
	if let Some(secs) = section.timeout_secs {
		hass = hass.with_timeout(Duration::from_secs(secs));
	}
	Ok(hass)
}

fn override_with<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
	if let Some(value) = value {
		*target = Some(value.clone());
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
