use flexi_logger::LogSpecification;
use logpick_core::Level;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource, SourceConfig};

pub(crate) fn parse_level(value: &str, origin: SettingSource) -> Result<Level, ConfigError> {
	value.parse().map_err(|_| {
		ConfigError::invalid(
			"ui.level",
			value,
			origin,
			"expected one of debug, info, warning, error, critical, notset",
		)
	})
}

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let SourceConfig::Hass(hass) = &config.source {
		if hass.timeout.is_zero() {
			return Err(ConfigError::invalid(
				"hass.timeout_secs",
				hass.timeout.as_secs().to_string(),
				sources.source_for_timeout(),
				"must be greater than zero",
			));
		}

		if let Err(err) = logpick_hass::websocket_url(&hass.url) {
			return Err(ConfigError::invalid(
				"hass.url",
				hass.url.clone(),
				sources.source_for_url(),
				err.to_string(),
			));
		}
	}

	if let Some(theme) = &config.theme
		&& logpick_tui::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme; available: {}", logpick_tui::names().join(", ")),
		));
	}

	if let Err(err) = LogSpecification::parse(&config.log_spec) {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_spec.clone(),
			sources.source_for_log_spec(),
			err.to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use logpick_hass::HassConfig;
	use logpick_tui::UiLabels;

	use super::*;

	fn config(source: SourceConfig) -> ResolvedConfig {
		ResolvedConfig {
			source,
			initial_query: String::new(),
			level: Level::Debug,
			theme: None,
			labels: UiLabels::default(),
			log_spec: "info".into(),
			log_dir: None,
		}
	}

	fn hass(url: &str) -> SourceConfig {
		SourceConfig::Hass(HassConfig::new(url, "token"))
	}

	#[test]
	fn accepts_defaults() {
		assert!(validate(&config(hass("http://ha.local:8123")), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn rejects_zero_timeout() {
		let source = SourceConfig::Hass(
			HassConfig::new("http://ha.local:8123", "token").with_timeout(Duration::ZERO),
		);
		let sources = ConfigSources {
			hass_timeout: Some(SettingSource::CliFlag("--timeout")),
			..ConfigSources::default()
		};

		let err = validate(&config(source), &sources).unwrap_err();
		assert_eq!(err.key, "hass.timeout_secs");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn rejects_unsupported_url_scheme() {
		let sources = ConfigSources {
			hass_url: Some(SettingSource::Environment("LOGPICK__HASS__URL")),
			..ConfigSources::default()
		};
		let err = validate(&config(hass("ftp://ha.local")), &sources).unwrap_err();
		assert_eq!(err.key, "hass.url");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn rejects_unknown_theme() {
		let mut resolved = config(SourceConfig::File("loggers.json".into()));
		resolved.theme = Some("neon".into());
		let err = validate(&resolved, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert!(err.to_string().contains("slate"));
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let mut resolved = config(SourceConfig::File("loggers.json".into()));
		resolved.theme = Some("light".into());
		assert!(validate(&resolved, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn rejects_malformed_log_spec() {
		let mut resolved = config(SourceConfig::File("loggers.json".into()));
		resolved.log_spec = "logpick=loud".into();
		let err = validate(&resolved, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "logging.level");
	}

	#[test]
	fn level_errors_carry_the_value() {
		let err = parse_level("chatty", SettingSource::ConfigKey("ui.level")).unwrap_err();
		assert!(err.to_string().contains("value: chatty"));
		assert_eq!(parse_level("Warning", SettingSource::ConfigKey("ui.level")).unwrap(), Level::Warning);
	}
}
