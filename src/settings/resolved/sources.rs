use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) hass_url: Option<SettingSource>,
	pub(crate) hass_token: Option<SettingSource>,
	pub(crate) hass_timeout: Option<SettingSource>,
	pub(crate) ui_level: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) log_spec: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_url(&self) -> SettingSource {
		or_key(&self.hass_url, "hass.url")
	}

	pub(crate) fn source_for_token(&self) -> SettingSource {
		or_key(&self.hass_token, "hass.token")
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(&self.hass_timeout, "hass.timeout_secs")
	}

	pub(crate) fn source_for_level(&self) -> SettingSource {
		or_key(&self.ui_level, "ui.level")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.ui_theme, "ui.theme")
	}

	pub(crate) fn source_for_log_spec(&self) -> SettingSource {
		or_key(&self.log_spec, "logging.level")
	}
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}
