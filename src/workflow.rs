use anyhow::Result;
use log::{info, warn};
use logpick_core::Backend;
use logpick_hass::{FileSource, HassClient};
use logpick_tui::{AppOptions, SessionSummary};

use crate::settings::{ResolvedConfig, SourceConfig};

/// Build the collaborators described by `config` and run the picker.
pub(crate) fn run(config: ResolvedConfig) -> Result<SessionSummary> {
	let (backend, options) = build(config);
	logpick_tui::run(backend, options)
}

fn build(config: ResolvedConfig) -> (Box<dyn Backend>, AppOptions) {
	let ResolvedConfig {
		source,
		initial_query,
		level,
		theme,
		labels,
		..
	} = config;

	let backend: Box<dyn Backend> = match source {
		SourceConfig::Hass(hass) => {
			info!("using Home Assistant at {}", hass.url);
			Box::new(HassClient::new(hass))
		}
		SourceConfig::File(path) => {
			info!("using loggers file {} (dry run)", path.display());
			Box::new(FileSource::new(path))
		}
	};

	let theme = match theme.as_deref() {
		Some(name) => logpick_tui::by_name(name).unwrap_or_else(|| {
			warn!("unknown theme '{name}', using the default");
			logpick_tui::default_theme()
		}),
		None => logpick_tui::default_theme(),
	};

	let options = AppOptions {
		initial_query,
		level,
		theme,
		labels,
	};

	(backend, options)
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use logpick_core::Level;
	use logpick_tui::UiLabels;

	use super::*;

	#[test]
	fn options_carry_resolved_ui_settings() {
		let config = ResolvedConfig {
			source: SourceConfig::File(PathBuf::from("loggers.json")),
			initial_query: "mqtt".into(),
			level: Level::Warning,
			theme: Some("mono".into()),
			labels: UiLabels::default().with_title("Attic"),
			log_spec: "info".into(),
			log_dir: None,
		};

		let (_backend, options) = build(config);
		assert_eq!(options.initial_query, "mqtt");
		assert_eq!(options.level, Level::Warning);
		assert_eq!(options.labels.title, "Attic");
		assert_eq!(Some(options.theme), logpick_tui::by_name("mono"));
	}
}
