use super::{ResolvedConfig, SourceConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", render_summary(config));
}

fn render_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec!["Effective configuration:".to_string()];
	match &config.source {
		SourceConfig::Hass(hass) => {
			lines.push(format!("  Home Assistant: {}", hass.url));
			lines.push(format!("  Token: {}", mask_token(&hass.token)));
			lines.push(format!("  Timeout: {}s", hass.timeout.as_secs()));
		}
		SourceConfig::File(path) => {
			lines.push(format!("  Loggers file: {} (dry run)", path.display()));
		}
	}
	lines.push(format!("  Default level: {}", config.level));
	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	));
	lines.push(format!("  Title: {}", config.labels.title));
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!("  Log level: {}", config.log_spec));
	if let Some(dir) = &config.log_dir {
		lines.push(format!("  Log directory: {}", dir.display()));
	}

	let mut out = lines.join("\n");
	out.push('\n');
	out
}

fn mask_token(token: &str) -> String {
	let tail: String = token
		.chars()
		.rev()
		.take(4)
		.collect::<Vec<_>>()
		.into_iter()
		.rev()
		.collect();
	if token.chars().count() <= 8 {
		"****".to_string()
	} else {
		format!("****{tail}")
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use logpick_core::Level;
	use logpick_hass::HassConfig;
	use logpick_tui::UiLabels;

	use super::*;

	#[test]
	fn short_tokens_are_fully_masked() {
		assert_eq!(mask_token("abc"), "****");
		assert_eq!(mask_token("abcdefghijkl"), "****ijkl");
	}

	#[test]
	fn summary_hides_the_token() {
		let config = ResolvedConfig {
			source: SourceConfig::Hass(HassConfig::new("http://ha.local:8123", "supersecrettoken")),
			initial_query: "zha".into(),
			level: Level::Info,
			theme: Some("mono".into()),
			labels: UiLabels::default(),
			log_spec: "debug".into(),
			log_dir: Some(PathBuf::from("/tmp/logpick")),
		};

		let summary = render_summary(&config);
		assert!(summary.contains("Home Assistant: http://ha.local:8123"));
		assert!(summary.contains("****oken"));
		assert!(!summary.contains("supersecret"));
		assert!(summary.contains("Default level: info"));
		assert!(summary.contains("Initial query: zha"));
	}

	#[test]
	fn file_source_is_labelled_dry_run() {
		let config = ResolvedConfig {
			source: SourceConfig::File(PathBuf::from("loggers.json")),
			initial_query: String::new(),
			level: Level::Debug,
			theme: None,
			labels: UiLabels::default(),
			log_spec: "info".into(),
			log_dir: None,
		};

		let summary = render_summary(&config);
		assert!(summary.contains("Loggers file: loggers.json (dry run)"));
		assert!(!summary.contains("Initial query"));
	}
}
