use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::io::Write;
	use std::time::Duration;

	use clap::Parser;
	use logpick_core::Level;
	use tempfile::NamedTempFile;

	use super::*;
	use crate::settings::SourceConfig;

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn explicit_files_are_merged_and_cli_wins() {
		let file = config_file(
			r#"
[hass]
url = "http://ha.local:8123"
token = "from-file"
timeout_secs = 3

[ui]
level = "error"
theme = "light"
initial_query = "zha"

[logging]
level = "debug"
"#,
		);
		let path = file.path().to_str().unwrap();
		let cli = CliArgs::parse_from(["logpick", "-n", "-c", path, "--level", "info"]);

		let resolved = load(&cli).unwrap();
		let SourceConfig::Hass(hass) = &resolved.source else {
			panic!("expected a Home Assistant source");
		};
		assert_eq!(hass.url, "http://ha.local:8123");
		assert_eq!(hass.token, "from-file");
		assert_eq!(hass.timeout, Duration::from_secs(3));
		assert_eq!(resolved.level, Level::Info);
		assert_eq!(resolved.theme.as_deref(), Some("light"));
		assert_eq!(resolved.initial_query, "zha");
		assert_eq!(resolved.log_spec, "debug");
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let cli = CliArgs::parse_from(["logpick", "-n", "-c", "/nonexistent/logpick.toml"]);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn loggers_file_needs_no_connection_settings() {
		let cli = CliArgs::parse_from(["logpick", "-n", "-f", "loggers.json"]);
		let resolved = load(&cli).unwrap();
		assert!(matches!(resolved.source, SourceConfig::File(ref path) if path.ends_with("loggers.json")));
	}
}
