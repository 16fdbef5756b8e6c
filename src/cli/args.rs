use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

use crate::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("logpick {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

/// Format of the report printed after the UI exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	#[default]
	Plain,
	Json,
}

#[derive(Parser, Debug)]
#[command(
	name = "logpick",
	version,
	long_version = long_version(),
	about = "Search Home Assistant loggers and set their levels from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `logpick` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LOGPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long,
		value_name = "URL",
		help = "Home Assistant base or websocket URL (default: from configuration)"
	)]
	pub(crate) url: Option<String>,
	#[arg(
		long,
		value_name = "TOKEN",
		env = "LOGPICK_TOKEN",
		hide_env_values = true,
		help = "Long-lived access token (default: from configuration)"
	)]
	pub(crate) token: Option<String>,
	#[arg(
		long,
		value_name = "SECONDS",
		help = "Socket timeout in seconds (default: 10)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'f',
		long = "loggers-file",
		value_name = "FILE",
		help = "Read loggers from a JSON file instead of Home Assistant; applying becomes a dry run"
	)]
	pub(crate) loggers_file: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 'l',
		long,
		value_name = "LEVEL",
		help = "Preselect the level to apply: debug, info, warning, error, critical or notset (default: debug)"
	)]
	pub(crate) level: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the header title (default: Logger Manager)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "SPEC",
		help = "Log specification for the log file, e.g. `debug` or `info,logpick_hass=trace` (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-dir",
		value_name = "DIR",
		help = "Directory for log files (default: the data directory)"
	)]
	pub(crate) log_dir: Option<PathBuf>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Format of the report printed on exit"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "list-themes", help = "List the available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(long = "print-config", help = "Print the effective configuration and exit")]
	pub(crate) print_config: bool,
	#[arg(long = "card-info", help = "Print the dashboard card descriptor and exit")]
	pub(crate) card_info: bool,
}
