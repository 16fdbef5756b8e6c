mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{parse_cli, print_card_info, print_summary};
use log::info;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in logpick_tui::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if cli.card_info {
		return print_card_info();
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
		return Ok(());
	}

	let log_dir = match &resolved.log_dir {
		Some(dir) => dir.clone(),
		None => app_dirs::get_data_dir()?,
	};
	std::fs::create_dir_all(&log_dir)
		.with_context(|| format!("failed to create {}", log_dir.display()))?;
	let _logger = logging::initialize(&resolved.log_spec, &log_dir)?;
	info!("logpick {} starting", env!("CARGO_PKG_VERSION"));

	let format = cli.output;
	let summary = workflow::run(resolved)?;
	print_summary(format, &summary)
}
