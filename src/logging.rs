//! File logging. The terminal belongs to the UI, so records go to a rotating
//! file in the data directory.

use std::backtrace::Backtrace;
use std::panic;
use std::path::Path;

use anyhow::{Context, Result};
use flexi_logger::{
	Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming,
};
use log::error;

const LOG_BASENAME: &str = "logpick";
const MAX_LOG_BYTES: u64 = 1024 * 1024;
const KEPT_LOG_FILES: usize = 5;

/// Start logging to `directory` with the given `env_logger`-style spec.
///
/// The returned handle must stay alive for the logger to keep flushing.
pub fn initialize(spec: &str, directory: &Path) -> Result<LoggerHandle> {
	let spec = LogSpecification::parse(spec)
		.with_context(|| format!("invalid log specification `{spec}`"))?;

	let handle = Logger::with(spec)
		.log_to_file(
			FileSpec::default()
				.directory(directory)
				.basename(LOG_BASENAME),
		)
		.rotate(
			Criterion::Size(MAX_LOG_BYTES),
			Naming::Numbers,
			Cleanup::KeepLogFiles(KEPT_LOG_FILES),
		)
		.format_for_files(flexi_logger::detailed_format)
		.start()
		.with_context(|| format!("failed to start logging in {}", directory.display()))?;

	panic::set_hook(Box::new(|info| {
		let backtrace = Backtrace::capture();
		error!("panic: {info}\n{backtrace}");
	}));

	Ok(handle)
}
