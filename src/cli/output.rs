use anyhow::Result;
use logpick_core::{CardCatalog, LOGGER_PICKER_CARD};
use logpick_tui::SessionSummary;

use super::OutputFormat;

/// Print what the session applied in the chosen format.
pub(crate) fn print_summary(format: OutputFormat, summary: &SessionSummary) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			print!("{}", plain_summary(summary));
			Ok(())
		}
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(summary)?);
			Ok(())
		}
	}
}

fn plain_summary(summary: &SessionSummary) -> String {
	let mut out = String::new();
	for request in &summary.applied {
		out.push_str(&format!(
			"{}\t{}\n",
			request.level,
			request.loggers.join(",")
		));
	}
	out
}

/// Register the bundled cards and print their descriptors.
pub(crate) fn print_card_info() -> Result<()> {
	let mut catalog = CardCatalog::default();
	catalog.register(LOGGER_PICKER_CARD)?;
	for card in catalog.iter() {
		println!("{}\t{}\t{}", card.type_name, card.name, card.description);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use logpick_core::{ApplyLevels, Level};

	use super::*;

	#[test]
	fn plain_summary_lists_one_line_per_apply() {
		let summary = SessionSummary {
			applied: vec![
				ApplyLevels {
					level: Level::Debug,
					loggers: vec!["a".into(), "b".into()],
				},
				ApplyLevels {
					level: Level::NotSet,
					loggers: vec!["c".into()],
				},
			],
			selection: Vec::new(),
		};
		assert_eq!(plain_summary(&summary), "debug\ta,b\nnotset\tc\n");
	}

	#[test]
	fn json_summary_uses_wire_level_names() {
		let summary = SessionSummary {
			applied: vec![ApplyLevels {
				level: Level::Warning,
				loggers: vec!["zha".into()],
			}],
			selection: vec!["zha".into()],
		};
		let value = serde_json::to_value(&summary).unwrap();
		assert_eq!(value["applied"][0]["level"], "warning");
		assert_eq!(value["selection"][0], "zha");
	}
}
