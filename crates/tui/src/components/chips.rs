use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const CHIP_GAP: u16 = 1;

/// Argument bundle for the selection block.
pub struct ChipsContext<'a> {
	pub names: &'a [&'a str],
	pub title: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

fn chip_label(name: &str) -> String {
	format!(" {name} × ")
}

/// Lay chips out left to right, wrapping at `width` columns.
///
/// Returns, per row, the indices of the chips placed on it. A chip wider than
/// the row gets a row of its own.
#[must_use]
pub fn chip_rows(names: &[&str], width: u16) -> Vec<Vec<usize>> {
	let width = usize::from(width.max(1));
	let mut rows: Vec<Vec<usize>> = Vec::new();
	let mut used = 0usize;
	for (index, name) in names.iter().enumerate() {
		let chip = chip_label(name).width();
		match rows.last_mut() {
			Some(row) if used + usize::from(CHIP_GAP) + chip <= width => {
				row.push(index);
				used += usize::from(CHIP_GAP) + chip;
			}
			_ => {
				rows.push(vec![index]);
				used = chip;
			}
		}
	}
	rows
}

/// Height of the selection block for `names` at `width`, borders included.
#[must_use]
pub fn chips_height(names: &[&str], width: u16) -> u16 {
	if names.is_empty() {
		return 0;
	}
	let rows = chip_rows(names, width.saturating_sub(2)).len();
	u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// Render the chip block. Returns the screen area of every chip in `names`
/// order.
pub fn render_chips(frame: &mut Frame, ctx: ChipsContext<'_>) -> Vec<Rect> {
	let ChipsContext {
		names,
		title,
		area,
		theme,
	} = ctx;
	if names.is_empty() || area.height == 0 {
		return Vec::new();
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(format!("{title} ({})", names.len()));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let mut hitboxes = vec![Rect::default(); names.len()];
	let mut lines = Vec::new();
	for (row_offset, row) in chip_rows(names, inner.width).into_iter().enumerate() {
		let y = inner.y.saturating_add(u16::try_from(row_offset).unwrap_or(u16::MAX));
		let mut x = inner.x;
		let mut spans = Vec::new();
		for (position, index) in row.into_iter().enumerate() {
			if position > 0 {
				spans.push(Span::raw(" ".repeat(usize::from(CHIP_GAP))));
				x = x.saturating_add(CHIP_GAP);
			}
			let label = chip_label(names[index]);
			let chip_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
			if y < inner.bottom() {
				hitboxes[index] = Rect {
					x,
					y,
					width: chip_width.min(inner.right().saturating_sub(x)),
					height: 1,
				};
			}
			x = x.saturating_add(chip_width);
			spans.push(Span::styled(label, theme.chip));
		}
		lines.push(Line::from(spans));
	}
	frame.render_widget(Paragraph::new(lines), inner);
	hitboxes
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn chips_wrap_at_the_row_width() {
		// " a × " is five columns wide.
		let rows = chip_rows(&["a", "b", "c"], 11);
		assert_eq!(rows, vec![vec![0, 1], vec![2]]);
	}

	#[test]
	fn oversized_chips_get_their_own_row() {
		let rows = chip_rows(&["homeassistant.components.zha", "a"], 10);
		assert_eq!(rows, vec![vec![0], vec![1]]);
	}

	#[test]
	fn height_counts_borders() {
		assert_eq!(chips_height(&[], 40), 0);
		assert_eq!(chips_height(&["a", "b"], 40), 3);
	}
}
