use logpick_core::{Level, describe_logger};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState,
};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 2;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;
/// Fits the longest level label.
const LEVEL_COLUMN_WIDTH: u16 = 8;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
}

/// Everything drawn inside the results block besides the rows themselves.
pub struct ResultsContext<'a> {
	pub area: Rect,
	/// Results hidden beyond the render cap.
	pub overflow: usize,
	pub theme: &'a Theme,
}

/// Build one row per logger: the name with the query match highlighted, the
/// level it is managed at and its description.
pub fn build_rows<'a, F>(
	names: &'a [String],
	query: &str,
	managed: F,
	theme: &Theme,
) -> Vec<Row<'a>>
where
	F: Fn(&str) -> Option<Level>,
{
	let needle = query.trim().to_lowercase();
	names
		.iter()
		.map(|name| {
			let current = match managed(name.as_str()) {
				Some(level) => Span::raw(level.label()),
				None => Span::styled(Level::NotSet.label(), theme.empty_style()),
			};
			Row::new(vec![
				Cell::from(highlight_match(name, &needle, theme.highlight)),
				Cell::from(current),
				Cell::from(Span::styled(describe_logger(name), theme.empty_style())),
			])
		})
		.collect()
}

/// Column widths for a results block `area_width` columns wide.
///
/// The name column fits the longest name or its header, capped at three
/// fifths of the room left inside the borders and highlight gutter. The
/// description takes whatever remains.
#[must_use]
pub fn column_widths(
	names: &[String],
	name_header: &str,
	current_header: &str,
	area_width: u16,
) -> Vec<Constraint> {
	let gutter = u16::try_from(HIGHLIGHT_SYMBOL.width()).unwrap_or(u16::MAX);
	let room = area_width.saturating_sub(2).saturating_sub(gutter);
	let longest = names
		.iter()
		.map(|name| name.width())
		.chain(std::iter::once(name_header.width()))
		.max()
		.unwrap_or_default();
	let name = u16::try_from(longest)
		.unwrap_or(u16::MAX)
		.min(room.saturating_mul(3) / 5);
	let current = u16::try_from(current_header.width())
		.unwrap_or(u16::MAX)
		.max(LEVEL_COLUMN_WIDTH);
	vec![
		Constraint::Length(name),
		Constraint::Length(current),
		Constraint::Fill(1),
	]
}

fn highlight_match<'a>(name: &'a str, needle: &str, style: Style) -> Line<'a> {
	if needle.is_empty() {
		return Line::from(name);
	}
	let lowered = name.to_lowercase();
	// Byte offsets only line up when lowercasing keeps the length.
	if lowered.len() != name.len() {
		return Line::from(name);
	}
	let Some(start) = lowered.find(needle) else {
		return Line::from(name);
	};
	let end = start + needle.len();
	if !name.is_char_boundary(start) || !name.is_char_boundary(end) {
		return Line::from(name);
	}
	Line::from(vec![
		Span::raw(&name[..start]),
		Span::styled(&name[start..end], style),
		Span::raw(&name[end..]),
	])
}

/// Text of the overflow indicator.
#[must_use]
pub fn overflow_label(overflow: usize) -> String {
	format!("... and {overflow} more (scroll or narrow search)")
}

/// Render the bordered results table. Returns the area covered by data rows.
pub fn render_table(
	frame: &mut Frame,
	ctx: ResultsContext<'_>,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
) -> Rect {
	let ResultsContext {
		area,
		overflow,
		theme,
	} = ctx;

	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let (table_area, overflow_area) = if overflow > 0 && inner.height > 1 {
		(
			Rect {
				height: inner.height - 1,
				..inner
			},
			Some(Rect {
				y: inner.bottom() - 1,
				height: 1,
				..inner
			}),
		)
	} else {
		(inner, None)
	};

	render_configured_table(frame, table_area, table_state, theme, spec);

	if let Some(overflow_area) = overflow_area {
		let line = Line::from(Span::styled(overflow_label(overflow), theme.empty_style()));
		frame.render_widget(Paragraph::new(line), overflow_area);
	}

	Rect {
		y: table_area.y.saturating_add(TABLE_HEADER_ROWS),
		height: table_area.height.saturating_sub(TABLE_HEADER_ROWS),
		..table_area
	}
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	let sep_y = area.y + 1;
	if area.height <= 1 || area.width <= 2 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	let middle = "─".repeat(area.width as usize - 2);
	let spans = vec![
		Span::raw(" "),
		Span::styled(middle, theme.border_style()),
		Span::raw(" "),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn highlights_case_insensitive_matches() {
		let line = highlight_match("homeassistant.Core", "core", Style::new());
		let parts: Vec<_> = line.spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(parts, vec!["homeassistant.", "Core", ""]);
	}

	#[test]
	fn blank_or_missing_needles_leave_names_plain() {
		assert_eq!(highlight_match("zha", "", Style::new()).spans.len(), 1);
		assert_eq!(highlight_match("zha", "mqtt", Style::new()).spans.len(), 1);
	}

	#[test]
	fn name_column_fits_names_up_to_a_cap() {
		let names = vec!["zha".to_string(), "homeassistant.core".to_string()];
		assert_eq!(
			column_widths(&names, "Logger", "Current", 60),
			vec![Constraint::Length(18), Constraint::Length(8), Constraint::Fill(1)]
		);

		let long = vec!["custom_components.a_very_long_integration_name.sensor".to_string()];
		assert_eq!(column_widths(&long, "Logger", "Current", 60)[0], Constraint::Length(33));
		assert_eq!(column_widths(&[], "Logger", "Current", 60)[0], Constraint::Length(6));
	}

	#[test]
	fn overflow_text_matches_the_indicator() {
		assert_eq!(overflow_label(5), "... and 5 more (scroll or narrow search)");
	}
}
