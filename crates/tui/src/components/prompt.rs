use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};

use crate::input::QueryInput;
use crate::style::Theme;

const PROMPT_SYMBOL: &str = "> ";

/// Argument bundle for rendering the query row.
pub struct PromptContext<'a, 'b> {
	pub input: &'a QueryInput<'b>,
	pub match_count: usize,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render `> query` with `N matches` right-aligned on the same row.
pub fn render_prompt(frame: &mut Frame, ctx: PromptContext<'_, '_>) {
	let PromptContext {
		input,
		match_count,
		area,
		theme,
	} = ctx;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let counter = format!(" {} ", match_count_label(match_count));
	let counter_width = u16::try_from(counter.len()).unwrap_or(u16::MAX);
	let [symbol_area, input_area, counter_area] = Layout::horizontal([
		Constraint::Length(PROMPT_SYMBOL.len() as u16),
		Constraint::Min(1),
		Constraint::Length(counter_width),
	])
	.areas(area);

	frame.render_widget(
		Line::from(Span::styled(PROMPT_SYMBOL, theme.prompt)),
		symbol_area,
	);
	input.render(frame, input_area);
	frame.render_widget(
		Line::from(Span::styled(counter, theme.empty_style())).right_aligned(),
		counter_area,
	);
}

/// Text of the live match counter.
#[must_use]
pub fn match_count_label(count: usize) -> String {
	format!("{count} matches")
}
