use logpick_core::{Feedback, FeedbackKind, Level, Status, StatusKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::style::Theme;

/// Argument bundle for the header bar.
pub struct HeaderContext<'a> {
	pub title: &'a str,
	pub status: &'a Status,
	/// Age of the host-side logger cache, when the listing came from it.
	pub cache_age: Option<u64>,
	pub busy: bool,
	pub throbber_state: &'a ThrobberState,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the title on the left and the status line on the right.
pub fn render_header(frame: &mut Frame, ctx: HeaderContext<'_>) {
	let HeaderContext {
		title,
		status,
		cache_age,
		busy,
		throbber_state,
		area,
		theme,
	} = ctx;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let style = status_style(status.kind, theme);
	let mut line = Line::default();
	if busy || status.kind == StatusKind::Loading {
		let spinner = Throbber::default().style(style).throbber_style(style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(Span::styled(status.text.clone(), style));
	if let Some(age) = cache_age {
		line.spans.push(Span::styled(
			format!(" · cached {age}s ago"),
			theme.empty_style(),
		));
	}

	let status_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	let [title_area, status_area] =
		Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(area);
	frame.render_widget(Line::from(Span::styled(title, theme.header)), title_area);
	frame.render_widget(line.right_aligned(), status_area);
}

fn status_style(kind: StatusKind, theme: &Theme) -> Style {
	match kind {
		StatusKind::Loading | StatusKind::Empty => theme.empty_style(),
		StatusKind::Error => theme.error,
		StatusKind::Success => theme.success,
	}
}

/// Argument bundle for the level selector row.
pub struct LevelContext<'a> {
	pub level: Level,
	/// Number of selected loggers the level would be applied to.
	pub selected: usize,
	pub applying: bool,
	pub hint: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render `Level: < DEBUG >` followed by the key hint.
///
/// The selector is dimmed while nothing is selected.
pub fn render_level(frame: &mut Frame, ctx: LevelContext<'_>) {
	let LevelContext {
		level,
		selected,
		applying,
		hint,
		area,
		theme,
	} = ctx;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let level_style = if selected == 0 {
		theme.empty_style()
	} else {
		theme.prompt
	};
	let target = match (selected, applying) {
		(_, true) => " applying...".to_string(),
		(0, false) => " no loggers selected".to_string(),
		(count, false) => format!(" for {count} selected"),
	};
	let line = Line::from(vec![
		Span::styled("Level: ", theme.header),
		Span::styled(format!("< {} >", level.label()), level_style),
		Span::styled(target, theme.empty_style()),
		Span::styled(format!("   {hint}"), theme.empty_style().add_modifier(Modifier::ITALIC)),
	]);
	frame.render_widget(line, area);
}

/// Render the apply feedback banner, if any.
pub fn render_banner(frame: &mut Frame, feedback: Option<&Feedback>, area: Rect, theme: &Theme) {
	let Some(feedback) = feedback else {
		return;
	};
	let style = match feedback.kind {
		FeedbackKind::Success => theme.success,
		FeedbackKind::Error => theme.error,
	};
	frame.render_widget(
		Line::from(Span::styled(feedback.message.clone(), style)),
		area,
	);
}
