use logpick_core::StatusKind;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::App;
use crate::components::chips::chips_height;
use crate::components::{
	ChipsContext, HeaderContext, LevelContext, PromptContext, ResultsContext, TableSpec,
	build_rows, column_widths, render_banner, render_chips, render_header, render_level,
	render_prompt, render_table,
};

impl App<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let status = self.picker.status();
		render_header(
			frame,
			HeaderContext {
				title: &self.ui.title,
				status: &status,
				cache_age: self.picker.cache_age(),
				busy: self.remote.is_applying(),
				throbber_state: &self.throbber_state,
				area: Rect { height: 1, ..area },
				theme: &self.style.theme,
			},
		);
		let body = Rect {
			y: area.y.saturating_add(1),
			height: area.height.saturating_sub(1),
			..area
		};

		if self.picker.shows_search() {
			self.draw_picker(frame, body);
		} else {
			self.rows_area = None;
			self.chip_areas.clear();
			self.draw_placeholder(frame, body, status.kind, &status.text);
		}
	}

	fn draw_picker(&mut self, frame: &mut Frame, area: Rect) {
		let selection: Vec<&str> = self.picker.selection().iter().map(String::as_str).collect();
		let chips = chips_height(&selection, area.width);
		let [prompt_area, chips_area, results_area, level_area, banner_area] =
			Layout::vertical([
				Constraint::Length(1),
				Constraint::Length(chips),
				Constraint::Min(3),
				Constraint::Length(1),
				Constraint::Length(1),
			])
			.areas(area);

		self.query_input.set_active(self.picker.focus().is_none());
		render_prompt(
			frame,
			PromptContext {
				input: &self.query_input,
				match_count: self.picker.match_count(),
				area: prompt_area,
				theme: &self.style.theme,
			},
		);

		self.chip_areas = render_chips(
			frame,
			ChipsContext {
				names: &selection,
				title: &self.ui.selection_title,
				area: chips_area,
				theme: &self.style.theme,
			},
		);

		let visible = self.picker.visible();
		let picker = &self.picker;
		let spec = TableSpec {
			headers: vec![
				self.ui.name_header.clone(),
				self.ui.current_header.clone(),
				self.ui.description_header.clone(),
			],
			widths: column_widths(
				visible.rows,
				&self.ui.name_header,
				&self.ui.current_header,
				results_area.width,
			),
			rows: build_rows(
				visible.rows,
				picker.query(),
				|name| picker.managed_level(name),
				&self.style.theme,
			),
			title: None,
		};
		self.table_state.select(self.picker.focus());
		self.rows_area = Some(render_table(
			frame,
			ResultsContext {
				area: results_area,
				overflow: visible.overflow,
				theme: &self.style.theme,
			},
			&mut self.table_state,
			spec,
		));

		render_level(
			frame,
			LevelContext {
				level: self.level,
				selected: selection.len(),
				applying: self.remote.is_applying(),
				hint: &self.ui.hint,
				area: level_area,
				theme: &self.style.theme,
			},
		);
		render_banner(
			frame,
			self.feedback.current(self.last_tick),
			banner_area,
			&self.style.theme,
		);
	}

	fn draw_placeholder(&self, frame: &mut Frame, area: Rect, kind: StatusKind, text: &str) {
		let style = match kind {
			StatusKind::Error => self.style.theme.error,
			_ => self.style.theme.empty_style(),
		};
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(self.style.theme.border_style());
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if inner.height == 0 {
			return;
		}
		let message_area = Rect {
			y: inner.y + inner.height / 2,
			height: inner.height - inner.height / 2,
			..inner
		};
		let message = Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
			.alignment(Alignment::Center)
			.wrap(Wrap { trim: true });
		frame.render_widget(message, message_area);
	}
}
