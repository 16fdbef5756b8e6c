use std::time::Instant;

use log::{debug, info, warn};
use logpick_core::{ApplyError, Feedback};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, SessionSummary};
use crate::components::point_in_rect;
use crate::worker::DispatchError;

/// Rows skipped by `PageUp` / `PageDown`.
const PAGE_STEP: isize = 10;

impl App<'_> {
	/// Process a keyboard event and return a summary if the user exits.
	///
	/// Global shortcuts are handled first. Everything else goes to whichever
	/// of the query input or the focused row currently owns focus.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<SessionSummary> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => return Some(self.summary()),
			KeyCode::Char('s') if ctrl => {
				self.apply_pending_level(now);
				return None;
			}
			KeyCode::Char('d') if ctrl => {
				let cleared = self.picker.clear_selection();
				debug!("cleared {cleared} selected logger(s)");
				return None;
			}
			KeyCode::Tab => {
				self.level = self.level.next();
				return None;
			}
			KeyCode::BackTab => {
				self.level = self.level.previous();
				return None;
			}
			_ => {}
		}

		if !self.picker.shows_search() {
			return (key.code == KeyCode::Esc).then(|| self.summary());
		}

		if self.picker.focus().is_some() {
			self.handle_row_key(key, now);
			None
		} else {
			self.handle_query_key(key, now)
		}
	}

	fn handle_row_key(&mut self, key: KeyEvent, now: Instant) {
		match key.code {
			KeyCode::Down => self.picker.move_focus(1),
			KeyCode::Up => self.picker.move_focus(-1),
			KeyCode::PageDown => self.picker.move_focus(PAGE_STEP),
			KeyCode::PageUp => self.picker.move_focus(-PAGE_STEP),
			KeyCode::Enter | KeyCode::Char(' ') => {
				if let Some(name) = self.picker.activate_focused() {
					debug!("selected {name}");
					self.preselect_current_level(&name);
				}
			}
			KeyCode::Esc => self.picker.return_to_query(),
			_ => {
				// Typing while a row is focused goes back to the query.
				self.picker.return_to_query();
				let _ = self.handle_query_key(key, now);
			}
		}
	}

	fn handle_query_key(&mut self, key: KeyEvent, now: Instant) -> Option<SessionSummary> {
		match key.code {
			KeyCode::Esc => return Some(self.summary()),
			KeyCode::Enter | KeyCode::Down => {
				// Rows must reflect the typed query before one can be focused.
				self.picker.flush_query();
				self.picker.move_focus(1);
			}
			KeyCode::Up | KeyCode::PageUp | KeyCode::PageDown => {}
			KeyCode::Backspace if self.query_input.is_empty() => {
				if let Some(name) = self.picker.pop_selection() {
					debug!("deselected {name}");
				}
			}
			_ => {
				if self.query_input.input(key) {
					self.picker.set_query(self.query_input.text(), now);
				}
			}
		}
		None
	}

	/// Show the managed level of the first selected logger in the selector.
	fn preselect_current_level(&mut self, name: &str) {
		if self.picker.selection().len() != 1 {
			return;
		}
		if let Some(level) = self.picker.managed_level(name) {
			debug!("{name} is managed at {level}");
			self.level = level;
		}
	}

	/// Send the selected level to the applier for every selected logger.
	pub(crate) fn apply_pending_level(&mut self, now: Instant) {
		let Some(request) = self.picker.apply_request(self.level) else {
			debug!("apply ignored: nothing selected");
			return;
		};
		let count = request.loggers.len();
		let level = request.level;
		match self.remote.apply(request) {
			Ok(id) => info!("applying {level} to {count} logger(s) as request {id}"),
			Err(DispatchError::Busy) => debug!("apply ignored: another apply is in flight"),
			Err(err @ DispatchError::Disconnected) => {
				let error = ApplyError::Unavailable(err.to_string());
				warn!("apply could not start: {error}");
				self.feedback.show(Feedback::failed(&error, now));
			}
		}
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(index) = self.row_at(mouse.column, mouse.row) {
					let name = self.picker.visible().rows[index].clone();
					if self.picker.select(&name) {
						debug!("selected {name} by mouse");
						self.preselect_current_level(&name);
					}
				} else if let Some(index) = self.chip_at(mouse.column, mouse.row) {
					let name = self.picker.selection().get_index(index).cloned();
					if let Some(name) = name {
						self.picker.deselect(&name);
						debug!("deselected {name} by mouse");
					}
				}
			}
			MouseEventKind::ScrollDown if self.over_rows(mouse.column, mouse.row) => {
				self.picker.move_focus(1);
			}
			MouseEventKind::ScrollUp if self.over_rows(mouse.column, mouse.row) => {
				self.picker.move_focus(-1);
			}
			_ => {}
		}
	}

	fn over_rows(&self, column: u16, row: u16) -> bool {
		self.rows_area
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	fn row_at(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.rows_area?;
		if !point_in_rect(column, row, area) {
			return None;
		}
		let index = self.table_state.offset() + usize::from(row - area.y);
		(index < self.picker.visible().rows.len()).then_some(index)
	}

	fn chip_at(&self, column: u16, row: u16) -> Option<usize> {
		self.chip_areas
			.iter()
			.position(|area| point_in_rect(column, row, *area))
	}
}
