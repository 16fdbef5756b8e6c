//! Single-line query input built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Text field holding the search query.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	/// Apply an editing key. Returns `true` when the text changed.
	///
	/// Keys that would start a new line are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if breaks_line(key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		if self.textarea.lines().len() > 1 {
			let joined = self.textarea.lines().concat();
			self.set_text(joined);
		}
		self.text() != before
	}

	/// Replace the text and move the cursor to its end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let placeholder = self.textarea.placeholder_text().to_string();
		let placeholder_style = self.textarea.placeholder_style();
		let style = self.textarea.style();
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(placeholder);
		if let Some(placeholder_style) = placeholder_style {
			textarea.set_placeholder_style(placeholder_style);
		}
		textarea.set_style(style);
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	/// Show or hide the cursor.
	pub fn set_active(&mut self, active: bool) {
		let style = if active {
			Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn breaks_line(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_edits_the_text() {
		let mut input = QueryInput::new("");
		assert!(input.input(key(KeyCode::Char('h'))));
		assert!(input.input(key(KeyCode::Char('a'))));
		assert_eq!(input.text(), "ha");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "h");
	}

	#[test]
	fn enter_never_adds_a_line() {
		let mut input = QueryInput::new("core");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "core");
	}

	#[test]
	fn backspace_on_empty_reports_no_change() {
		let mut input = QueryInput::new("");
		assert!(!input.input(key(KeyCode::Backspace)));
		assert!(input.is_empty());
	}

	#[test]
	fn initial_text_keeps_cursor_at_end() {
		let mut input = QueryInput::new("hom");
		input.input(key(KeyCode::Char('e')));
		assert_eq!(input.text(), "home");
	}
}
