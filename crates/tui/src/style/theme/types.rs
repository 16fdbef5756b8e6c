use ratatui::style::{Color, Modifier, Style};

/// Styles for the elements of the picker screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Borders, table headers and the title bar.
	pub header: Style,
	/// The focused result row.
	pub row_highlight: Style,
	/// The query prompt.
	pub prompt: Style,
	/// Placeholders, hints and other muted text.
	pub empty: Style,
	/// The part of a logger name matching the query.
	pub highlight: Style,
	/// Selection chips.
	pub chip: Style,
	/// Success status and banners.
	pub success: Style,
	/// Error status and banners.
	pub error: Style,
}

impl Theme {
	/// Minimal theme relying on terminal defaults.
	pub const PLAIN: Self = Self {
		header: Style::new().fg(Color::Gray),
		row_highlight: Style::new().add_modifier(Modifier::REVERSED),
		prompt: Style::new().add_modifier(Modifier::BOLD),
		empty: Style::new().fg(Color::DarkGray),
		highlight: Style::new().add_modifier(Modifier::UNDERLINED),
		chip: Style::new().add_modifier(Modifier::BOLD),
		success: Style::new().fg(Color::Green),
		error: Style::new().fg(Color::Red),
	};

	/// Style for muted text.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Colour used for borders.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::default().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

/// A named theme with optional aliases.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRegistration {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeRegistration {
	/// Whether `name` refers to this theme, ignoring ASCII case.
	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
