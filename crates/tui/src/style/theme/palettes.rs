//! Built-in colour schemes.

use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeRegistration};

const fn bold(style: Style) -> Style {
	style.add_modifier(Modifier::BOLD)
}

/// Dark blue-grey scheme; the default.
pub const SLATE: Theme = Theme {
	header: bold(Style::new().fg(Color::Rgb(0x8a, 0xad, 0xf4))),
	row_highlight: bold(
		Style::new()
			.fg(Color::Rgb(0x24, 0x27, 0x3a))
			.bg(Color::Rgb(0x8a, 0xad, 0xf4)),
	),
	prompt: bold(Style::new().fg(Color::Rgb(0xc6, 0xa0, 0xf6))),
	empty: Style::new().fg(Color::Rgb(0x6e, 0x73, 0x8d)),
	highlight: bold(Style::new().fg(Color::Rgb(0xee, 0xd4, 0x9f))),
	chip: Style::new()
		.fg(Color::Rgb(0x24, 0x27, 0x3a))
		.bg(Color::Rgb(0x91, 0xd7, 0xe3)),
	success: Style::new().fg(Color::Rgb(0xa6, 0xda, 0x95)),
	error: bold(Style::new().fg(Color::Rgb(0xed, 0x87, 0x96))),
};

/// Solarized for light terminals.
pub const SOLARIZED_LIGHT: Theme = Theme {
	header: bold(Style::new().fg(Color::Rgb(0x26, 0x8b, 0xd2))),
	row_highlight: Style::new()
		.fg(Color::Rgb(0xfd, 0xf6, 0xe3))
		.bg(Color::Rgb(0x26, 0x8b, 0xd2)),
	prompt: bold(Style::new().fg(Color::Rgb(0x6c, 0x71, 0xc4))),
	empty: Style::new().fg(Color::Rgb(0x93, 0xa1, 0xa1)),
	highlight: bold(Style::new().fg(Color::Rgb(0xcb, 0x4b, 0x16))),
	chip: Style::new()
		.fg(Color::Rgb(0xfd, 0xf6, 0xe3))
		.bg(Color::Rgb(0x2a, 0xa1, 0x98)),
	success: Style::new().fg(Color::Rgb(0x85, 0x99, 0x00)),
	error: bold(Style::new().fg(Color::Rgb(0xdc, 0x32, 0x2f))),
};

/// Modifiers only, for terminals without colour.
pub const MONO: Theme = Theme {
	header: bold(Style::new()),
	row_highlight: Style::new().add_modifier(Modifier::REVERSED),
	prompt: bold(Style::new()),
	empty: Style::new().add_modifier(Modifier::DIM),
	highlight: Style::new().add_modifier(Modifier::UNDERLINED),
	chip: Style::new().add_modifier(Modifier::REVERSED),
	success: bold(Style::new()),
	error: bold(Style::new().add_modifier(Modifier::REVERSED)),
};

pub(super) const REGISTRATIONS: &[ThemeRegistration] = &[
	ThemeRegistration {
		name: "mono",
		theme: MONO,
		aliases: &["plain", "no-color"],
	},
	ThemeRegistration {
		name: "slate",
		theme: SLATE,
		aliases: &["default", "dark"],
	},
	ThemeRegistration {
		name: "solarized-light",
		theme: SOLARIZED_LIGHT,
		aliases: &["light"],
	},
];
