mod palettes;
mod types;

pub use palettes::{MONO, SLATE, SOLARIZED_LIGHT};
pub use types::{Theme, ThemeRegistration};

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeRegistration] {
	palettes::REGISTRATIONS
}

/// Look up a built-in theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	palettes::REGISTRATIONS
		.iter()
		.find(|registration| registration.matches(name))
		.map(|registration| registration.theme)
}

/// Names of the built-in themes in sorted order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	palettes::REGISTRATIONS
		.iter()
		.map(|registration| registration.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_themes_are_listed_in_order() {
		assert_eq!(names(), vec!["mono", "slate", "solarized-light"]);
	}

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("SLATE"), Some(SLATE));
		assert_eq!(by_name("default"), Some(SLATE));
		assert_eq!(by_name(" light "), Some(SOLARIZED_LIGHT));
		assert_eq!(by_name("no-color"), Some(MONO));
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn default_theme_is_slate() {
		assert_eq!(default_theme(), SLATE);
	}
}
