/// Text rendered around the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title shown in the header bar.
	pub title: String,
	/// Placeholder displayed in the empty query input.
	pub query_placeholder: String,
	/// Title of the selection chip block.
	pub selection_title: String,
	/// Header of the logger name column.
	pub name_header: String,
	/// Header of the managed level column.
	pub current_header: String,
	/// Header of the description column.
	pub description_header: String,
	/// Key hint shown beside the level selector.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Logger Manager".to_string(),
			query_placeholder: "Search loggers...".to_string(),
			selection_title: "Selected".to_string(),
			name_header: "Logger".to_string(),
			current_header: "Current".to_string(),
			description_header: "Description".to_string(),
			hint: "Tab level · Ctrl+S apply · Ctrl+D clear · Esc back".to_string(),
		}
	}
}

impl UiLabels {
	/// Override the header title.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Override the query placeholder.
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.query_placeholder = placeholder.into();
		self
	}
}
