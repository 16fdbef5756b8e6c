//! Core state container for the terminal front-end.

use std::io;
use std::time::Instant;

use log::error;
use logpick_core::{ApplyLevels, Backend, FeedbackSlot, Level, Picker};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::{StyleConfig, Theme};
use crate::worker::RemoteRuntime;

/// Start-up choices for an [`App`].
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
	/// Query typed into the search box before the list arrives.
	pub initial_query: String,
	/// Level preselected in the level selector.
	pub level: Level,
	pub theme: Theme,
	pub labels: UiLabels,
}

/// What happened during a session, reported once the UI exits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
	/// Requests the applier accepted, in order.
	pub applied: Vec<ApplyLevels>,
	/// Names still selected on exit.
	pub selection: Vec<String>,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) picker: Picker,
	/// Text input widget for the search query.
	pub(crate) query_input: QueryInput<'a>,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) level: Level,
	pub(crate) feedback: FeedbackSlot,
	pub(crate) remote: RemoteRuntime,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) table_state: TableState,
	/// Screen area of the data rows from the last frame.
	pub(crate) rows_area: Option<Rect>,
	/// Screen area of each selection chip from the last frame.
	pub(crate) chip_areas: Vec<Rect>,
	pub(crate) applied: Vec<ApplyLevels>,
	pub(crate) last_tick: Instant,
}

impl<'a> App<'a> {
	/// Construct an [`App`] whose worker serves `backend`.
	pub fn new(backend: Box<dyn Backend>, options: AppOptions) -> io::Result<Self> {
		let AppOptions {
			initial_query,
			level,
			theme,
			labels,
		} = options;

		let mut app = Self {
			picker: Picker::with_query(initial_query.clone()),
			query_input: QueryInput::new(initial_query),
			ui: labels,
			style: StyleConfig::with_theme(theme),
			level,
			feedback: FeedbackSlot::default(),
			remote: RemoteRuntime::new(backend)?,
			throbber_state: ThrobberState::default(),
			table_state: TableState::default(),
			rows_area: None,
			chip_areas: Vec::new(),
			applied: Vec::new(),
			last_tick: Instant::now(),
		};
		app.style_input();
		Ok(app)
	}

	fn style_input(&mut self) {
		let placeholder = self.ui.query_placeholder.clone();
		self.query_input
			.set_placeholder(placeholder, self.style.theme.empty_style());
	}

	/// Issue the one-time fetch. Later calls do nothing.
	pub fn start(&mut self) {
		if self.picker.begin_loading()
			&& let Err(err) = self.remote.fetch()
		{
			error!("logger fetch could not start: {err}");
			self.picker.fail(err.to_string());
		}
	}

	/// Advance timers and absorb finished remote work.
	pub fn tick(&mut self, now: Instant) {
		self.last_tick = now;
		self.pump_remote(now);
		self.picker.poll(now);
		self.feedback.clear_expired(now);
	}

	#[must_use]
	pub fn picker(&self) -> &Picker {
		&self.picker
	}

	/// Level currently chosen in the selector.
	#[must_use]
	pub fn level(&self) -> Level {
		self.level
	}

	#[must_use]
	pub fn summary(&self) -> SessionSummary {
		SessionSummary {
			applied: self.applied.clone(),
			selection: self.picker.selection().iter().cloned().collect(),
		}
	}
}
