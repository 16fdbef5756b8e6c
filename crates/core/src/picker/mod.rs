//! The search-select picker: candidate list, query, selection and focus.
//!
//! [`Picker`] owns three orthogonal tracks of mutable state (query, selection
//! set and focus index) on top of an immutable candidate list. Results are a
//! pure derivation of candidates, selection and query, recomputed after the
//! query debounce fires and synchronously on every selection change.

mod filter;

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use indexmap::IndexSet;
use log::debug;

pub use filter::filter_candidates;

use crate::debounce::Debounce;
use crate::level::Level;
use crate::remote::{ApplyLevels, LoggerListing};

/// Quiet period between the last query edit and the recompute.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(200);

/// Maximum number of result rows rendered at once.
pub const VISIBLE_LIMIT: usize = 25;

/// Lifecycle of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
	#[default]
	Uninitialized,
	Loading,
	Ready,
	/// The fetch failed with the contained message.
	Error(String),
}

/// Visual category of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
	Loading,
	Error,
	Success,
	Empty,
}

/// Status line describing the load state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
	pub kind: StatusKind,
	pub text: String,
}

/// The rendered slice of the results plus the count hidden beyond the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleResults<'a> {
	pub rows: &'a [String],
	pub overflow: usize,
}

/// Search, selection and keyboard-focus state for one picker session.
#[derive(Debug, Clone)]
pub struct Picker {
	candidates: Vec<String>,
	known: HashSet<String>,
	query: String,
	selection: IndexSet<String>,
	results: Vec<String>,
	focus: Option<usize>,
	debounce: Debounce,
	state: LoadState,
	cache_age: Option<u64>,
	managed: HashMap<String, Level>,
	generation: u64,
}

impl Default for Picker {
	fn default() -> Self {
		Self::new()
	}
}

impl Picker {
	/// Create an uninitialized picker with an empty query.
	#[must_use]
	pub fn new() -> Self {
		Self {
			candidates: Vec::new(),
			known: HashSet::new(),
			query: String::new(),
			selection: IndexSet::new(),
			results: Vec::new(),
			focus: None,
			debounce: Debounce::new(DEBOUNCE_INTERVAL),
			state: LoadState::Uninitialized,
			cache_age: None,
			managed: HashMap::new(),
			generation: 0,
		}
	}

	/// Create a picker whose query starts as `query`.
	#[must_use]
	pub fn with_query(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Self::new()
		}
	}

	/// Mark the first host binding.
	///
	/// Returns `true` only on the transition out of `Uninitialized`; every
	/// later call returns `false` so repeated bindings never fetch again.
	pub fn begin_loading(&mut self) -> bool {
		if self.state != LoadState::Uninitialized {
			return false;
		}
		self.state = LoadState::Loading;
		true
	}

	/// Replace the candidate set and recompute with the current query.
	///
	/// Duplicate names keep their first position.
	pub fn load<I, S>(&mut self, candidates: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut known = HashSet::new();
		let mut ordered = Vec::new();
		for candidate in candidates {
			let candidate = candidate.into();
			if known.insert(candidate.clone()) {
				ordered.push(candidate);
			}
		}
		debug!("picker loaded {} candidates", ordered.len());

		self.candidates = ordered;
		self.known = known;
		self.selection.retain(|name| self.known.contains(name));
		self.state = LoadState::Ready;
		self.recompute();
		self.focus = None;
	}

	/// Load a listing returned by the data source, keeping its cache age
	/// when it was served from the host cache.
	pub fn load_listing(&mut self, listing: LoggerListing) {
		self.cache_age = listing.cached.then_some(listing.cache_age);
		self.managed = listing.managed.into_iter().collect();
		self.load(listing.loggers);
	}

	/// Record a failed fetch: the candidate set is forced empty.
	pub fn fail(&mut self, message: impl Into<String>) {
		self.candidates.clear();
		self.known.clear();
		self.selection.clear();
		self.results.clear();
		self.managed.clear();
		self.focus = None;
		self.debounce.cancel();
		self.state = LoadState::Error(message.into());
	}

	/// Update the query text and schedule a debounced recompute.
	///
	/// The text is visible immediately through [`Picker::query`]; results only
	/// change once [`Picker::poll`] observes the quiet interval has passed.
	pub fn set_query(&mut self, text: impl Into<String>, now: Instant) {
		self.query = text.into();
		self.debounce.schedule(now);
	}

	/// Fire the pending recompute if its deadline has passed.
	///
	/// Returns `true` when results were recomputed.
	pub fn poll(&mut self, now: Instant) -> bool {
		if !self.debounce.fire(now) {
			return false;
		}
		self.recompute();
		self.focus = None;
		true
	}

	/// Run a pending recompute immediately instead of waiting out the delay.
	///
	/// Returns `true` when results were recomputed, which also resets focus.
	pub fn flush_query(&mut self) -> bool {
		if !self.debounce.cancel() {
			return false;
		}
		self.recompute();
		self.focus = None;
		true
	}

	/// Time until the pending recompute fires, if one is scheduled.
	#[must_use]
	pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
		self.debounce.remaining(now)
	}

	/// Derive the results from candidates, selection and query.
	#[must_use]
	pub fn compute_results(&self) -> Vec<String> {
		filter_candidates(&self.candidates, &self.selection, &self.query)
	}

	fn recompute(&mut self) {
		self.results = self.compute_results();
		self.generation = self.generation.wrapping_add(1);
	}

	/// Add `name` to the selection.
	///
	/// Unknown or already-selected names are ignored and return `false`.
	pub fn select(&mut self, name: &str) -> bool {
		if !self.known.contains(name) || self.selection.contains(name) {
			return false;
		}
		self.selection.insert(name.to_string());
		// The synchronous recompute already reflects the latest query text.
		self.debounce.cancel();
		self.recompute();
		self.focus = None;
		true
	}

	/// Remove `name` from the selection, making it eligible again.
	pub fn deselect(&mut self, name: &str) -> bool {
		if !self.selection.shift_remove(name) {
			return false;
		}
		self.debounce.cancel();
		self.recompute();
		self.focus = None;
		true
	}

	/// Remove the most recently selected name.
	pub fn pop_selection(&mut self) -> Option<String> {
		let name = self.selection.last().cloned()?;
		self.deselect(&name);
		Some(name)
	}

	/// Drop every selected name.
	pub fn clear_selection(&mut self) -> usize {
		let cleared = self.selection.len();
		if cleared > 0 {
			self.selection.clear();
			self.debounce.cancel();
			self.recompute();
			self.focus = None;
		}
		cleared
	}

	/// Move the focused row by `delta`, clamped to the rendered rows.
	///
	/// Starting from "no focus" behaves like starting from `-1`, so `+1`
	/// focuses the first row. Nothing happens when no rows are rendered.
	pub fn move_focus(&mut self, delta: isize) {
		let rendered = self.rendered_len();
		if rendered == 0 {
			return;
		}
		let current = self.focus.map_or(-1, |index| index as isize);
		let last = rendered as isize - 1;
		let target = current.saturating_add(delta).clamp(0, last);
		self.focus = Some(target as usize);
	}

	/// Select the focused row, returning the selected name.
	pub fn activate_focused(&mut self) -> Option<String> {
		let index = self.focus?;
		if index >= self.rendered_len() {
			return None;
		}
		let name = self.results.get(index)?.clone();
		self.select(&name).then_some(name)
	}

	/// Hand focus back to the query input.
	pub fn return_to_query(&mut self) {
		self.focus = None;
	}

	/// Build the apply payload for the current selection.
	#[must_use]
	pub fn apply_request(&self, level: Level) -> Option<ApplyLevels> {
		if self.selection.is_empty() {
			return None;
		}
		Some(ApplyLevels {
			level,
			loggers: self.selection.iter().cloned().collect(),
		})
	}

	/// Level the integration enforces for `name`; `notset` when unmanaged.
	#[must_use]
	pub fn current_level(&self, name: &str) -> Level {
		self.managed.get(name).copied().unwrap_or(Level::NotSet)
	}

	/// Managed level of `name`, if the integration tracks one.
	#[must_use]
	pub fn managed_level(&self, name: &str) -> Option<Level> {
		self.managed.get(name).copied()
	}

	/// Mirror an accepted apply into the managed levels.
	///
	/// `notset` releases the loggers, any other level starts tracking them.
	pub fn record_applied(&mut self, request: &ApplyLevels) {
		for name in &request.loggers {
			if request.level == Level::NotSet {
				self.managed.remove(name);
			} else {
				self.managed.insert(name.clone(), request.level);
			}
		}
	}

	/// The first [`VISIBLE_LIMIT`] results and the count beyond them.
	#[must_use]
	pub fn visible(&self) -> VisibleResults<'_> {
		let rendered = self.rendered_len();
		VisibleResults {
			rows: &self.results[..rendered],
			overflow: self.results.len() - rendered,
		}
	}

	fn rendered_len(&self) -> usize {
		self.results.len().min(VISIBLE_LIMIT)
	}

	/// Status line for the current load state.
	#[must_use]
	pub fn status(&self) -> Status {
		match &self.state {
			LoadState::Uninitialized | LoadState::Loading => Status {
				kind: StatusKind::Loading,
				text: "Loading loggers...".to_string(),
			},
			LoadState::Error(message) => Status {
				kind: StatusKind::Error,
				text: format!("Error: {message}"),
			},
			LoadState::Ready if !self.candidates.is_empty() => Status {
				kind: StatusKind::Success,
				text: format!("Loaded {} loggers", self.candidates.len()),
			},
			LoadState::Ready => Status {
				kind: StatusKind::Empty,
				text: "No loggers found".to_string(),
			},
		}
	}

	/// Whether the search box and result list should be shown.
	#[must_use]
	pub fn shows_search(&self) -> bool {
		self.state == LoadState::Ready && !self.candidates.is_empty()
	}

	#[must_use]
	pub fn state(&self) -> &LoadState {
		&self.state
	}

	#[must_use]
	pub fn candidates(&self) -> &[String] {
		&self.candidates
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn selection(&self) -> &IndexSet<String> {
		&self.selection
	}

	#[must_use]
	pub fn is_selected(&self, name: &str) -> bool {
		self.selection.contains(name)
	}

	/// Results as of the last recompute.
	#[must_use]
	pub fn results(&self) -> &[String] {
		&self.results
	}

	/// Number of results as of the last recompute.
	#[must_use]
	pub fn match_count(&self) -> usize {
		self.results.len()
	}

	#[must_use]
	pub fn focus(&self) -> Option<usize> {
		self.focus
	}

	/// Name under the focused row.
	#[must_use]
	pub fn focused_name(&self) -> Option<&str> {
		self.focus
			.and_then(|index| self.visible().rows.get(index))
			.map(String::as_str)
	}

	/// Age in seconds of a cached listing; `None` for a fresh discovery.
	#[must_use]
	pub fn cache_age(&self) -> Option<u64> {
		self.cache_age
	}

	/// Counter bumped on every recompute.
	#[must_use]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Whether a debounced recompute is waiting.
	#[must_use]
	pub fn has_pending_query(&self) -> bool {
		self.debounce.is_pending()
	}
}
