use std::time::{Duration, Instant};

use logpick_core::{Level, LoggerListing, SourceError, StaticBackend};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{App, AppOptions, Theme};

const WIDTH: u16 = 72;

fn listing() -> LoggerListing {
	let mut listing = LoggerListing::new([
		"homeassistant.core",
		"homeassistant.components.zha",
		"custom_components.hacs",
		"aiohttp.access",
	])
	.with_managed([
		("homeassistant.core", Level::Info),
		("custom_components.hacs", Level::Debug),
	]);
	listing.cached = true;
	listing.cache_age = 30;
	listing
}

fn started(backend: StaticBackend) -> App<'static> {
	let options = AppOptions {
		theme: Theme::PLAIN,
		..AppOptions::default()
	};
	let mut app = App::new(Box::new(backend), options).expect("spawn worker");
	app.start();
	let result = app
		.remote
		.recv_timeout(Duration::from_secs(5))
		.expect("remote result");
	app.absorb_remote(result, Instant::now());
	app
}

fn press(app: &mut App<'_>, code: KeyCode) {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

fn screen(app: &mut App<'_>, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(WIDTH, height)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw snapshot frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}

#[test]
fn loaded_picker_snapshot() {
	let mut app = started(StaticBackend::new(listing()));
	let snapshot = screen(&mut app, 12);
	insta::assert_snapshot!("loaded_picker", snapshot);
}

#[test]
fn overflowing_results_snapshot() {
	let names: Vec<String> = (0..30).map(|index| format!("logger.{index:02}")).collect();
	let mut app = started(StaticBackend::new(LoggerListing::new(names)));
	let snapshot = screen(&mut app, 34);
	assert!(snapshot.contains("logger.24"));
	assert!(!snapshot.contains("logger.25"));
	insta::assert_snapshot!("overflowing_results", snapshot);
}

#[test]
fn fetch_error_snapshot() {
	let mut app = started(StaticBackend::failing(SourceError::Unavailable(
		"network down".into(),
	)));
	let snapshot = screen(&mut app, 9);
	insta::assert_snapshot!("fetch_error", snapshot);
}

#[test]
fn selected_chips_snapshot() {
	let mut app = started(StaticBackend::new(listing()));
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.level(), Level::Info);

	let snapshot = screen(&mut app, 13);
	insta::assert_snapshot!("selected_chips", snapshot);
}
