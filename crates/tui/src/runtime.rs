//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use logpick_core::Backend;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::{App, AppOptions, SessionSummary};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Construct an [`App`] serving `backend` and run it to completion.
pub fn run(backend: Box<dyn Backend>, options: AppOptions) -> Result<SessionSummary> {
	let mut app = App::new(backend, options).context("failed to start the remote worker")?;
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<SessionSummary> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		self.start();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SessionSummary> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let now = Instant::now();
			let mut maybe_summary = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(summary) = self.handle_key(key, now) {
							maybe_summary = Some(summary);
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if let Some(summary) = maybe_summary {
				break Ok(summary);
			}

			self.tick(Instant::now());
			self.throbber_state.calc_next();

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(self.frame_pause(Instant::now()));
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}

impl App<'_> {
	/// Sleep until the next frame, waking early for a due query recompute.
	fn frame_pause(&self, now: Instant) -> Duration {
		self.picker
			.next_deadline(now)
			.map_or(FRAME_INTERVAL, |left| left.min(FRAME_INTERVAL))
	}
}
