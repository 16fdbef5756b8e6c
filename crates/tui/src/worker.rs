//! Background worker owning the remote collaborator.
//!
//! Fetching and applying block on the network, so both run on a dedicated
//! thread. The UI sends numbered commands and drains results each frame.

use std::fmt;
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use log::debug;
use logpick_core::{ApplyError, ApplyLevels, Backend, LoggerListing, SourceError};

/// Commands sent to the remote worker thread.
pub enum RemoteCommand {
	/// Fetch the logger listing.
	Fetch { id: u64 },
	/// Apply a level to the selected loggers.
	Apply { id: u64, request: ApplyLevels },
	/// Shut down the worker thread.
	Shutdown,
}

/// Results sent back from the remote worker thread.
#[derive(Debug)]
pub enum RemoteResult {
	Fetched {
		id: u64,
		outcome: Result<LoggerListing, SourceError>,
	},
	Applied {
		id: u64,
		request: ApplyLevels,
		outcome: Result<(), ApplyError>,
	},
}

impl RemoteResult {
	#[must_use]
	pub fn id(&self) -> u64 {
		match self {
			Self::Fetched { id, .. } | Self::Applied { id, .. } => *id,
		}
	}
}

/// Spawn the worker thread for `backend`.
pub fn spawn(
	backend: Box<dyn Backend>,
) -> io::Result<(Sender<RemoteCommand>, Receiver<RemoteResult>)> {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();

	thread::Builder::new()
		.name("remote-worker".into())
		.spawn(move || worker_loop(backend, command_rx, result_tx))?;

	Ok((command_tx, result_rx))
}

fn worker_loop(
	mut backend: Box<dyn Backend>,
	command_rx: Receiver<RemoteCommand>,
	result_tx: Sender<RemoteResult>,
) {
	while let Ok(command) = command_rx.recv() {
		let result = match command {
			RemoteCommand::Fetch { id } => {
				debug!("fetch {id} started");
				let outcome = backend.fetch_loggers();
				debug!("fetch {id} finished, ok: {}", outcome.is_ok());
				RemoteResult::Fetched { id, outcome }
			}
			RemoteCommand::Apply { id, request } => {
				debug!("apply {id} started for {} logger(s)", request.loggers.len());
				let outcome = backend.apply_levels(&request);
				debug!("apply {id} finished, ok: {}", outcome.is_ok());
				RemoteResult::Applied {
					id,
					request,
					outcome,
				}
			}
			RemoteCommand::Shutdown => break,
		};

		// If the receiver is gone the UI has exited.
		if result_tx.send(result).is_err() {
			break;
		}
	}
	debug!("remote worker stopped");
}

/// Why a command was not handed to the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
	/// A request of the same kind is still outstanding.
	Busy,
	/// The worker thread has exited.
	Disconnected,
}

impl fmt::Display for DispatchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Busy => f.write_str("another request is still running"),
			Self::Disconnected => f.write_str("remote worker is not running"),
		}
	}
}

impl std::error::Error for DispatchError {}

/// Handle for issuing remote commands and tracking the outstanding ones.
pub struct RemoteRuntime {
	tx: Sender<RemoteCommand>,
	rx: Receiver<RemoteResult>,
	next_id: u64,
	pending_fetch: Option<u64>,
	pending_apply: Option<u64>,
}

impl RemoteRuntime {
	/// Start a worker serving `backend`.
	pub fn new(backend: Box<dyn Backend>) -> io::Result<Self> {
		let (tx, rx) = spawn(backend)?;
		Ok(Self {
			tx,
			rx,
			next_id: 0,
			pending_fetch: None,
			pending_apply: None,
		})
	}

	fn next_id(&mut self) -> u64 {
		self.next_id = self.next_id.wrapping_add(1);
		self.next_id
	}

	/// Request the logger listing. Returns the request id.
	pub fn fetch(&mut self) -> Result<u64, DispatchError> {
		let id = self.next_id();
		if self.tx.send(RemoteCommand::Fetch { id }).is_err() {
			debug!("remote worker is gone; fetch {id} dropped");
			self.pending_fetch = None;
			return Err(DispatchError::Disconnected);
		}
		self.pending_fetch = Some(id);
		Ok(id)
	}

	/// Request an apply. Only one apply may be outstanding at a time.
	pub fn apply(&mut self, request: ApplyLevels) -> Result<u64, DispatchError> {
		if self.pending_apply.is_some() {
			return Err(DispatchError::Busy);
		}
		let id = self.next_id();
		if self.tx.send(RemoteCommand::Apply { id, request }).is_err() {
			debug!("remote worker is gone; apply {id} dropped");
			return Err(DispatchError::Disconnected);
		}
		self.pending_apply = Some(id);
		Ok(id)
	}

	/// A runtime whose worker has already exited.
	#[cfg(test)]
	pub(crate) fn disconnected() -> Self {
		let (tx, _) = mpsc::channel();
		let (_, rx) = mpsc::channel();
		Self {
			tx,
			rx,
			next_id: 0,
			pending_fetch: None,
			pending_apply: None,
		}
	}

	#[must_use]
	pub fn is_fetching(&self) -> bool {
		self.pending_fetch.is_some()
	}

	#[must_use]
	pub fn is_applying(&self) -> bool {
		self.pending_apply.is_some()
	}

	/// Take the next finished result for an outstanding request.
	///
	/// Results for ids that are no longer outstanding are discarded.
	pub fn try_recv(&mut self) -> Option<RemoteResult> {
		loop {
			match self.rx.try_recv() {
				Ok(result) => {
					if self.settle(&result) {
						return Some(result);
					}
				}
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => return None,
			}
		}
	}

	/// Block up to `timeout` for the next outstanding result.
	pub fn recv_timeout(&mut self, timeout: Duration) -> Option<RemoteResult> {
		loop {
			match self.rx.recv_timeout(timeout) {
				Ok(result) => {
					if self.settle(&result) {
						return Some(result);
					}
				}
				Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return None,
			}
		}
	}

	fn settle(&mut self, result: &RemoteResult) -> bool {
		let slot = match result {
			RemoteResult::Fetched { .. } => &mut self.pending_fetch,
			RemoteResult::Applied { .. } => &mut self.pending_apply,
		};
		if *slot == Some(result.id()) {
			*slot = None;
			true
		} else {
			debug!("discarding stale remote result {}", result.id());
			false
		}
	}

	/// Ask the worker to exit.
	pub fn shutdown(&self) {
		let _ = self.tx.send(RemoteCommand::Shutdown);
	}
}

impl Drop for RemoteRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}

#[cfg(test)]
mod tests {
	use logpick_core::{Level, LoggerListing, StaticBackend};

	use super::*;

	const WAIT: Duration = Duration::from_secs(5);

	#[test]
	fn fetch_round_trips_through_the_worker() {
		let backend = StaticBackend::new(LoggerListing::new(["a", "b"]));
		let mut runtime = RemoteRuntime::new(Box::new(backend)).unwrap();

		let id = runtime.fetch().unwrap();
		assert!(runtime.is_fetching());
		match runtime.recv_timeout(WAIT) {
			Some(RemoteResult::Fetched { id: got, outcome }) => {
				assert_eq!(got, id);
				assert_eq!(outcome.unwrap().loggers, vec!["a", "b"]);
			}
			other => panic!("unexpected result: {other:?}"),
		}
		assert!(!runtime.is_fetching());
	}

	#[test]
	fn only_one_apply_is_in_flight() {
		let backend = StaticBackend::new(LoggerListing::new(["a"]));
		let mut runtime = RemoteRuntime::new(Box::new(backend)).unwrap();
		let request = ApplyLevels {
			level: Level::Info,
			loggers: vec!["a".into()],
		};

		assert!(runtime.apply(request.clone()).is_ok());
		assert_eq!(runtime.apply(request.clone()), Err(DispatchError::Busy));

		match runtime.recv_timeout(WAIT) {
			Some(RemoteResult::Applied { outcome, .. }) => assert!(outcome.is_ok()),
			other => panic!("unexpected result: {other:?}"),
		}
		assert!(runtime.apply(request).is_ok());
	}

	#[test]
	fn dead_worker_leaves_nothing_pending() {
		let mut runtime = RemoteRuntime::disconnected();
		assert_eq!(runtime.fetch(), Err(DispatchError::Disconnected));
		assert!(!runtime.is_fetching());

		let request = ApplyLevels {
			level: Level::Info,
			loggers: vec!["a".into()],
		};
		assert_eq!(runtime.apply(request), Err(DispatchError::Disconnected));
		assert!(!runtime.is_applying());
	}
}
