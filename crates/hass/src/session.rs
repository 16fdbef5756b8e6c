//! An authenticated command channel on top of a [`Transport`].

use log::{debug, trace};
use serde_json::Value;

use crate::error::HassError;
use crate::protocol::{Auth, ServerMessage};
use crate::transport::Transport;

/// Authenticated Home Assistant session issuing numbered commands.
pub struct Session<T> {
	transport: T,
	next_id: u64,
	ha_version: Option<String>,
}

impl<T: Transport> Session<T> {
	/// Run the auth handshake on a freshly opened transport.
	pub fn authenticate(mut transport: T, access_token: &str) -> Result<Self, HassError> {
		match receive(&mut transport)? {
			ServerMessage::AuthRequired { .. } => {}
			other => {
				return Err(HassError::Unexpected(format!(
					"expected auth_required, got {other:?}"
				)));
			}
		}

		transport.send_text(serde_json::to_string(&Auth::new(access_token))?)?;

		match receive(&mut transport)? {
			ServerMessage::AuthOk { ha_version } => {
				debug!(
					"authenticated with Home Assistant {}",
					ha_version.as_deref().unwrap_or("(unknown version)")
				);
				Ok(Self {
					transport,
					next_id: 1,
					ha_version,
				})
			}
			ServerMessage::AuthInvalid { message } => Err(HassError::AuthInvalid(
				message.unwrap_or_else(|| "invalid access token".to_string()),
			)),
			other => Err(HassError::Unexpected(format!(
				"expected auth_ok, got {other:?}"
			))),
		}
	}

	/// Version reported during authentication.
	#[must_use]
	pub fn ha_version(&self) -> Option<&str> {
		self.ha_version.as_deref()
	}

	/// Send `body` with a fresh id and wait for its result.
	///
	/// Frames for other ids, events and unknown types are skipped.
	pub fn command(&mut self, mut body: Value) -> Result<Value, HassError> {
		let id = self.next_id;
		self.next_id += 1;

		let Value::Object(fields) = &mut body else {
			return Err(HassError::Unexpected(
				"command body must be a JSON object".to_string(),
			));
		};
		fields.insert("id".to_string(), Value::from(id));
		trace!("sending command {id}: {body}");
		self.transport.send_text(body.to_string())?;

		loop {
			match receive(&mut self.transport)? {
				ServerMessage::Result {
					id: result_id,
					success,
					result,
					error,
				} if result_id == id => {
					if success {
						return Ok(result.unwrap_or(Value::Null));
					}
					let error = error.unwrap_or_else(|| crate::protocol::ErrorInfo {
						code: "unknown_error".to_string(),
						message: "command failed without details".to_string(),
					});
					return Err(HassError::Remote {
						code: error.code,
						message: error.message,
					});
				}
				other => trace!("skipping frame while waiting for {id}: {other:?}"),
			}
		}
	}

	/// Give the transport back, e.g. to inspect it in tests.
	pub fn into_transport(self) -> T {
		self.transport
	}
}

fn receive<T: Transport>(transport: &mut T) -> Result<ServerMessage, HassError> {
	let text = transport.recv_text()?;
	Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
pub(crate) mod tests {
	use std::collections::VecDeque;

	use super::*;
	use crate::protocol;

	/// Transport replaying canned server frames and recording client frames.
	#[derive(Default)]
	pub(crate) struct ScriptedTransport {
		pub incoming: VecDeque<String>,
		pub sent: Vec<Value>,
	}

	impl ScriptedTransport {
		pub(crate) fn new<I: IntoIterator<Item = Value>>(frames: I) -> Self {
			Self {
				incoming: frames.into_iter().map(|frame| frame.to_string()).collect(),
				sent: Vec::new(),
			}
		}
	}

	impl Transport for ScriptedTransport {
		fn send_text(&mut self, text: String) -> Result<(), HassError> {
			self.sent.push(serde_json::from_str(&text)?);
			Ok(())
		}

		fn recv_text(&mut self) -> Result<String, HassError> {
			self.incoming.pop_front().ok_or(HassError::Closed)
		}
	}

	pub(crate) fn handshake() -> Vec<Value> {
		vec![
			serde_json::json!({"type": "auth_required", "ha_version": "2025.1.0"}),
			serde_json::json!({"type": "auth_ok", "ha_version": "2025.1.0"}),
		]
	}

	#[test]
	fn authenticates_and_runs_commands() {
		let mut frames = handshake();
		frames.push(serde_json::json!({"id": 99, "type": "event", "event": {}}));
		frames.push(serde_json::json!({
			"id": 1, "type": "result", "success": true,
			"result": {"loggers": ["homeassistant.core"], "cached": true, "cache_age": 12}
		}));

		let mut session =
			Session::authenticate(ScriptedTransport::new(frames), "token").unwrap();
		assert_eq!(session.ha_version(), Some("2025.1.0"));

		let result = session.command(protocol::get_loggers()).unwrap();
		assert_eq!(result["cache_age"], 12);

		let transport = session.into_transport();
		assert_eq!(
			transport.sent,
			vec![
				serde_json::json!({"type": "auth", "access_token": "token"}),
				serde_json::json!({"id": 1, "type": "logger_manager/get_loggers"}),
			]
		);
	}

	#[test]
	fn invalid_token_is_reported() {
		let frames = vec![
			serde_json::json!({"type": "auth_required"}),
			serde_json::json!({"type": "auth_invalid", "message": "Invalid access token or password"}),
		];
		let err = Session::authenticate(ScriptedTransport::new(frames), "bad")
			.err()
			.unwrap();
		assert!(matches!(err, HassError::AuthInvalid(message) if message.contains("Invalid")));
	}

	#[test]
	fn failed_commands_surface_remote_errors() {
		let mut frames = handshake();
		frames.push(serde_json::json!({
			"id": 1, "type": "result", "success": false,
			"error": {"code": "unauthorized", "message": "Unauthorized"}
		}));
		let mut session =
			Session::authenticate(ScriptedTransport::new(frames), "token").unwrap();
		let err = session.command(protocol::get_loggers()).unwrap_err();
		assert!(matches!(
			err,
			HassError::Remote { ref code, ref message } if code == "unauthorized" && message == "Unauthorized"
		));
		assert!(!err.is_fatal_for_session());
	}

	#[test]
	fn closed_socket_while_waiting_is_fatal() {
		let mut session =
			Session::authenticate(ScriptedTransport::new(handshake()), "token").unwrap();
		let err = session.command(protocol::get_loggers()).unwrap_err();
		assert!(matches!(err, HassError::Closed));
		assert!(err.is_fatal_for_session());
	}
}
