use logpick_core::{ApplyError, SourceError};
use thiserror::Error;

/// Errors raised while talking to Home Assistant.
#[derive(Debug, Error)]
pub enum HassError {
	#[error("invalid Home Assistant URL '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },

	#[error("connection failed: {0}")]
	Connect(String),

	#[error("websocket error: {0}")]
	WebSocket(#[from] tungstenite::Error),

	#[error("malformed message: {0}")]
	Json(#[from] serde_json::Error),

	#[error("authentication failed: {0}")]
	AuthInvalid(String),

	#[error("unexpected message: {0}")]
	Unexpected(String),

	#[error("connection closed by Home Assistant")]
	Closed,

	/// A command finished with `success: false`.
	#[error("{message}")]
	Remote { code: String, message: String },

	#[error("could not read {path}: {reason}")]
	File { path: String, reason: String },
}

impl HassError {
	/// Whether the underlying connection is unusable after this error.
	#[must_use]
	pub fn is_fatal_for_session(&self) -> bool {
		!matches!(self, Self::Remote { .. })
	}
}

impl From<HassError> for SourceError {
	fn from(error: HassError) -> Self {
		match error {
			HassError::Remote { code, message } => Self::Remote { code, message },
			HassError::Json(err) => Self::Malformed(err.to_string()),
			other => Self::Unavailable(other.to_string()),
		}
	}
}

impl From<HassError> for ApplyError {
	fn from(error: HassError) -> Self {
		match error {
			HassError::Remote { code, message } => Self::Remote { code, message },
			other => Self::Unavailable(other.to_string()),
		}
	}
}
