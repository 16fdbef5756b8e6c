//! Messages exchanged with the Home Assistant WebSocket API.

use std::collections::BTreeMap;

use logpick_core::Level;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// WebSocket command listing the loggers known to Logger Manager.
pub const GET_LOGGERS: &str = "logger_manager/get_loggers";
/// WebSocket command returning every entity state.
pub const GET_STATES: &str = "get_states";
/// Sensor whose `managed_loggers` attribute maps logger names to levels.
pub const LEVELS_SENSOR: &str = "sensor.logger_levels";
/// Service domain registered by the Logger Manager integration.
pub const SERVICE_DOMAIN: &str = "logger_manager";
/// Service applying one level to many loggers.
pub const APPLY_LEVELS_SERVICE: &str = "apply_levels";

/// Messages sent by Home Assistant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
	AuthRequired {
		#[serde(default)]
		ha_version: Option<String>,
	},
	AuthOk {
		#[serde(default)]
		ha_version: Option<String>,
	},
	AuthInvalid {
		#[serde(default)]
		message: Option<String>,
	},
	Result {
		id: u64,
		success: bool,
		#[serde(default)]
		result: Option<Value>,
		#[serde(default)]
		error: Option<ErrorInfo>,
	},
	/// Events, pongs and anything else the client does not act on.
	#[serde(other)]
	Other,
}

/// Error payload of a failed command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorInfo {
	pub code: String,
	pub message: String,
}

/// Authentication message answering `auth_required`.
#[derive(Debug, Serialize)]
pub struct Auth<'a> {
	#[serde(rename = "type")]
	pub kind: &'static str,
	pub access_token: &'a str,
}

impl<'a> Auth<'a> {
	#[must_use]
	pub fn new(access_token: &'a str) -> Self {
		Self {
			kind: "auth",
			access_token,
		}
	}
}

/// Build the `get_loggers` command body (without id).
#[must_use]
pub fn get_loggers() -> Value {
	serde_json::json!({ "type": GET_LOGGERS })
}

/// Build the `get_states` command body (without id).
#[must_use]
pub fn get_states() -> Value {
	serde_json::json!({ "type": GET_STATES })
}

/// One entry of the `get_states` result.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityState {
	pub entity_id: String,
	#[serde(default)]
	pub attributes: Map<String, Value>,
}

/// Extract the managed logger levels from a `get_states` result.
///
/// A missing sensor yields an empty map. Entries whose level is not a known
/// level name are skipped.
pub fn managed_levels(states: Value) -> Result<BTreeMap<String, Level>, serde_json::Error> {
	let states: Vec<EntityState> = serde_json::from_value(states)?;
	let Some(sensor) = states.into_iter().find(|state| state.entity_id == LEVELS_SENSOR) else {
		return Ok(BTreeMap::new());
	};
	let Some(Value::Object(managed)) = sensor.attributes.get("managed_loggers") else {
		return Ok(BTreeMap::new());
	};
	Ok(managed
		.iter()
		.filter_map(|(name, level)| {
			let level = level.as_str()?.parse::<Level>().ok()?;
			Some((name.clone(), level))
		})
		.collect())
}

/// Build a `call_service` command body (without id).
#[must_use]
pub fn call_service(domain: &str, service: &str, service_data: Value) -> Value {
	serde_json::json!({
		"type": "call_service",
		"domain": domain,
		"service": service,
		"service_data": service_data,
	})
}
