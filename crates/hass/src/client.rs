use std::collections::BTreeMap;
use std::time::Duration;

use log::{debug, info, warn};
use logpick_core::{
	ApplyError, ApplyLevels, Level, LevelApplier, LoggerListing, LoggerSource, SourceError,
};
use serde_json::Value;

use crate::endpoint::websocket_url;
use crate::error::HassError;
use crate::protocol::{self, APPLY_LEVELS_SERVICE, SERVICE_DOMAIN};
use crate::session::Session;
use crate::transport::{Transport, WsTransport};

/// Connection parameters for a Home Assistant instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HassConfig {
	/// Base URL (`http://homeassistant.local:8123`) or a full websocket URL.
	pub url: String,
	/// Long-lived access token.
	pub token: String,
	/// Socket read/write timeout.
	pub timeout: Duration,
}

impl HassConfig {
	pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

	pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			token: token.into(),
			timeout: Self::DEFAULT_TIMEOUT,
		}
	}

	#[must_use]
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}

/// Opens transports for a [`HassClient`].
pub trait Connector {
	type Transport: Transport;

	fn connect(&self, config: &HassConfig) -> Result<Self::Transport, HassError>;
}

/// Opens real WebSocket connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct WsConnector;

impl Connector for WsConnector {
	type Transport = WsTransport;

	fn connect(&self, config: &HassConfig) -> Result<WsTransport, HassError> {
		let url = websocket_url(&config.url)?;
		debug!("connecting to {url}");
		WsTransport::connect(&url, config.timeout)
	}
}

/// Home Assistant backed [`LoggerSource`] and [`LevelApplier`].
///
/// The session is opened on first use and kept for later calls. Transport and
/// protocol failures drop it so the next call reconnects.
pub struct HassClient<C: Connector = WsConnector> {
	config: HassConfig,
	connector: C,
	session: Option<Session<C::Transport>>,
}

impl HassClient<WsConnector> {
	pub fn new(config: HassConfig) -> Self {
		Self::with_connector(config, WsConnector)
	}
}

impl<C: Connector> HassClient<C> {
	pub fn with_connector(config: HassConfig, connector: C) -> Self {
		Self {
			config,
			connector,
			session: None,
		}
	}

	/// Whether a session is currently open.
	#[must_use]
	pub fn is_connected(&self) -> bool {
		self.session.is_some()
	}

	fn session(&mut self) -> Result<&mut Session<C::Transport>, HassError> {
		if self.session.is_none() {
			let transport = self.connector.connect(&self.config)?;
			let session = Session::authenticate(transport, &self.config.token)?;
			info!(
				"connected to Home Assistant {}",
				session.ha_version().unwrap_or("(unknown version)")
			);
			self.session = Some(session);
		}
		self.session
			.as_mut()
			.ok_or_else(|| HassError::Unexpected("session unavailable".to_string()))
	}

	fn command(&mut self, body: Value) -> Result<Value, HassError> {
		let result = self.session().and_then(|session| session.command(body));
		if let Err(err) = &result {
			if err.is_fatal_for_session() && self.session.take().is_some() {
				warn!("dropping Home Assistant session: {err}");
			}
		}
		result
	}

	fn managed_levels(&mut self) -> Result<BTreeMap<String, Level>, HassError> {
		let states = self.command(protocol::get_states())?;
		Ok(protocol::managed_levels(states)?)
	}
}

impl<C: Connector> LoggerSource for HassClient<C> {
	fn fetch_loggers(&mut self) -> Result<LoggerListing, SourceError> {
		let result = self.command(protocol::get_loggers())?;
		let mut listing: LoggerListing =
			serde_json::from_value(result).map_err(|err| SourceError::Malformed(err.to_string()))?;
		match self.managed_levels() {
			Ok(managed) => listing.managed = managed,
			Err(err) if self.is_connected() => warn!("current logger levels unavailable: {err}"),
			Err(err) => return Err(err.into()),
		}
		debug!(
			"received {} loggers, {} managed (cached: {}, age {}s)",
			listing.loggers.len(),
			listing.managed.len(),
			listing.cached,
			listing.cache_age
		);
		Ok(listing)
	}
}

impl<C: Connector> LevelApplier for HassClient<C> {
	fn apply_levels(&mut self, request: &ApplyLevels) -> Result<(), ApplyError> {
		if request.loggers.is_empty() {
			return Err(ApplyError::EmptySelection);
		}
		let data = serde_json::to_value(request)
			.map_err(|err| ApplyError::Unavailable(err.to_string()))?;
		self.command(protocol::call_service(
			SERVICE_DOMAIN,
			APPLY_LEVELS_SERVICE,
			data,
		))?;
		info!(
			"applied {} to {} logger(s)",
			request.level,
			request.loggers.len()
		);
		Ok(())
	}
}
