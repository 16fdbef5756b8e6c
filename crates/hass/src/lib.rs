//! Home Assistant collaborators for the logger picker.
//!
//! [`HassClient`] speaks the Home Assistant WebSocket API: it authenticates
//! with a long-lived access token, runs `logger_manager/get_loggers` to list
//! loggers, reads their current levels off the `sensor.logger_levels` entity
//! and calls the `logger_manager.apply_levels` service to change levels. [`FileSource`] serves a listing from a JSON file for offline use.

mod client;
mod endpoint;
mod error;
mod file;
pub mod protocol;
mod session;
mod transport;

pub use client::{Connector, HassClient, HassConfig, WsConnector};
pub use endpoint::websocket_url;
pub use error::HassError;
pub use file::FileSource;
pub use session::Session;
pub use transport::{Transport, WsTransport};
