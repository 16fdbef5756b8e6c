use url::Url;

use crate::error::HassError;

const WEBSOCKET_PATH: &str = "/api/websocket";

/// Turn a Home Assistant base URL into its WebSocket endpoint.
///
/// `http`/`https` map to `ws`/`wss`, and `/api/websocket` is appended unless
/// the URL already points at it.
pub fn websocket_url(base: &str) -> Result<String, HassError> {
	let invalid = |reason: String| HassError::InvalidUrl {
		url: base.to_string(),
		reason,
	};

	let mut url = Url::parse(base.trim()).map_err(|err| invalid(err.to_string()))?;
	let scheme = match url.scheme() {
		"http" | "ws" => "ws",
		"https" | "wss" => "wss",
		other => return Err(invalid(format!("unsupported scheme '{other}'"))),
	};
	url.set_scheme(scheme)
		.map_err(|()| invalid("cannot change scheme".to_string()))?;

	let path = url.path().trim_end_matches('/').to_string();
	if !path.ends_with(WEBSOCKET_PATH) {
		url.set_path(&format!("{path}{WEBSOCKET_PATH}"));
	}
	url.set_query(None);
	url.set_fragment(None);
	Ok(url.to_string())
}
