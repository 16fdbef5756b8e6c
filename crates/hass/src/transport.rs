use std::net::TcpStream;
use std::time::Duration;

use log::trace;
use tungstenite::stream::MaybeTlsStream;
use tungstenite::{Message, WebSocket};

use crate::error::HassError;

/// A text-frame channel to Home Assistant.
pub trait Transport {
	fn send_text(&mut self, text: String) -> Result<(), HassError>;

	/// Block until the next text frame arrives.
	fn recv_text(&mut self) -> Result<String, HassError>;
}

/// [`Transport`] over a blocking tungstenite socket.
pub struct WsTransport {
	socket: WebSocket<MaybeTlsStream<TcpStream>>,
}

impl WsTransport {
	/// Connect to `url`, applying `timeout` to reads and writes.
	pub fn connect(url: &str, timeout: Duration) -> Result<Self, HassError> {
		let (socket, response) =
			tungstenite::connect(url).map_err(|err| HassError::Connect(err.to_string()))?;
		trace!("websocket handshake answered with {}", response.status());

		let stream = match socket.get_ref() {
			MaybeTlsStream::Plain(stream) => Some(stream),
			MaybeTlsStream::Rustls(stream) => Some(&stream.sock),
			_ => None,
		};
		if let Some(stream) = stream {
			stream
				.set_read_timeout(Some(timeout))
				.and_then(|()| stream.set_write_timeout(Some(timeout)))
				.map_err(|err| HassError::Connect(err.to_string()))?;
		}

		Ok(Self { socket })
	}
}

impl Transport for WsTransport {
	fn send_text(&mut self, text: String) -> Result<(), HassError> {
		self.socket.send(Message::Text(text))?;
		Ok(())
	}

	fn recv_text(&mut self) -> Result<String, HassError> {
		loop {
			match self.socket.read()? {
				Message::Text(text) => return Ok(text),
				Message::Close(_) => return Err(HassError::Closed),
				// Pings are answered by tungstenite on the next read/write.
				Message::Ping(_) | Message::Pong(_) | Message::Binary(_) | Message::Frame(_) => {}
			}
		}
	}
}

impl Drop for WsTransport {
	fn drop(&mut self) {
		let _ = self.socket.close(None);
		let _ = self.socket.flush();
	}
}
