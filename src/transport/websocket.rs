//! WebSocket client for the Game Recorder server.
//!
//! Replaces the old global-socket pattern with an explicit client object:
//! construction leaves it `Disconnected`, `connect()` must be called before
//! any send, and the connection state is typed rather than nullable.

use futures::SinkExt;
use tokio::net::TcpStream;
use tokio::time;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, instrument, warn};

use crate::config::ClientConfig;
use crate::core::packet::Packet;
use crate::error::{ProtocolError, Result};
use crate::protocol::message::{RequestGame, WireMessage};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Typed connection state of a [`RecorderClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Never connected, or a failed connect attempt was rolled back.
    Disconnected,
    /// A connect attempt is in flight.
    Connecting,
    /// Connection established; sends are valid.
    Open,
    /// Connection was closed, either locally or by the server.
    Closed,
}

/// Client connection to the Game Recorder server.
///
/// Packets are sent as single binary WebSocket frames. Connection errors are
/// surfaced to the caller and logged; there is no automatic retry.
pub struct RecorderClient {
    config: ClientConfig,
    state: ConnectionState,
    stream: Option<WsStream>,
}

impl RecorderClient {
    /// Create a disconnected client. Call [`connect`](Self::connect) before
    /// sending.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            state: ConnectionState::Disconnected,
            stream: None,
        }
    }

    /// Convenience: create a client for `url` with default settings and
    /// connect it.
    pub async fn open(url: &str) -> Result<Self> {
        let config = ClientConfig {
            server_url: url.to_string(),
            ..ClientConfig::default()
        };
        let mut client = Self::new(config);
        client.connect().await?;
        Ok(client)
    }

    /// Establish the WebSocket connection.
    ///
    /// Fails with [`ProtocolError::Timeout`] when the server does not answer
    /// within the configured connect timeout; a failed attempt rolls the
    /// state back to `Disconnected`.
    #[instrument(skip(self), fields(url = %self.config.server_url))]
    pub async fn connect(&mut self) -> Result<()> {
        self.state = ConnectionState::Connecting;
        debug!("Connecting to Game Recorder");

        let attempt = time::timeout(
            self.config.connect_timeout,
            connect_async(self.config.server_url.as_str()),
        )
        .await;

        match attempt {
            Ok(Ok((stream, response))) => {
                info!(status = %response.status(), "WebSocket connection established");
                self.stream = Some(stream);
                self.state = ConnectionState::Open;
                Ok(())
            }
            Ok(Err(e)) => {
                error!(error = %e, "Connection to Game Recorder failed");
                self.state = ConnectionState::Disconnected;
                Err(e.into())
            }
            Err(_) => {
                error!("Connection to Game Recorder timed out");
                self.state = ConnectionState::Disconnected;
                Err(ProtocolError::Timeout)
            }
        }
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Whether sends are currently valid.
    pub fn is_open(&self) -> bool {
        self.state == ConnectionState::Open
    }

    /// Send an assembled packet as one binary frame.
    ///
    /// Returns [`ProtocolError::NotConnected`] unless the connection is open.
    /// A transport error marks the connection `Closed`.
    pub async fn send_packet(&mut self, packet: &Packet) -> Result<()> {
        if self.state != ConnectionState::Open {
            return Err(ProtocolError::NotConnected);
        }
        let stream = self.stream.as_mut().ok_or(ProtocolError::NotConnected)?;

        debug!(
            message_type = packet.header().message_type(),
            len = packet.wire_len(),
            "Sending packet"
        );

        match stream.send(Message::Binary(packet.to_bytes().to_vec())).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("No connection to Game Recorder");
                self.state = ConnectionState::Closed;
                self.stream = None;
                Err(map_send_error(e))
            }
        }
    }

    /// Encode and send a protocol message.
    pub async fn send_message(&mut self, message: &impl WireMessage) -> Result<()> {
        self.send_packet(&message.to_packet()).await
    }

    /// Request a recorded game by room code.
    pub async fn request_game(&mut self, room_code: u16) -> Result<()> {
        self.send_message(&RequestGame { room_code }).await
    }

    /// Close the connection. Idempotent.
    pub async fn close(&mut self) -> Result<()> {
        let result = match self.stream.take() {
            Some(mut stream) => {
                info!("Closing connection to Game Recorder");
                stream.close(None).await.map_err(Into::into)
            }
            None => Ok(()),
        };
        self.state = ConnectionState::Closed;
        result
    }
}

/// Sends on a closed socket surface as `ConnectionClosed`; any other
/// transport failure keeps the underlying WebSocket error.
fn map_send_error(e: WsError) -> ProtocolError {
    match e {
        WsError::ConnectionClosed | WsError::AlreadyClosed => ProtocolError::ConnectionClosed,
        other => other.into(),
    }
}
