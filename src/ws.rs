//! WebSocket session for conversational messaging.

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use url::Url;

use crate::error::{Error, Result};

/// A single persistent WebSocket connection to the server.
///
/// The session owns one socket: `Unopened → Open → Closed`, with no
/// reconnection. Messages are JSON text frames, one logical message per
/// frame; request/response pairing is positional (send one, then receive
/// one). Methods take `&mut self`, so a session has a single logical
/// consumer and send/receive cannot interleave.
///
/// `receive` imposes no timeout of its own; callers needing a bounded wait
/// should race it against [`tokio::time::timeout`].
///
/// # Example
///
/// ```no_run
/// use cheshire_cat_client::WsSession;
///
/// # async fn example() -> cheshire_cat_client::Result<()> {
/// let mut session = WsSession::connect("ws://localhost:1865/ws").await?;
/// session.send(&serde_json::json!({ "text": "hello" })).await?;
/// let reply: serde_json::Value = session.receive().await?;
/// session.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct WsSession {
    /// Endpoint the session was opened against.
    url: Url,
    /// Live stream; `None` once closed.
    stream: Option<WebSocketStream<MaybeTlsStream<TcpStream>>>,
}

impl WsSession {
    /// Open a session against a WebSocket endpoint.
    pub async fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        let (stream, _) = connect_async(url.as_str())
            .await
            .map_err(Error::WebSocket)?;

        tracing::debug!(url = %url, "websocket session opened");

        Ok(Self {
            url,
            stream: Some(stream),
        })
    }

    /// Endpoint this session was opened against.
    pub fn endpoint(&self) -> &Url {
        &self.url
    }

    /// Whether the session is still open.
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Serialize a payload to JSON and transmit it as one text frame.
    pub async fn send<T>(&mut self, payload: &T) -> Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        let stream = self.stream.as_mut().ok_or(Error::WebSocketClosed)?;
        let text = serde_json::to_string(payload)?;
        stream
            .send(Message::Text(text.into()))
            .await
            .map_err(Error::WebSocket)
    }

    /// Await the next message and JSON-decode it.
    ///
    /// Blocks until one full text or binary frame arrives; control frames
    /// (ping/pong) are handled transparently. If the far end closes the
    /// connection the session transitions to Closed and this returns an
    /// error instead of hanging.
    pub async fn receive<T>(&mut self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let stream = self.stream.as_mut().ok_or(Error::WebSocketClosed)?;
        loop {
            match stream.next().await {
                Some(Ok(Message::Text(text))) => return Ok(serde_json::from_str(&text)?),
                Some(Ok(Message::Binary(bytes))) => return Ok(serde_json::from_slice(&bytes)?),
                Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => continue,
                Some(Ok(Message::Close(_))) | None => {
                    self.stream = None;
                    return Err(Error::WebSocketClosed);
                }
                Some(Err(e)) => {
                    self.stream = None;
                    return Err(Error::WebSocket(e));
                }
            }
        }
    }

    /// Await the next message as untyped JSON.
    pub async fn receive_value(&mut self) -> Result<serde_json::Value> {
        self.receive().await
    }

    /// Send a close frame and release the connection.
    ///
    /// Idempotent: closing an already-closed session is a no-op.
    pub async fn close(&mut self) -> Result<()> {
        use tokio_tungstenite::tungstenite::Error as WsError;

        let Some(mut stream) = self.stream.take() else {
            return Ok(());
        };

        match stream.close(None).await {
            // The peer may have closed first; that still counts as closed.
            Ok(()) | Err(WsError::ConnectionClosed) | Err(WsError::AlreadyClosed) => Ok(()),
            Err(e) => Err(Error::WebSocket(e)),
        }
    }
}

impl std::fmt::Debug for WsSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WsSession")
            .field("url", &self.url.as_str())
            .field("open", &self.is_open())
            .finish()
    }
}
