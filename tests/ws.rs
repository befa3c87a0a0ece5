//! WebSocket session tests against a local echo server.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::net::TcpListener;

use cheshire_cat_client::{CheshireCatClient, Error, WsSession};

/// Spawn a WebSocket server that echoes every data frame back.
async fn spawn_echo_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
                while let Some(Ok(msg)) = ws.next().await {
                    if msg.is_text() || msg.is_binary() {
                        if ws.send(msg).await.is_err() {
                            break;
                        }
                    } else if msg.is_close() {
                        break;
                    }
                }
            });
        }
    });

    format!("ws://{addr}")
}

#[tokio::test]
async fn send_then_receive_round_trips_json() {
    let url = spawn_echo_server().await;
    let mut session = WsSession::connect(&url).await.unwrap();
    assert!(session.is_open());

    session.send(&json!({ "text": "hello" })).await.unwrap();
    let reply: serde_json::Value = session.receive().await.unwrap();
    assert_eq!(reply, json!({ "text": "hello" }));

    session.close().await.unwrap();
}

#[tokio::test]
async fn typed_receive_decodes_payload() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Chat {
        text: String,
    }

    let url = spawn_echo_server().await;
    let mut session = WsSession::connect(&url).await.unwrap();

    session
        .send(&Chat {
            text: "mad tea party".to_string(),
        })
        .await
        .unwrap();
    let reply: Chat = session.receive().await.unwrap();
    assert_eq!(reply.text, "mad tea party");

    session.close().await.unwrap();
}

#[tokio::test]
async fn connect_failure_maps_to_websocket_error() {
    // Bind a port, then drop the listener so nothing answers on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = WsSession::connect(&format!("ws://127.0.0.1:{port}"))
        .await
        .unwrap_err();
    assert!(err.is_websocket_error());
}

#[tokio::test]
async fn operations_on_closed_session_fail_fast() {
    let url = spawn_echo_server().await;
    let mut session = WsSession::connect(&url).await.unwrap();
    session.close().await.unwrap();
    assert!(!session.is_open());

    // Errors immediately instead of hanging.
    let received = tokio::time::timeout(Duration::from_secs(1), session.receive_value()).await;
    assert!(matches!(received, Ok(Err(Error::WebSocketClosed))));

    let sent = session.send(&json!({ "text": "late" })).await;
    assert!(matches!(sent, Err(Error::WebSocketClosed)));
}

#[tokio::test]
async fn close_is_idempotent() {
    let url = spawn_echo_server().await;
    let mut session = WsSession::connect(&url).await.unwrap();

    session.close().await.unwrap();
    session.close().await.unwrap();
}

#[tokio::test]
async fn peer_close_surfaces_as_closed_session() {
    // Server that accepts one connection and immediately closes it.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        ws.close(None).await.unwrap();
    });

    let mut session = WsSession::connect(&format!("ws://{addr}")).await.unwrap();
    let received = tokio::time::timeout(Duration::from_secs(5), session.receive_value()).await;
    assert!(matches!(received, Ok(Err(e)) if e.is_websocket_error()));
    assert!(!session.is_open());
}

#[tokio::test]
async fn client_connects_via_configured_ws_url() {
    let url = spawn_echo_server().await;
    let client = CheshireCatClient::builder().ws_url(&url).build().unwrap();

    let mut session = client.connect_ws().await.unwrap();
    assert_eq!(session.endpoint().as_str(), client.ws_url().as_str());

    session.send(&json!({ "text": "hi" })).await.unwrap();
    let reply: serde_json::Value = session.receive().await.unwrap();
    assert_eq!(reply["text"], "hi");
    session.close().await.unwrap();
}
