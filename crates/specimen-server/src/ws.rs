//! WebSocket echo channel
//!
//! Transport-level test surface only; it never touches the routing engine.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        WebSocketUpgrade,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(handle_socket)
}

/// Reply text for an incoming frame
pub fn echo_reply(text: &str) -> String {
    format!("Echo: {}", text)
}

async fn handle_socket(socket: WebSocket) {
    let (mut sender, mut receiver) = socket.split();
    tracing::debug!("WebSocket echo connection opened");

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                specimen_observability::inc_ws_message();
                if sender
                    .send(Message::Text(echo_reply(&text)))
                    .await
                    .is_err()
                {
                    tracing::debug!("Client disconnected");
                    break;
                }
            }
            Ok(Message::Ping(data)) => {
                if sender.send(Message::Pong(data)).await.is_err() {
                    break;
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            // Client errors end the session quietly
            Err(e) => {
                tracing::debug!("WebSocket error: {}", e);
                break;
            }
        }
    }

    tracing::debug!("WebSocket echo connection closed");
}
