//! HTTP transport: JSON-RPC over `POST /mcp`, the invoke contract over
//! `POST /invoke/{tool}`, and `GET /health`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as AxumJson, Response},
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;

use crate::protocol::ProtocolHandler;
use crate::types::{Incoming, McpError, McpResult, Reply, RequestId};

/// HTTP transport for web-based clients.
pub struct HttpTransport {
    handler: Arc<ProtocolHandler>,
}

impl HttpTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/mcp", post(handle_rpc))
            .route("/invoke/:tool", post(handle_invoke))
            .route("/health", get(handle_health))
            .layer(CorsLayer::permissive())
            .with_state(self.handler.clone())
    }

    /// Run the HTTP server on the given address.
    pub async fn run(&self, addr: &str) -> McpResult<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(McpError::Io)?;

        tracing::info!("HTTP transport listening on {addr}");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| McpError::Transport(e.to_string()))?;

        Ok(())
    }
}

async fn handle_rpc(
    State(handler): State<Arc<ProtocolHandler>>,
    AxumJson(body): AxumJson<Value>,
) -> Response {
    let msg: Incoming = match serde_json::from_value(body) {
        Ok(msg) => msg,
        Err(e) => {
            let reply = Reply::failure(RequestId::Null, &McpError::ParseError(e.to_string()));
            return (StatusCode::BAD_REQUEST, AxumJson(reply)).into_response();
        }
    };

    match handler.handle_message(msg).await {
        Some(response) => AxumJson(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Body is the argument map; a missing body means no arguments.
async fn handle_invoke(
    State(handler): State<Arc<ProtocolHandler>>,
    Path(tool): Path<String>,
    body: Option<AxumJson<Value>>,
) -> Response {
    let args = body
        .map(|AxumJson(v)| v)
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
    let outcome = handler.service().invoke(&tool, args).await;
    AxumJson(outcome).into_response()
}

async fn handle_health(State(handler): State<Arc<ProtocolHandler>>) -> AxumJson<Value> {
    AxumJson(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "target": handler.service().target_url(),
        "client": handler.session().await,
    }))
}
