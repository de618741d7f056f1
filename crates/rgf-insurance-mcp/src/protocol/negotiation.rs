//! The `initialize` handshake and what it leaves behind.

use serde::Serialize;

use crate::types::{InitializeParams, InitializeResult, PROTOCOL_VERSION};

/// Who connected, and whether they confirmed with `initialized`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSession {
    pub client_name: Option<String>,
    pub initialized: bool,
}

impl ClientSession {
    /// Record the client and answer with the server's handshake.
    ///
    /// A different protocol version is logged and answered with ours.
    pub fn negotiate(&mut self, params: InitializeParams) -> InitializeResult {
        if params.protocol_version != PROTOCOL_VERSION {
            tracing::warn!(
                "Client asked for protocol {}, answering with {PROTOCOL_VERSION}",
                params.protocol_version
            );
        }
        tracing::info!(
            "Client connected: {} v{}",
            params.client_info.name,
            params.client_info.version
        );

        // A repeated initialize starts the handshake over.
        self.client_name = Some(params.client_info.name);
        self.initialized = false;
        InitializeResult::advisor()
    }

    pub fn mark_initialized(&mut self) {
        self.initialized = true;
        tracing::info!("Handshake complete with {}", self.display_name());
    }

    pub fn display_name(&self) -> &str {
        self.client_name.as_deref().unwrap_or("unknown client")
    }
}
