//! Request dispatcher: routes JSON-RPC messages to tools, resources and prompts.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde::Deserialize;
use serde_json::{json, Value};

use rgf_insurance::RgfService;

use crate::prompts::PromptRegistry;
use crate::resources::ResourceRegistry;
use crate::tools::ToolRegistry;
use crate::types::*;

use super::negotiation::ClientSession;
use super::validator::validate_request;

#[derive(Deserialize)]
struct ToolCall {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Deserialize)]
struct ResourceRead {
    uri: String,
}

#[derive(Deserialize)]
struct PromptGet {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// Dispatches incoming JSON-RPC messages against one [`RgfService`].
pub struct ProtocolHandler {
    service: Arc<RgfService>,
    session: Mutex<ClientSession>,
}

impl ProtocolHandler {
    pub fn new(service: Arc<RgfService>) -> Self {
        Self {
            service,
            session: Mutex::new(ClientSession::default()),
        }
    }

    pub fn service(&self) -> &Arc<RgfService> {
        &self.service
    }

    /// Snapshot of the connected client.
    pub async fn session(&self) -> ClientSession {
        self.session.lock().await.clone()
    }

    /// Handle one message. Requests always get a reply; notifications never do.
    pub async fn handle_message(&self, msg: Incoming) -> Option<Value> {
        match msg {
            Incoming::Request(req) => Some(self.handle_request(req).await.into_value()),
            Incoming::Notification(notif) => {
                self.handle_notification(notif).await;
                None
            }
        }
    }

    async fn handle_request(&self, request: Request) -> Reply {
        if let Err(e) = validate_request(&request) {
            return Reply::failure(request.id, &e);
        }

        match self.dispatch(&request).await {
            Ok(value) => Reply::success(request.id, value),
            Err(e) => {
                tracing::debug!("Request {} ({}) failed: {e}", request.id, request.method);
                Reply::failure(request.id, &e)
            }
        }
    }

    async fn dispatch(&self, request: &Request) -> McpResult<Value> {
        match request.method.as_str() {
            "initialize" => {
                let params: InitializeParams = request.params_as()?;
                to_result(self.session.lock().await.negotiate(params))
            }
            "shutdown" => {
                let session = self.session.lock().await;
                tracing::info!("Shutdown requested by {}", session.display_name());
                Ok(json!({}))
            }
            "ping" => Ok(json!({})),

            "tools/list" => Ok(json!({ "tools": ToolRegistry::list_tools() })),
            "tools/call" => {
                let call: ToolCall = request.params_as()?;
                to_result(ToolRegistry::call(&call.name, call.arguments, &self.service).await?)
            }

            "resources/list" => Ok(json!({ "resources": ResourceRegistry::list_resources() })),
            // Both resource URIs are fixed.
            "resources/templates/list" => Ok(json!({ "resourceTemplates": [] })),
            "resources/read" => {
                let read: ResourceRead = request.params_as()?;
                to_result(ResourceRegistry::read(&read.uri, &self.service).await?)
            }

            "prompts/list" => Ok(json!({ "prompts": PromptRegistry::list_prompts() })),
            "prompts/get" => {
                let get: PromptGet = request.params_as()?;
                to_result(PromptRegistry::get(&get.name, get.arguments)?)
            }

            _ => Err(McpError::MethodNotFound(request.method.clone())),
        }
    }

    async fn handle_notification(&self, notification: Notification) {
        match notification.method.as_str() {
            "initialized" | "notifications/initialized" => {
                self.session.lock().await.mark_initialized();
            }
            "notifications/cancelled" | "$/cancelRequest" => {
                // Calls run to completion or to the fetch timeout.
                tracing::info!("Received cancellation notification");
            }
            _ => {
                tracing::debug!("Unknown notification: {}", notification.method);
            }
        }
    }
}

fn to_result(value: impl serde::Serialize) -> McpResult<Value> {
    serde_json::to_value(value).map_err(|e| McpError::InternalError(e.to_string()))
}
