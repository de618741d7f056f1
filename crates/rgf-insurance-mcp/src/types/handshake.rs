//! The `initialize` exchange.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Protocol revision the server speaks, whatever the client asks for.
pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "rgf-insurance-mcp";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const INSTRUCTIONS: &str = "RGF insurance advisor. Use the scrape/extract/metadata/policy tools \
    to read the RGF car insurance page, get_insurance_questionnaire to learn which questions \
    to ask the user, and get_insurance_recommendation to turn the answers into coverages and \
    a premium estimate.";

/// Name and version of either side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerInfo {
    pub name: String,
    pub version: String,
}

/// Client capabilities are accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub protocol_version: String,
    pub client_info: PeerInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: Value,
    pub server_info: PeerInfo,
    pub instructions: String,
}

impl InitializeResult {
    pub fn advisor() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: server_capabilities(),
            server_info: PeerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            instructions: INSTRUCTIONS.to_string(),
        }
    }
}

/// Fixed tool, resource and prompt lists: nothing to subscribe to.
fn server_capabilities() -> Value {
    json!({
        "logging": {},
        "prompts": { "listChanged": false },
        "resources": { "subscribe": false, "listChanged": false },
        "tools": { "listChanged": false }
    })
}
