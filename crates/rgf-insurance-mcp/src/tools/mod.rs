//! MCP tools: one module per advisor operation.

pub mod extract_text;
pub mod insurance_questionnaire;
pub mod insurance_recommendation;
pub mod metadata;
pub mod policy_info;
pub mod registry;
pub mod scrape_page;

pub use registry::ToolRegistry;

use serde_json::Value;

use rgf_insurance::{Operation, RgfError, RgfService};

use crate::types::{McpResult, ToolCallResult};

/// Run an operation and wrap its output as a tool result.
///
/// A failed page fetch is reported inside the result (`isError`), anything
/// else surfaces as a JSON-RPC error.
pub(crate) async fn run_operation(
    op: Operation,
    args: Value,
    service: &RgfService,
) -> McpResult<ToolCallResult> {
    match service.run(op, args).await {
        Ok(text) => Ok(ToolCallResult::text(text)),
        Err(RgfError::Network(msg)) => {
            tracing::warn!("Tool {op} could not fetch {}: {msg}", service.target_url());
            Ok(ToolCallResult::error(format!("Network error: {msg}")))
        }
        Err(e) => Err(e.into()),
    }
}
