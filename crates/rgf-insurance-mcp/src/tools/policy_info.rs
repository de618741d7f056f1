//! Tool: get_rgf_policy_info

use serde_json::{json, Value};

use rgf_insurance::{Operation, RgfService};

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: Operation::PolicyInfo.name().to_string(),
        description: "Coverage types and features found in the content sections of the RGF car \
             insurance page, plus the page text"
                .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

pub async fn execute(args: Value, service: &RgfService) -> McpResult<ToolCallResult> {
    super::run_operation(Operation::PolicyInfo, args, service).await
}
