//! Tool: get_insurance_questionnaire. Static, needs no network.

use serde_json::{json, Value};

use rgf_insurance::{Operation, RgfService};

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: Operation::Questionnaire.name().to_string(),
        description: "The questions to ask a driver before requesting a recommendation".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

pub async fn execute(args: Value, service: &RgfService) -> McpResult<ToolCallResult> {
    super::run_operation(Operation::Questionnaire, args, service).await
}
