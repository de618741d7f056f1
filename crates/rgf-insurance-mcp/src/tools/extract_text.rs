//! Tool: extract_rgf_text

use serde_json::{json, Value};

use rgf_insurance::{Operation, RgfService};

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: Operation::ExtractText.name().to_string(),
        description: "Extract headings, paragraphs, list items and table cells from the RGF car \
             insurance page, one block per element"
                .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

pub async fn execute(args: Value, service: &RgfService) -> McpResult<ToolCallResult> {
    super::run_operation(Operation::ExtractText, args, service).await
}
