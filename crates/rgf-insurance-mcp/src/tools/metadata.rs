//! Tool: get_rgf_metadata

use serde_json::{json, Value};

use rgf_insurance::{Operation, RgfService};

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: Operation::Metadata.name().to_string(),
        description:
            "Title, description, Open Graph tags, links and headings of the RGF car insurance page"
                .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

pub async fn execute(args: Value, service: &RgfService) -> McpResult<ToolCallResult> {
    super::run_operation(Operation::Metadata, args, service).await
}
