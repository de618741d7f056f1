//! Tool: scrape_rgf_page. Body text of the page, optionally with a markup preview.

use serde_json::{json, Value};

use rgf_insurance::{Operation, RgfService};

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: Operation::ScrapePage.name().to_string(),
        description: "Fetch the RGF car insurance page and return its visible text. With include_html, \
             returns JSON with text_content and a preview of the raw HTML."
                .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "include_html": {
                    "type": "boolean",
                    "description": "Also return the first part of the raw HTML",
                    "default": false
                }
            }
        }),
    }
}

pub async fn execute(args: Value, service: &RgfService) -> McpResult<ToolCallResult> {
    super::run_operation(Operation::ScrapePage, args, service).await
}
