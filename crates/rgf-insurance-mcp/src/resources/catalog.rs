//! Static resource definitions and their readers.

use rgf_insurance::RgfService;

use crate::types::{McpError, McpResult, ReadResourceResult, ResourceText, ResourceDefinition};

pub const QUESTIONNAIRE_URI: &str = "rgf://questionnaire";
pub const POLICY_URI: &str = "rgf://policy";

const JSON_MIME: &str = "application/json";

pub fn list_resources() -> Vec<ResourceDefinition> {
    vec![
        ResourceDefinition {
            uri: QUESTIONNAIRE_URI.to_string(),
            name: "Insurance Questionnaire".to_string(),
            description: "Questions to ask a driver before recommending coverage".to_string(),
            mime_type: JSON_MIME.to_string(),
        },
        ResourceDefinition {
            uri: POLICY_URI.to_string(),
            name: "RGF Policy Summary".to_string(),
            description:
                "Coverage types and features read from the RGF car insurance page".to_string(),
            mime_type: JSON_MIME.to_string(),
        },
    ]
}

pub fn read_questionnaire(service: &RgfService) -> McpResult<ReadResourceResult> {
    let text = serde_json::to_string_pretty(&service.questionnaire())
        .map_err(|e| McpError::InternalError(e.to_string()))?;
    Ok(json_contents(QUESTIONNAIRE_URI, text))
}

/// Fetches the page on every read.
pub async fn read_policy(service: &RgfService) -> McpResult<ReadResourceResult> {
    let policy = service.policy_info().await?;
    let text = serde_json::to_string_pretty(&policy)
        .map_err(|e| McpError::InternalError(e.to_string()))?;
    Ok(json_contents(POLICY_URI, text))
}

fn json_contents(uri: &str, text: String) -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceText {
            uri: uri.to_string(),
            mime_type: JSON_MIME.to_string(),
            text,
        }],
    }
}
