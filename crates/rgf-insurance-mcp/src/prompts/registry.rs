//! Prompt registration and dispatch.

use serde_json::Value;

use crate::types::{McpError, McpResult, PromptArgument, PromptDefinition, PromptGetResult};

use super::consultation;

pub struct PromptRegistry;

impl PromptRegistry {
    pub fn list_prompts() -> Vec<PromptDefinition> {
        vec![PromptDefinition {
            name: consultation::NAME.to_string(),
            description:
                "Guide for interviewing a driver and recommending RGF car insurance".to_string(),
            arguments: vec![PromptArgument {
                name: "focus".to_string(),
                description: "Optional topic the user cares most about".to_string(),
                required: false,
            }],
        }]
    }

    pub fn get(name: &str, arguments: Option<Value>) -> McpResult<PromptGetResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            consultation::NAME => consultation::expand(args),
            _ => Err(McpError::PromptNotFound(name.to_string())),
        }
    }
}
