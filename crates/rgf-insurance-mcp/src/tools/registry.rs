//! Tool registration and dispatch.

use serde_json::Value;

use rgf_insurance::RgfService;

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{
    extract_text, insurance_questionnaire, insurance_recommendation, metadata, policy_info,
    scrape_page,
};

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![
            scrape_page::definition(),
            extract_text::definition(),
            metadata::definition(),
            policy_info::definition(),
            insurance_questionnaire::definition(),
            insurance_recommendation::definition(),
        ]
    }

    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        service: &RgfService,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));
        tracing::debug!("Calling tool {name}");

        match name {
            "scrape_rgf_page" => scrape_page::execute(args, service).await,
            "extract_rgf_text" => extract_text::execute(args, service).await,
            "get_rgf_metadata" => metadata::execute(args, service).await,
            "get_rgf_policy_info" => policy_info::execute(args, service).await,
            "get_insurance_questionnaire" => insurance_questionnaire::execute(args, service).await,
            "get_insurance_recommendation" => {
                insurance_recommendation::execute(args, service).await
            }
            _ => Err(McpError::ToolNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgf_insurance::{FetchConfig, Operation};

    #[test]
    fn test_every_operation_has_a_tool() {
        let names: Vec<String> = ToolRegistry::list_tools().into_iter().map(|t| t.name).collect();
        let expected: Vec<String> = Operation::ALL.iter().map(|op| op.name().to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_schemas_are_objects() {
        for tool in ToolRegistry::list_tools() {
            assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
            assert!(!tool.description.is_empty(), "{}", tool.name);
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_is_an_error() {
        let service = RgfService::new(FetchConfig::default()).unwrap();
        let err = ToolRegistry::call("get_weather", None, &service).await.unwrap_err();
        assert!(matches!(err, McpError::ToolNotFound(ref n) if n == "get_weather"));
    }

    #[tokio::test]
    async fn test_unreachable_page_is_a_tool_error() {
        let service = RgfService::new(FetchConfig::for_url("http://127.0.0.1:1/")).unwrap();
        let result = ToolRegistry::call("get_rgf_metadata", None, &service).await.unwrap();
        assert!(result.is_error);
        assert!(result.first_text().unwrap().starts_with("Error: Network error:"));
    }

    #[tokio::test]
    async fn test_bad_arguments_are_invalid_params() {
        let service = RgfService::new(FetchConfig::default()).unwrap();
        let err = ToolRegistry::call(
            "get_insurance_recommendation",
            Some(serde_json::json!({ "accident_count": "two" })),
            &service,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, McpError::InvalidParams(_)));
    }
}
