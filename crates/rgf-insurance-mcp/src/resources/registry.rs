//! Resource registration and dispatch.

use rgf_insurance::RgfService;

use crate::types::{McpError, McpResult, ReadResourceResult, ResourceDefinition};

use super::catalog::{self, POLICY_URI, QUESTIONNAIRE_URI};

pub struct ResourceRegistry;

impl ResourceRegistry {
    pub fn list_resources() -> Vec<ResourceDefinition> {
        catalog::list_resources()
    }

    pub async fn read(uri: &str, service: &RgfService) -> McpResult<ReadResourceResult> {
        match uri {
            QUESTIONNAIRE_URI => catalog::read_questionnaire(service),
            POLICY_URI => catalog::read_policy(service).await,
            _ => Err(McpError::ResourceNotFound(uri.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgf_insurance::FetchConfig;

    fn offline_service() -> RgfService {
        RgfService::new(FetchConfig::for_url("http://127.0.0.1:1/")).unwrap()
    }

    #[tokio::test]
    async fn test_questionnaire_resource_is_offline() {
        let result = ResourceRegistry::read(QUESTIONNAIRE_URI, &offline_service())
            .await
            .unwrap();
        let text = &result.contents[0].text;
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(value["questions"].as_array().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_policy_resource_reports_fetch_error() {
        let err = ResourceRegistry::read(POLICY_URI, &offline_service())
            .await
            .unwrap_err();
        assert!(matches!(err, McpError::FetchError(_)));
    }

    #[tokio::test]
    async fn test_unknown_resource() {
        let err = ResourceRegistry::read("rgf://quotes", &offline_service())
            .await
            .unwrap_err();
        assert!(matches!(err, McpError::ResourceNotFound(_)));
    }
}
