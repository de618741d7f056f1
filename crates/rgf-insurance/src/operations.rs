//! The six advisor operations and the uniform `invoke` contract.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract;
use crate::fetch::{FetchConfig, PageFetcher};
use crate::questionnaire::{questionnaire, Questionnaire};
use crate::recommend::recommend;
use crate::types::{
    ExtractedMetadata, PageText, PolicyInfo, Recommendation, RgfError, RgfResult, UserProfile,
};

/// Names of the operations a caller can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ScrapePage,
    ExtractText,
    Metadata,
    PolicyInfo,
    Questionnaire,
    Recommendation,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::ScrapePage,
        Operation::ExtractText,
        Operation::Metadata,
        Operation::PolicyInfo,
        Operation::Questionnaire,
        Operation::Recommendation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::ScrapePage => "scrape_rgf_page",
            Operation::ExtractText => "extract_rgf_text",
            Operation::Metadata => "get_rgf_metadata",
            Operation::PolicyInfo => "get_rgf_policy_info",
            Operation::Questionnaire => "get_insurance_questionnaire",
            Operation::Recommendation => "get_insurance_recommendation",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Whether the operation fetches the target page.
    pub fn needs_network(self) -> bool {
        !matches!(self, Operation::Questionnaire | Operation::Recommendation)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Default, Deserialize)]
struct ScrapeArgs {
    /// `null` reads as false.
    #[serde(default)]
    include_html: Option<bool>,
}

/// Result of [`RgfService::invoke`]: `{success, data}` or `{success, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InvocationOutcome {
    pub fn ok(data: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Runs the advisor operations against a configured target page.
///
/// Holds no mutable state; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RgfService {
    fetcher: PageFetcher,
}

impl RgfService {
    pub fn new(config: FetchConfig) -> RgfResult<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
        })
    }

    pub fn target_url(&self) -> &str {
        self.fetcher.url()
    }

    /// Body text of the page, optionally with a markup preview.
    pub async fn scrape_page(&self, include_html: bool) -> RgfResult<PageText> {
        let doc = self.fetcher.fetch().await?;
        Ok(extract::extract_page_text(&doc.body, include_html))
    }

    /// Segmented text of the page.
    pub async fn extract_text(&self) -> RgfResult<String> {
        let doc = self.fetcher.fetch().await?;
        Ok(extract::extract_segmented_text(&doc.body))
    }

    pub async fn metadata(&self) -> RgfResult<ExtractedMetadata> {
        let doc = self.fetcher.fetch().await?;
        Ok(extract::extract_metadata(&doc.body))
    }

    pub async fn policy_info(&self) -> RgfResult<PolicyInfo> {
        let doc = self.fetcher.fetch().await?;
        Ok(extract::extract_policy_info(&doc.body, &doc.url))
    }

    pub fn questionnaire(&self) -> Questionnaire {
        questionnaire()
    }

    pub fn recommend(&self, profile: &UserProfile) -> Recommendation {
        recommend(profile)
    }

    /// Run `op` and serialize its result: raw text for the text views,
    /// indented JSON for everything else.
    pub async fn run(&self, op: Operation, args: Value) -> RgfResult<String> {
        tracing::debug!("Running operation {op}");

        match op {
            Operation::ScrapePage => {
                let args: ScrapeArgs = parse_args(args)?;
                match self.scrape_page(args.include_html.unwrap_or(false)).await? {
                    PageText::Text(text) => Ok(text),
                    PageText::WithHtml(envelope) => Ok(serde_json::to_string_pretty(&envelope)?),
                }
            }
            Operation::ExtractText => self.extract_text().await,
            Operation::Metadata => Ok(serde_json::to_string_pretty(&self.metadata().await?)?),
            Operation::PolicyInfo => Ok(serde_json::to_string_pretty(&self.policy_info().await?)?),
            Operation::Questionnaire => Ok(serde_json::to_string_pretty(&self.questionnaire())?),
            Operation::Recommendation => {
                let profile: UserProfile = parse_args(args)?;
                Ok(serde_json::to_string_pretty(&self.recommend(&profile))?)
            }
        }
    }

    /// Look up an operation by name and run it.
    pub async fn call(&self, name: &str, args: Value) -> RgfResult<String> {
        let op = Operation::from_name(name).ok_or_else(|| RgfError::UnknownTool(name.to_string()))?;
        self.run(op, args).await
    }

    /// Uniform contract for external callers. Never returns an error:
    /// failures become `{success: false, error}`.
    pub async fn invoke(&self, name: &str, args: Value) -> InvocationOutcome {
        match self.call(name, args).await {
            Ok(data) => InvocationOutcome::ok(data),
            Err(e) => {
                tracing::warn!("Operation {name} failed: {e}");
                InvocationOutcome::failed(e.to_string())
            }
        }
    }
}

/// Deserialize an argument map; `null` means no arguments.
fn parse_args<T: DeserializeOwned + Default>(args: Value) -> RgfResult<T> {
    if args.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(args).map_err(|e| RgfError::InvalidArguments(e.to_string()))
}
