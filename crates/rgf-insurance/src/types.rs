//! Core data types for extracted page data, user profiles, and recommendations.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Number;

/// A fetched page. Lives only long enough to be parsed.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// URL that was requested.
    pub url: String,
    /// HTTP status code of the response.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// Text view of the page body.
///
/// Plain text is returned bare; the HTML envelope serializes as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum PageText {
    Text(String),
    WithHtml(HtmlEnvelope),
}

/// Body text plus a preview of the raw markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlEnvelope {
    pub text_content: String,
    pub html_preview: String,
}

/// Page metadata: title, description, OpenGraph fields, links and headings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedMetadata {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    pub links: Vec<String>,
    pub headings: Vec<String>,
}

/// Policy details scraped from the content containers of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInfo {
    pub policy_name: String,
    pub url: String,
    pub coverage_types: Vec<String>,
    pub features: Vec<String>,
    /// Never populated by the extractor.
    pub benefits: Vec<String>,
    pub full_details: String,
}

/// Answers collected from the questionnaire. Every field is optional.
///
/// Wire names are snake_case, matching the questionnaire ids. Numbers are
/// kept as sent, so `30` and `30.0` echo back unchanged in the summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub age: Option<Number>,
    #[serde(default)]
    pub driving_experience: Option<Number>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub annual_mileage: Option<Number>,
    #[serde(default)]
    pub driving_habits: Option<String>,
    #[serde(default)]
    pub has_accidents: Option<bool>,
    #[serde(default)]
    pub accident_count: Option<Number>,
    #[serde(default)]
    pub vehicle_value: Option<Number>,
    #[serde(default)]
    pub budget_range: Option<String>,
}

/// Three-tier risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Risk score and the level it maps to.
///
/// The score is a float: fractional or huge accident counts feed straight
/// into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    #[serde(serialize_with = "serialize_score")]
    pub risk_score: f64,
    pub risk_level: RiskLevel,
}

/// Profile fields echoed back with the risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driving_experience: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_mileage: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driving_habits: Option<String>,
    pub risk_level: RiskLevel,
    #[serde(serialize_with = "serialize_score")]
    pub risk_score: f64,
}

/// Largest integer an f64 holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole scores serialize as integers (`5`, not `5.0`). Non-finite scores
/// serialize as `null`.
fn serialize_score<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if score.fract() == 0.0 && score.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*score as i64)
    } else {
        serializer.serialize_f64(*score)
    }
}

/// A named coverage included in a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Monthly and annual premium, already formatted as euro amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumEstimate {
    pub monthly: String,
    pub annual: String,
}

/// Full output of the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub profile_summary: ProfileSummary,
    pub recommended_coverages: Vec<Coverage>,
    pub estimated_premium: PremiumEstimate,
    pub highlights: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Errors that can occur in the advisor library.
#[derive(thiserror::Error, Debug)]
pub enum RgfError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type.
pub type RgfResult<T> = Result<T, RgfError>;
