//! RGF Insurance Advisor: page extraction and rule-based coverage recommendations.

pub mod extract;
pub mod fetch;
pub mod operations;
pub mod questionnaire;
pub mod recommend;
pub mod types;

pub use extract::{extract_metadata, extract_page_text, extract_policy_info, extract_segmented_text};
pub use fetch::{FetchConfig, PageFetcher, DEFAULT_TARGET_URL};
pub use operations::{InvocationOutcome, Operation, RgfService};
pub use questionnaire::{questionnaire, Question, QuestionType, Questionnaire};
pub use recommend::{assess_risk, recommend};
pub use types::*;
