//! Prompt: insurance_consultation. Walks an assistant from the questionnaire
//! to a recommendation.

use serde_json::Value;

use crate::types::{McpResult, PromptGetResult, PromptMessage, TextContent};

pub const NAME: &str = "insurance_consultation";

pub fn expand(args: Value) -> McpResult<PromptGetResult> {
    let focus = args
        .get("focus")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut text = String::from(
        "Help the user choose RGF car insurance.\n\n\
         Please:\n\
         1. Call get_insurance_questionnaire and ask the user each question, one at a time\n\
         2. Skip optional questions the user does not want to answer\n\
         3. Call get_insurance_recommendation with the answers, using the question ids as keys\n\
         4. Explain the recommended coverages, the estimated premium and the risk level\n\
         5. Use get_rgf_policy_info if the user asks what the RGF policy itself includes\n\
         6. Finish with the next steps from the recommendation",
    );

    if let Some(focus) = focus {
        text.push_str(&format!("\n\nThe user is particularly interested in: {focus}"));
    }

    Ok(PromptGetResult {
        description: "Guided car insurance consultation".to_string(),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: TextContent::new(text),
        }],
    })
}
