//! Tool: get_insurance_recommendation. Turns questionnaire answers into
//! coverages, a premium estimate and next steps.

use serde_json::{json, Value};

use rgf_insurance::{Operation, RgfService};

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: Operation::Recommendation.name().to_string(),
        description: "Assess driver risk and recommend coverages with an estimated premium. \
             All fields are optional; missing answers are treated as neutral."
                .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "age": { "type": "number", "description": "Driver age in years" },
                "driving_experience": { "type": "number", "description": "Years of driving experience" },
                "vehicle_type": {
                    "type": "string",
                    "enum": ["Sedan", "SUV", "Hatchback", "Sports Car", "Van", "Electric Vehicle"]
                },
                "annual_mileage": { "type": "number", "description": "Kilometres driven per year" },
                "driving_habits": {
                    "type": "string",
                    "description": "Usual driving pattern, e.g. city, highway or mixed"
                },
                "has_accidents": { "type": "boolean", "description": "Any accidents in the last 5 years" },
                "accident_count": { "type": "number", "description": "Number of accidents" },
                "vehicle_value": { "type": "number", "description": "Vehicle value in euros" },
                "budget_range": {
                    "type": "string",
                    "enum": ["€50-100", "€100-150", "€150-200", "€200+"]
                }
            }
        }),
    }
}

pub async fn execute(args: Value, service: &RgfService) -> McpResult<ToolCallResult> {
    super::run_operation(Operation::Recommendation, args, service).await
}
