//! The fixed nine-question profile questionnaire.

use serde::{Deserialize, Serialize};

/// Answer type of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Number,
    Select,
    Boolean,
}

/// One questionnaire entry. `id` is the profile field it fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Question {
    fn number(id: &str, question: &str, required: bool) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            kind: QuestionType::Number,
            required,
            options: None,
        }
    }

    fn boolean(id: &str, question: &str, required: bool) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            kind: QuestionType::Boolean,
            required,
            options: None,
        }
    }

    fn select(id: &str, question: &str, required: bool, options: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            kind: QuestionType::Select,
            required,
            options: Some(options.iter().map(|o| o.to_string()).collect()),
        }
    }
}

/// The questionnaire, in presentation order.
pub fn questionnaire() -> Questionnaire {
    Questionnaire {
        title: "RGF Car Insurance Questionnaire".to_string(),
        description: "Answer these questions to receive a personalized coverage recommendation"
            .to_string(),
        questions: vec![
            Question::number("age", "What is your age?", true),
            Question::number(
                "driving_experience",
                "How many years of driving experience do you have?",
                true,
            ),
            Question::select(
                "vehicle_type",
                "What type of vehicle do you drive?",
                true,
                &["Sedan", "SUV", "Hatchback", "Sports Car", "Van", "Electric Vehicle"],
            ),
            Question::number(
                "annual_mileage",
                "How many kilometers do you drive per year?",
                true,
            ),
            Question::select(
                "driving_habits",
                "How would you describe your driving habits?",
                true,
                &["City (short trips)", "Highway (long distances)", "Mixed"],
            ),
            Question::boolean(
                "has_accidents",
                "Have you had any accidents in the last 5 years?",
                true,
            ),
            Question::number("accident_count", "If yes, how many accidents?", false),
            Question::number(
                "vehicle_value",
                "What is the approximate value of your vehicle (€)?",
                true,
            ),
            Question::select(
                "budget_range",
                "What is your monthly budget for insurance?",
                false,
                &["€50-100", "€100-150", "€150-200", "€200+"],
            ),
        ],
    }
}
