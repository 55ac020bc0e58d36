use serde_json::Value;
use thiserror::Error;

use crate::domain::meal_plan::entities::MealPlan;

const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanParseError {
    #[error("provider output is not valid JSON: {0}")]
    Malformed(String),

    #[error("provider output has no meals array")]
    MissingMeals,

    #[error("provider output has an empty meals array")]
    EmptyMeals,

    #[error("meal at index {index} is invalid: {reason}")]
    InvalidMeal { index: usize, reason: String },
}

/// Removes a wrapping code fence from model output.
///
/// Handles an opening fence with or without a language tag (```` ```json ````) and a
/// closing fence at the end. Text without a leading fence is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();

    let Some(after_open) = text.strip_prefix(FENCE) else {
        return text;
    };

    // The language tag runs up to the first newline or to the first non tag character.
    let body = match after_open.find('\n') {
        Some(newline)
            if after_open[..newline]
                .trim()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') =>
        {
            &after_open[newline + 1..]
        }
        _ => after_open.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    body.strip_suffix(FENCE).unwrap_or(body).trim()
}

/// Turns raw model output into a meal plan, keeping the parsed JSON as-is.
pub fn parse_meal_plan(raw: &str) -> Result<MealPlan, PlanParseError> {
    let text = strip_code_fence(raw);

    let parsed: Value =
        serde_json::from_str(text).map_err(|e| PlanParseError::Malformed(e.to_string()))?;

    MealPlan::try_from(parsed)
}
