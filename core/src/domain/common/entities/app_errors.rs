use thiserror::Error;

use crate::domain::meal_plan::parser::PlanParseError;

pub const MISSING_INPUT_MESSAGE: &str = "Please fill all of the input fields";
pub const PROVIDER_FAILURE_MESSAGE: &str = "Something went wrong fetching AI response";
pub const MALFORMED_OUTPUT_MESSAGE: &str = "Failed to parse AI response. Please try again.";
pub const MALFORMED_OUTPUT_DETAIL: &str = "Invalid JSON format from AI";
pub const INVALID_SHAPE_MESSAGE: &str = "Invalid meal plan format received from AI";
pub const INVALID_SHAPE_DETAIL: &str = "Missing or invalid meals array";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Please fill all of the input fields")]
    MissingInput,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Something went wrong fetching AI response")]
    ExternalServiceError(String),

    #[error("Failed to parse AI response. Please try again.")]
    MalformedProviderOutput(String),

    #[error("Invalid meal plan format received from AI")]
    InvalidPlanShape(String),
}

impl CoreError {
    /// Client errors are the caller's fault; everything else is reported as a server error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::MissingInput | CoreError::InvalidInput(_))
    }

    /// Secondary detail shown next to the message for server-side failures.
    pub fn detail(&self) -> Option<String> {
        match self {
            CoreError::MissingInput | CoreError::InvalidInput(_) => None,
            CoreError::ExternalServiceError(detail) => Some(detail.clone()),
            CoreError::MalformedProviderOutput(_) => Some(MALFORMED_OUTPUT_DETAIL.to_string()),
            CoreError::InvalidPlanShape(detail) => Some(detail.clone()),
        }
    }
}

impl From<PlanParseError> for CoreError {
    fn from(error: PlanParseError) -> Self {
        match error {
            PlanParseError::Malformed(reason) => CoreError::MalformedProviderOutput(reason),
            PlanParseError::MissingMeals => {
                CoreError::InvalidPlanShape(INVALID_SHAPE_DETAIL.to_string())
            }
            PlanParseError::EmptyMeals => {
                CoreError::InvalidPlanShape("Meal plan contains no meals".to_string())
            }
            PlanParseError::InvalidMeal { index, reason } => {
                CoreError::InvalidPlanShape(format!("Invalid meal at index {index}: {reason}"))
            }
        }
    }
}
