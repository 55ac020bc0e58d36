use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{entities::MealPlan, value_objects::GenerateMealPlanInput},
};

/// Options forwarded to the text generation provider for a single call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOptions {
    /// Enables the provider's code execution tool.
    pub code_execution: bool,
    /// Asks the provider to constrain its output to this JSON schema.
    pub response_schema: Option<serde_json::Value>,
}

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for meal plan generation
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;
}
