use axum::extract::State;
use rotireps_core::domain::meal_plan::{entities::MealPlan, ports::MealPlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    meal_plan::validators::GenerateMealPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanResponse {
    pub success: bool,
    pub meal_plan: MealPlan,
    #[schema(example = "Meal plan generated successfully")]
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/AIResponse",
    tag = "meal-plan",
    summary = "Generate a meal plan",
    description = "Builds a desi meal planning prompt from the submitted goal and ingredients, asks Gemini for a plan and returns the validated result.",
    responses(
        (status = 200, body = GenerateMealPlanResponse),
        (status = 400, description = "Required fields are missing or invalid", body = ApiErrorResponse),
        (status = 500, description = "The provider failed or returned an unusable plan", body = ApiErrorResponse)
    ),
    request_body = GenerateMealPlanValidator
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealPlanValidator>,
) -> Result<Response<GenerateMealPlanResponse>, ApiError> {
    let meal_plan = state
        .service
        .generate_meal_plan(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateMealPlanResponse {
        success: true,
        meal_plan,
        message: "Meal plan generated successfully".to_string(),
    }))
}
