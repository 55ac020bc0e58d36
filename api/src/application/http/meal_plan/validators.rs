use rotireps_core::domain::meal_plan::value_objects::{FlexibleNumber, GenerateMealPlanInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Presence of goal, weight and ingredients is checked by the meal plan service,
/// so every field is optional here.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanValidator {
    #[schema(example = "cut")]
    #[validate(length(max = 32, message = "goal must be at most 32 characters"))]
    pub goal: Option<String>,

    #[schema(example = 70)]
    pub weight: Option<FlexibleNumber>,

    #[schema(example = 175)]
    pub height: Option<FlexibleNumber>,

    #[schema(example = "paneer, spinach")]
    #[validate(length(
        max = 2000,
        message = "ingredients must be at most 2000 characters"
    ))]
    pub ingredients: Option<String>,

    #[validate(length(
        max = 2000,
        message = "suggestions must be at most 2000 characters"
    ))]
    pub suggestions: Option<String>,

    #[schema(example = true)]
    pub pantry_items: Option<bool>,
}

impl From<GenerateMealPlanValidator> for GenerateMealPlanInput {
    fn from(payload: GenerateMealPlanValidator) -> Self {
        GenerateMealPlanInput {
            goal: payload.goal,
            weight: payload.weight,
            height: payload.height,
            ingredients: payload.ingredients,
            suggestions: payload.suggestions,
            pantry_items: payload.pantry_items,
        }
    }
}
