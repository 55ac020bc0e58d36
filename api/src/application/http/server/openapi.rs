use crate::application::http::{health::HealthApiDoc, meal_plan::router::MealPlanApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roti & Reps API",
        description = "Generates desi meal plans from a fitness goal and the ingredients at hand"
    ),
    nest(
        (path = "/api", api = MealPlanApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
