use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    meal_plan::{
        entities::MealPlan,
        parser::{PlanParseError, parse_meal_plan},
        ports::{GenerationOptions, LLMClient, MealPlanService},
        prompt::build_meal_plan_prompt,
        schema::get_meal_plan_schema,
        value_objects::{GenerateMealPlanInput, MealRequest},
    },
};

impl<LLM> MealPlanService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_meal_plan(&self, input: GenerateMealPlanInput) -> Result<MealPlan, CoreError> {
        // 1. Validate input before anything leaves the process
        let request = MealRequest::try_from(input).inspect_err(|e| {
            tracing::debug!("Meal plan request rejected: {}", e);
        })?;

        tracing::debug!(
            goal = %request.goal,
            pantry_allowed = request.pantry_allowed,
            "Meal plan request validated"
        );

        // 2. Build prompt
        let prompt = build_meal_plan_prompt(&request);

        // Gemini rejects a response schema together with tools, so code execution wins.
        let response_schema = (self.structured_output && !self.code_execution)
            .then(get_meal_plan_schema);

        let options = GenerationOptions {
            code_execution: self.code_execution,
            response_schema,
        };

        // 3. Call LLM
        let raw_response = self
            .llm_client
            .generate_text(prompt, options)
            .await
            .inspect_err(|e| tracing::error!("Meal plan generation failed: {:?}", e))?;

        tracing::debug!(bytes = raw_response.len(), "LLM response received");

        // 4. Parse and validate response
        let plan = parse_meal_plan(&raw_response).map_err(|e| {
            match &e {
                PlanParseError::Malformed(reason) => {
                    tracing::error!("JSON parsing error: {}", reason);
                    tracing::error!("Raw response: {}", raw_response);
                }
                other => tracing::error!("Invalid meal plan shape: {}", other),
            }
            CoreError::from(e)
        })?;

        tracing::debug!(meals = plan.meals.len(), "Meal plan generated");

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_plan::{ports::MockLLMClient, value_objects::FlexibleNumber};

    const FENCED_PLAN: &str = "```json\n{\"meals\":[{\"type\":\"Breakfast\",\"dish\":\"Paneer Bhurji\",\"recipe\":\"...\", \"macros\":{\"protein\":25,\"carbs\":10,\"calories\":300}}]}\n```";

    fn input() -> GenerateMealPlanInput {
        GenerateMealPlanInput {
            goal: Some("cut".to_string()),
            weight: Some(FlexibleNumber::Number(70.0)),
            height: Some(FlexibleNumber::Number(175.0)),
            ingredients: Some("paneer, spinach".to_string()),
            suggestions: None,
            pantry_items: Some(true),
        }
    }

    fn replying(times: usize, reply: &'static str) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .times(times)
            .returning(move |_, _| Box::pin(async move { Ok::<_, CoreError>(reply.to_string()) }));
        llm
    }

    #[tokio::test]
    async fn test_generates_plan_from_fenced_output() {
        let service = Service::new(replying(1, FENCED_PLAN), true, false);

        let plan = service.generate_meal_plan(input()).await.unwrap();

        assert_eq!(plan.meals.len(), 1);
        assert_eq!(plan.meals[0].kind, "Breakfast");
        assert_eq!(plan.meals[0].dish, "Paneer Bhurji");
        assert_eq!(plan.meals[0].macros.protein, 25);
    }

    #[tokio::test]
    async fn test_missing_input_never_calls_provider() {
        let service = Service::new(replying(0, FENCED_PLAN), true, false);

        for strip in 0..3 {
            let mut input = input();
            match strip {
                0 => input.goal = None,
                1 => input.weight = None,
                _ => input.ingredients = None,
            }
            assert_eq!(
                service.generate_meal_plan(input).await,
                Err(CoreError::MissingInput)
            );
        }
    }

    #[tokio::test]
    async fn test_prompt_and_options_reach_provider() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(|prompt, options| {
                prompt.contains("- Available Ingredients: paneer, spinach")
                    && options.code_execution
                    && options.response_schema.is_none()
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok::<_, CoreError>(FENCED_PLAN.to_string()) }));

        let service = Service::new(llm, true, true);

        assert!(service.generate_meal_plan(input()).await.is_ok());
    }

    #[tokio::test]
    async fn test_structured_output_sends_schema() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(|_, options| {
                !options.code_execution
                    && options.response_schema.as_ref() == Some(&get_meal_plan_schema())
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok::<_, CoreError>(FENCED_PLAN.to_string()) }));

        let service = Service::new(llm, false, true);

        assert!(service.generate_meal_plan(input()).await.is_ok());
    }

    #[tokio::test]
    async fn test_provider_failure_is_reported() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().times(1).returning(|_, _| {
            Box::pin(async {
                Err::<String, _>(CoreError::ExternalServiceError(
                    "LLM API error: connection refused".to_string(),
                ))
            })
        });

        let service = Service::new(llm, true, false);

        assert_eq!(
            service.generate_meal_plan(input()).await,
            Err(CoreError::ExternalServiceError(
                "LLM API error: connection refused".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_malformed_output_is_reported() {
        let service = Service::new(replying(1, "Sure! Here is a plan: paneer."), true, false);

        assert!(matches!(
            service.generate_meal_plan(input()).await,
            Err(CoreError::MalformedProviderOutput(_))
        ));
    }

    #[tokio::test]
    async fn test_output_without_meals_is_invalid_shape() {
        let service = Service::new(replying(1, "```json\n{\"dishes\": []}\n```"), true, false);

        assert!(matches!(
            service.generate_meal_plan(input()).await,
            Err(CoreError::InvalidPlanShape(_))
        ));
    }

    #[tokio::test]
    async fn test_identical_requests_are_not_cached() {
        let service = Service::new(replying(2, FENCED_PLAN), true, false);

        let first = service.generate_meal_plan(input()).await.unwrap();
        let second = service.generate_meal_plan(input()).await.unwrap();

        assert_eq!(first, second);
    }
}
