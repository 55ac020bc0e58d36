use crate::domain::{
    meal_form::entities::{FormError, MealForm},
    meal_plan::{ports::MealPlanService, value_objects::GenerateMealPlanInput},
};

impl MealForm {
    /// Submits the current fields and waits for the plan.
    pub async fn submit<S>(&mut self, service: &S) -> Result<(), FormError>
    where
        S: MealPlanService,
    {
        let input = self.begin_submission()?;
        self.run(service, input).await;
        Ok(())
    }

    /// "Generate another plan": resubmits the fields frozen at the last submission.
    pub async fn regenerate<S>(&mut self, service: &S) -> Result<(), FormError>
    where
        S: MealPlanService,
    {
        let input = self.begin_regeneration()?;
        self.run(service, input).await;
        Ok(())
    }

    async fn run<S>(&mut self, service: &S, input: GenerateMealPlanInput)
    where
        S: MealPlanService,
    {
        let outcome = service
            .generate_meal_plan(input)
            .await
            .map_err(|e| e.to_string());

        self.complete(outcome);
    }
}
