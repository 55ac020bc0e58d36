use thiserror::Error;

use crate::domain::meal_plan::{
    entities::MealPlan,
    value_objects::{FlexibleNumber, GenerateMealPlanInput},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("A meal plan is already being generated")]
    RequestInFlight,

    #[error("Nothing has been submitted yet")]
    NothingSubmitted,

    #[error("No error to dismiss")]
    NoError,
}

/// Raw field values, exactly as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealFormFields {
    pub goal: String,
    pub weight: String,
    pub height: String,
    pub ingredients: String,
    pub suggestions: String,
    pub pantry_items: bool,
}

impl Default for MealFormFields {
    fn default() -> Self {
        Self {
            goal: String::new(),
            weight: String::new(),
            height: String::new(),
            ingredients: String::new(),
            suggestions: String::new(),
            pantry_items: true,
        }
    }
}

impl From<MealFormFields> for GenerateMealPlanInput {
    fn from(fields: MealFormFields) -> Self {
        GenerateMealPlanInput {
            goal: Some(fields.goal),
            weight: Some(FlexibleNumber::Text(fields.weight)),
            height: Some(FlexibleNumber::Text(fields.height)),
            ingredients: Some(fields.ingredients),
            suggestions: Some(fields.suggestions),
            pantry_items: Some(fields.pantry_items),
        }
    }
}

/// What the form is currently showing. The variants are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Loading,
    Ready(MealPlan),
    Failed(String),
}

/// Per-session form state.
#[derive(Debug, Clone, Default)]
pub struct MealForm {
    fields: MealFormFields,
    phase: FormPhase,
    submitted: Option<MealFormFields>,
}

impl MealForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &MealFormFields {
        &self.fields
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Snapshot taken at the last submission, reused by "generate another".
    pub fn submitted(&self) -> Option<&MealFormFields> {
        self.submitted.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FormPhase::Loading)
    }

    pub fn inputs_disabled(&self) -> bool {
        self.is_loading()
    }

    pub fn meal_plan(&self) -> Option<&MealPlan> {
        match &self.phase {
            FormPhase::Ready(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) -> Result<(), FormError> {
        self.edit(|fields| fields.goal = goal.into())
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) -> Result<(), FormError> {
        self.edit(|fields| fields.weight = weight.into())
    }

    pub fn set_height(&mut self, height: impl Into<String>) -> Result<(), FormError> {
        self.edit(|fields| fields.height = height.into())
    }

    pub fn set_ingredients(&mut self, ingredients: impl Into<String>) -> Result<(), FormError> {
        self.edit(|fields| fields.ingredients = ingredients.into())
    }

    pub fn set_suggestions(&mut self, suggestions: impl Into<String>) -> Result<(), FormError> {
        self.edit(|fields| fields.suggestions = suggestions.into())
    }

    pub fn set_pantry_items(&mut self, pantry_items: bool) -> Result<(), FormError> {
        self.edit(|fields| fields.pantry_items = pantry_items)
    }

    fn edit(&mut self, apply: impl FnOnce(&mut MealFormFields)) -> Result<(), FormError> {
        if self.is_loading() {
            return Err(FormError::RequestInFlight);
        }
        apply(&mut self.fields);
        Ok(())
    }

    /// Freezes the current fields and enters the loading phase.
    pub fn begin_submission(&mut self) -> Result<GenerateMealPlanInput, FormError> {
        if self.is_loading() {
            return Err(FormError::RequestInFlight);
        }
        let snapshot = self.fields.clone();
        self.submitted = Some(snapshot.clone());
        self.phase = FormPhase::Loading;
        Ok(snapshot.into())
    }

    /// Re-enters the loading phase with the last submitted snapshot.
    pub fn begin_regeneration(&mut self) -> Result<GenerateMealPlanInput, FormError> {
        if self.is_loading() {
            return Err(FormError::RequestInFlight);
        }
        let snapshot = self.submitted.clone().ok_or(FormError::NothingSubmitted)?;
        self.phase = FormPhase::Loading;
        Ok(snapshot.into())
    }

    /// Leaves the loading phase with the outcome of the request.
    pub fn complete(&mut self, outcome: Result<MealPlan, String>) {
        if !self.is_loading() {
            tracing::warn!("Ignoring a meal plan outcome outside of the loading phase");
            return;
        }
        self.phase = match outcome {
            Ok(plan) => FormPhase::Ready(plan),
            Err(message) => FormPhase::Failed(message),
        };
    }

    /// Closes the error panel. Field values are kept for resubmission.
    pub fn dismiss_error(&mut self) -> Result<(), FormError> {
        match self.phase {
            FormPhase::Failed(_) => {
                self.phase = FormPhase::Idle;
                Ok(())
            }
            _ => Err(FormError::NoError),
        }
    }
}
