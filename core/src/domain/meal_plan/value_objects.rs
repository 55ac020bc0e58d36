use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    Bulk,
    Maintain,
}

impl FromStr for Goal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cut" => Ok(Goal::Cut),
            "bulk" => Ok(Goal::Bulk),
            "maintain" => Ok(Goal::Maintain),
            other => Err(CoreError::InvalidInput(format!(
                "Unknown goal '{other}', expected one of cut, bulk or maintain"
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::Cut => "cut",
            Goal::Bulk => "bulk",
            Goal::Maintain => "maintain",
        };
        f.write_str(label)
    }
}

/// A measurement as submitted by a form: either a JSON number or the raw text of a number input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FlexibleNumber {
    Number(f64),
    Text(String),
}

impl FlexibleNumber {
    /// Blank text or zero, i.e. a field left empty.
    fn is_blank(&self) -> bool {
        match self {
            FlexibleNumber::Number(value) => *value == 0.0,
            FlexibleNumber::Text(text) => text.trim().is_empty(),
        }
    }

    /// `Ok(None)` for blank or zero values, which count as not filled in.
    fn positive(&self, field: &str) -> Result<Option<f64>, CoreError> {
        let value = match self {
            FlexibleNumber::Number(value) => *value,
            FlexibleNumber::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<f64>().map_err(|_| {
                    CoreError::InvalidInput(format!("{field} must be a number, got '{text}'"))
                })?
            }
        };

        if value == 0.0 {
            return Ok(None);
        }
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "{field} must be a positive number"
            )));
        }
        Ok(Some(value))
    }
}

impl From<f64> for FlexibleNumber {
    fn from(value: f64) -> Self {
        FlexibleNumber::Number(value)
    }
}

impl From<&str> for FlexibleNumber {
    fn from(value: &str) -> Self {
        FlexibleNumber::Text(value.to_string())
    }
}

/// Raw fields of a meal plan request before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateMealPlanInput {
    pub goal: Option<String>,
    pub weight: Option<FlexibleNumber>,
    pub height: Option<FlexibleNumber>,
    pub ingredients: Option<String>,
    pub suggestions: Option<String>,
    pub pantry_items: Option<bool>,
}

/// A validated request, ready to be rendered into a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct MealRequest {
    pub goal: Goal,
    pub weight: f64,
    pub height: Option<f64>,
    pub ingredients: String,
    pub suggestions: Option<String>,
    pub pantry_allowed: bool,
}

impl TryFrom<GenerateMealPlanInput> for MealRequest {
    type Error = CoreError;

    fn try_from(input: GenerateMealPlanInput) -> Result<Self, Self::Error> {
        let goal = non_blank(input.goal);
        let ingredients = non_blank(input.ingredients);
        let weight = input.weight.filter(|w| !w.is_blank());

        let (Some(goal), Some(weight), Some(ingredients)) = (goal, weight, ingredients) else {
            return Err(CoreError::MissingInput);
        };

        let weight = weight
            .positive("weight")?
            .ok_or(CoreError::MissingInput)?;

        let height = input
            .height
            .as_ref()
            .map(|h| h.positive("height"))
            .transpose()?
            .flatten();

        Ok(MealRequest {
            goal: goal.parse()?,
            weight,
            height,
            ingredients,
            suggestions: non_blank(input.suggestions),
            pantry_allowed: input.pantry_items.unwrap_or(true),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
