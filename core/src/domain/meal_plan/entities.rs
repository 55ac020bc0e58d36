use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::meal_plan::parser::PlanParseError;

/// A generated plan. `meals` is the checked, typed view used for rendering; the
/// provider's JSON is kept alongside it and is what gets serialized, so fields the
/// typed view does not know about (notes, extra macros, `null` emojis) survive.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct MealPlan {
    pub meals: Vec<Meal>,
    #[schema(ignore)]
    raw: Value,
}

impl MealPlan {
    pub fn new(meals: Vec<Meal>) -> Self {
        let raw = json!({ "meals": meals });
        Self { meals, raw }
    }

    /// The plan exactly as the provider returned it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl TryFrom<Value> for MealPlan {
    type Error = PlanParseError;

    /// The top level must be an object with a non-empty `meals` array, and every entry
    /// must match the [`Meal`] shape. Entries keep their order and are never deduplicated.
    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let entries = raw
            .get("meals")
            .and_then(Value::as_array)
            .ok_or(PlanParseError::MissingMeals)?;

        if entries.is_empty() {
            return Err(PlanParseError::EmptyMeals);
        }

        let meals = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Meal::deserialize(entry).map_err(|e| PlanParseError::InvalidMeal {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { meals, raw })
    }
}

impl Serialize for MealPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MealPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        MealPlan::try_from(raw).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    /// Category label such as Breakfast, Lunch, Dinner or Snack.
    #[serde(rename = "type")]
    #[schema(example = "Breakfast")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[schema(example = "Paneer Bhurji")]
    pub dish: String,
    pub recipe: String,
    pub macros: Macros,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Macros {
    #[serde(deserialize_with = "deserialize_macro")]
    pub protein: u32,
    #[serde(deserialize_with = "deserialize_macro")]
    pub carbs: u32,
    #[serde(deserialize_with = "deserialize_macro")]
    pub calories: u32,
}

/// Macro values are integers, but models occasionally answer with `25.0` or `12.5`.
/// Fractions are rounded; anything that is not a non-negative number is rejected.
fn deserialize_macro<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;

    if let Some(value) = number.as_u64() {
        return u32::try_from(value).map_err(|_| de::Error::custom("macro value is too large"));
    }

    match number.as_f64() {
        Some(value) if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 => {
            Ok(value.round() as u32)
        }
        _ => Err(de::Error::custom(format!(
            "macro value must be a non-negative number, got {number}"
        ))),
    }
}
