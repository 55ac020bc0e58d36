use crate::domain::meal_plan::entities::{Meal, MealPlan};

/// Display model for one meal of a generated plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealCard {
    pub title: String,
    pub dish: String,
    pub steps: String,
    pub macros: String,
}

impl From<&Meal> for MealCard {
    fn from(meal: &Meal) -> Self {
        Self {
            title: card_title(meal.emoji.as_deref(), &meal.kind),
            dish: meal.dish.clone(),
            steps: meal.recipe.clone(),
            macros: format!(
                "{}g P, {}g C, {} cal",
                meal.macros.protein, meal.macros.carbs, meal.macros.calories
            ),
        }
    }
}

pub fn meal_cards(plan: &MealPlan) -> Vec<MealCard> {
    plan.meals.iter().map(MealCard::from).collect()
}

/// `"{emoji} {type}"` with whitespace collapsed. Models sometimes label a snack
/// `"Snack"` and prefix it with a snack emoji named "snack", giving "snack Snack".
fn card_title(emoji: Option<&str>, kind: &str) -> String {
    let label = format!("{} {}", emoji.unwrap_or_default(), kind);

    collapse_first_snack_pair(&label)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

const SNACK: &str = "snack";

/// Replaces the first `snack`, whitespace, `snack` run (any case) with `Snack`.
fn collapse_first_snack_pair(label: &str) -> String {
    let lower = label.to_ascii_lowercase();
    let mut from = 0;

    while let Some(offset) = lower[from..].find(SNACK) {
        let start = from + offset;
        let after = &lower[start + SNACK.len()..];
        let rest = after.trim_start();
        let gap = after.len() - rest.len();

        if gap > 0 && rest.starts_with(SNACK) {
            let end = start + SNACK.len() + gap + SNACK.len();
            return format!("{}Snack{}", &label[..start], &label[end..]);
        }
        from = start + 1;
    }

    label.to_string()
}
