use crate::domain::meal_plan::value_objects::MealRequest;

const MEAL_PLAN_TEMPLATE: &str = r#"
You are a desi meal planning assistant.
Return ONLY valid JSON in the following format, no extra text.

{
  "meals": [
    {
      "type": "Breakfast",
      "emoji": "🌅",
      "dish": "Paneer Bhurji",
      "recipe": "Step 1... Step 2...",
      "macros": { "protein": 25, "carbs": 30, "calories": 350 }
    },
    {
      "type": "Lunch",
      "emoji": "🍽️",
      "dish": "Chicken Curry",
      "recipe": "Step 1... Step 2...",
      "macros": { "protein": 40, "carbs": 45, "calories": 500 }
    }
  ]
}

User Details:
- Goal: {goal}
- Weight: {weight}kg
- Height: {height}
- Available Ingredients: {ingredients}
- Pantry Access: {pantry}
- Suggestions: {suggestions}


Rules:
- Follow the JSON structure exactly
- No extra text or explanation
- Recipes must be desi-style and match the fitness goal
- Macros are integers only
- Include Breakfast, Lunch, Dinner, and optionally Snack
"#;

const PANTRY_AVAILABLE: &str = "have the pantry items eg rice,oil, spices, salt etc";
const PANTRY_UNAVAILABLE: &str = "do not have the pantry items eg rice,oil, spices, salt etc";

/// Renders a validated request into the meal planning prompt.
pub fn build_meal_plan_prompt(request: &MealRequest) -> String {
    let height = request
        .height
        .map(|h| format!("{}cm", format_measurement(h)))
        .unwrap_or_else(|| "not provided".to_string());

    let pantry = if request.pantry_allowed {
        PANTRY_AVAILABLE
    } else {
        PANTRY_UNAVAILABLE
    };

    let weight = format_measurement(request.weight);
    let goal = request.goal.to_string();

    render(
        MEAL_PLAN_TEMPLATE,
        &[
            ("goal", goal.as_str()),
            ("weight", weight.as_str()),
            ("height", height.as_str()),
            ("ingredients", request.ingredients.as_str()),
            ("pantry", pantry),
            ("suggestions", request.suggestions.as_deref().unwrap_or("none")),
        ],
    )
}

/// Single pass substitution of `{key}` placeholders. Substituted text is never rescanned.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        for (key, value) in values {
            if let Some(after) = tail.strip_prefix(key).and_then(|t| t.strip_prefix('}')) {
                out.push_str(value);
                rest = after;
                continue 'scan;
            }
        }

        out.push('{');
        rest = tail;
    }

    out.push_str(rest);
    out
}

/// `70.0` renders as `70`, `72.5` stays `72.5`.
fn format_measurement(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_plan::value_objects::Goal;

    fn request() -> MealRequest {
        MealRequest {
            goal: Goal::Cut,
            weight: 70.0,
            height: Some(175.0),
            ingredients: "paneer, spinach".to_string(),
            suggestions: None,
            pantry_allowed: true,
        }
    }

    #[test]
    fn test_prompt_embeds_user_details() {
        let prompt = build_meal_plan_prompt(&request());

        assert!(prompt.contains("- Goal: cut"));
        assert!(prompt.contains("- Weight: 70kg"));
        assert!(prompt.contains("- Height: 175cm"));
        assert!(prompt.contains("- Available Ingredients: paneer, spinach"));
        assert!(prompt.contains(&format!("- Pantry Access: {PANTRY_AVAILABLE}")));
        assert!(prompt.contains("- Suggestions: none"));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn test_prompt_without_pantry_or_height() {
        let mut request = request();
        request.pantry_allowed = false;
        request.height = None;
        request.weight = 82.5;
        request.suggestions = Some("no onion garlic".to_string());

        let prompt = build_meal_plan_prompt(&request);

        assert!(prompt.contains(&format!("- Pantry Access: {PANTRY_UNAVAILABLE}")));
        assert!(prompt.contains("- Height: not provided"));
        assert!(prompt.contains("- Weight: 82.5kg"));
        assert!(prompt.contains("- Suggestions: no onion garlic"));
    }

    #[test]
    fn test_large_whole_measurements_are_not_truncated() {
        assert_eq!(format_measurement(1e20), "100000000000000000000");
        assert_eq!(format_measurement(72.5), "72.5");
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_meal_plan_prompt(&request()),
            build_meal_plan_prompt(&request())
        );
    }

    #[test]
    fn test_placeholders_in_user_text_are_left_alone() {
        let mut request = request();
        request.suggestions = Some("{ingredients}".to_string());

        let prompt = build_meal_plan_prompt(&request);

        assert!(prompt.contains("- Suggestions: {ingredients}"));
    }
}
