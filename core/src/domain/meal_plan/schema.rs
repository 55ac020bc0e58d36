use serde_json::json;

/// Returns the JSON schema for meal plan LLM responses
pub fn get_meal_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "meals": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string" },
                        "emoji": { "type": "string" },
                        "dish": { "type": "string" },
                        "recipe": { "type": "string" },
                        "macros": {
                            "type": "object",
                            "properties": {
                                "protein": { "type": "integer" },
                                "carbs": { "type": "integer" },
                                "calories": { "type": "integer" }
                            },
                            "required": ["protein", "carbs", "calories"]
                        }
                    },
                    "required": ["type", "dish", "recipe", "macros"]
                }
            }
        },
        "required": ["meals"]
    })
}
