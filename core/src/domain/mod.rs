pub mod common;
pub mod meal_form;
pub mod meal_plan;
