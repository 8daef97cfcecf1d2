//! Data models
//!
//! Value types for the nutrition diary: foods, meals, weekly day plans, and
//! calendar-date nutrition logs.

mod daily_nutrition;
mod day_plan;
mod food_item;
mod meal;

pub use daily_nutrition::DailyNutrition;
pub use day_plan::DayPlan;
pub use food_item::{FoodItem, PLAN_QUANTITY};
pub use meal::{Meal, MealType};
