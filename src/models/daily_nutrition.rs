//! Daily Nutrition model
//!
//! A calendar-date nutrition log with day-level totals and goals.

use serde::{Deserialize, Serialize};

use super::Meal;

/// One calendar day's nutrition log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNutrition {
    /// ISO date: "2025-01-09"
    pub date: String,
    pub meals: Vec<Meal>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub water_intake: f64,
    pub calorie_goal: f64,
}

impl DailyNutrition {
    /// Zeroed shell for a date, substituted when the fetch fails so the
    /// consumer always has a renderable shape
    pub fn empty(date: &str) -> Self {
        Self {
            date: date.to_string(),
            meals: Vec::new(),
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
            water_intake: 0.0,
            calorie_goal: 0.0,
        }
    }
}
