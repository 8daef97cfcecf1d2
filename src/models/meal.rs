//! Meal model
//!
//! A flattened diary entry for one meal occasion, with precomputed totals.

use serde::{Deserialize, Serialize};

use super::FoodItem;

/// Meal type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            _ => MealType::Snack,
        }
    }

    /// Fixed display glyph per meal type
    pub fn icon(&self) -> &'static str {
        match self {
            MealType::Breakfast => "🍳",
            MealType::Lunch => "🍽️",
            MealType::Dinner => "🌙",
            MealType::Snack => "🍎",
        }
    }
}

/// A meal diary entry
///
/// Totals are precomputed at creation. Meals derived from a weekly day plan
/// carry zeroed totals: the plan only lists food names, no macro data exists
/// at that granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Unique within a loaded set; `<dayPlanId>-<slotKey>` when synthesized
    /// from a day plan, server-assigned otherwise
    pub id: String,
    pub user_id: String,
    /// ISO date: "2025-01-09"
    pub date: String,
    pub meal_type: MealType,
    pub foods: Vec<FoodItem>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub total_fiber: f64,
}

impl Meal {
    /// Build a meal with totals summed from its foods
    pub fn with_computed_totals(
        id: &str,
        user_id: &str,
        date: &str,
        meal_type: MealType,
        foods: Vec<FoodItem>,
    ) -> Self {
        let mut meal = Self {
            id: id.to_string(),
            user_id: user_id.to_string(),
            date: date.to_string(),
            meal_type,
            foods,
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
            total_fiber: 0.0,
        };
        meal.recompute_totals();
        meal
    }

    /// Re-sum totals from the current food list
    pub fn recompute_totals(&mut self) {
        self.total_calories = self.foods.iter().map(|f| f.calories).sum();
        self.total_protein = self.foods.iter().map(|f| f.protein).sum();
        self.total_carbs = self.foods.iter().map(|f| f.carbs).sum();
        self.total_fat = self.foods.iter().map(|f| f.fat).sum();
        self.total_fiber = self.foods.iter().map(|f| f.fiber).sum();
    }
}
