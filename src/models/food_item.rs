//! Food Item model
//!
//! One constituent food of a meal, with its portion and macro breakdown.

use serde::{Deserialize, Serialize};

use super::MealType;

/// A single food within a meal
///
/// Immutable value type; never edited in place after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display glyph, opaque to the store
    pub icon: String,
    /// Free-text portion description (e.g. "150g", "1 porción")
    pub quantity: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
    pub fiber: f64,   // grams
}

impl FoodItem {
    /// Placeholder food produced by the day-plan transform
    ///
    /// Day plans only carry food names, so the icon comes from the meal type,
    /// the portion is a fixed placeholder, and all macros stay zero.
    pub fn plan_placeholder(name: &str, meal_type: MealType) -> Self {
        Self {
            icon: meal_type.icon().to_string(),
            quantity: PLAN_QUANTITY.to_string(),
            name: name.to_string(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
        }
    }
}

/// Portion label for foods derived from a weekly plan
pub const PLAN_QUANTITY: &str = "1 porción";
