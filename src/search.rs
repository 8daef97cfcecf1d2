//! Meal search
//!
//! Free-text filter over a meal list. Substring match only, no tokenization
//! or fuzzy matching.

use crate::models::Meal;

/// Filter meals by a search term
///
/// The term is trimmed and lower-cased; an empty term returns the input
/// unchanged. A meal matches when its meal type or any of its food names
/// contains the term.
pub fn filter_meals(meals: &[Meal], term: &str) -> Vec<Meal> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return meals.to_vec();
    }

    meals
        .iter()
        .filter(|meal| matches_term(meal, &term))
        .cloned()
        .collect()
}

fn matches_term(meal: &Meal, term: &str) -> bool {
    if meal.meal_type.as_str().contains(term) {
        return true;
    }
    meal.foods
        .iter()
        .any(|food| food.name.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodItem, MealType};

    fn meal(id: &str, meal_type: MealType, food_names: &[&str]) -> Meal {
        let foods = food_names
            .iter()
            .map(|name| FoodItem::plan_placeholder(name, meal_type))
            .collect();
        Meal {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            date: "2025-01-09".to_string(),
            meal_type,
            foods,
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
            total_fiber: 0.0,
        }
    }

    #[test]
    fn test_empty_term_returns_all() {
        let meals = vec![
            meal("1", MealType::Breakfast, &["Pan"]),
            meal("2", MealType::Lunch, &["Pollo"]),
        ];
        assert_eq!(filter_meals(&meals, "").len(), 2);
        assert_eq!(filter_meals(&meals, "   ").len(), 2);
    }

    #[test]
    fn test_matches_food_name_case_insensitive() {
        let meals = vec![
            meal("1", MealType::Breakfast, &["Huevos revueltos"]),
            meal("2", MealType::Lunch, &["Pollo"]),
        ];
        let hits = filter_meals(&meals, "huevos");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_matches_meal_type() {
        let meals = vec![
            meal("1", MealType::Breakfast, &["Pan"]),
            meal("2", MealType::Dinner, &["Sopa"]),
        ];
        let hits = filter_meals(&meals, "DINNER");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn test_substring_match_only() {
        let meals = vec![meal("1", MealType::Lunch, &["Arroz con pollo"])];
        assert_eq!(filter_meals(&meals, "con pol").len(), 1);
        assert_eq!(filter_meals(&meals, "pollo arroz").len(), 0);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let meals = vec![
            meal("1", MealType::Breakfast, &["Huevos"]),
            meal("2", MealType::Lunch, &["Pollo"]),
            meal("3", MealType::Snack, &["Huevos duros"]),
        ];
        let once = filter_meals(&meals, "huevos");
        let twice = filter_meals(&once, "huevos");
        assert_eq!(once.len(), twice.len());
        let once_ids: Vec<&str> = once.iter().map(|m| m.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }
}
