//! Day Plan model
//!
//! A per-weekday record of up to five optional meal slots, each a list of
//! food names (no macro data). Sourced read-only from the backend; the
//! flattening transform into diary `Meal`s lives here.

use serde::{Deserialize, Serialize};

use super::{FoodItem, Meal, MealType};

/// A weekly meal plan entry for one weekday
///
/// Wire field names are the backend's Spanish slot keys; absent and empty
/// slots are equivalent for the transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub id: String,
    /// Weekday label as declared by the backend (e.g. "LUNES")
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: String,
    #[serde(rename = "desayuno")]
    pub breakfast: Option<Vec<String>>,
    #[serde(rename = "mediaManana")]
    pub mid_morning: Option<Vec<String>>,
    #[serde(rename = "comida")]
    pub lunch: Option<Vec<String>>,
    #[serde(rename = "merienda")]
    pub afternoon_snack: Option<Vec<String>>,
    #[serde(rename = "cena")]
    pub dinner: Option<Vec<String>>,
}

/// Slot key (as used in synthesized meal ids) and the meal type it maps to
const SLOTS: [(&str, MealType); 5] = [
    ("desayuno", MealType::Breakfast),
    ("mediaManana", MealType::Snack),
    ("comida", MealType::Lunch),
    ("merienda", MealType::Snack),
    ("cena", MealType::Dinner),
];

impl DayPlan {
    fn slot(&self, key: &str) -> Option<&Vec<String>> {
        match key {
            "desayuno" => self.breakfast.as_ref(),
            "mediaManana" => self.mid_morning.as_ref(),
            "comida" => self.lunch.as_ref(),
            "merienda" => self.afternoon_snack.as_ref(),
            "cena" => self.dinner.as_ref(),
            _ => None,
        }
    }

    /// Flatten this plan into diary meals, one per non-empty slot
    ///
    /// Absent and empty slots are skipped entirely, never emitted as
    /// zero-food meals. Produced meals get a `<plan id>-<slot key>` id,
    /// today's date, placeholder foods, and zeroed totals (the plan has no
    /// macro data; see `Meal`).
    pub fn to_meals(&self, user_id: &str) -> Vec<Meal> {
        self.to_meals_on(user_id, &crate::navigate::today())
    }

    /// Same as `to_meals` but with an explicit date
    pub fn to_meals_on(&self, user_id: &str, date: &str) -> Vec<Meal> {
        let mut meals = Vec::new();
        for (key, meal_type) in SLOTS {
            let names = match self.slot(key) {
                Some(names) if !names.is_empty() => names,
                _ => continue,
            };
            let foods = names
                .iter()
                .map(|name| FoodItem::plan_placeholder(name, meal_type))
                .collect();
            meals.push(Meal {
                id: format!("{}-{}", self.id, key),
                user_id: user_id.to_string(),
                date: date.to_string(),
                meal_type,
                foods,
                total_calories: 0.0,
                total_protein: 0.0,
                total_carbs: 0.0,
                total_fat: 0.0,
                total_fiber: 0.0,
            });
        }
        meals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_plan() -> DayPlan {
        DayPlan {
            id: "plan-1".to_string(),
            day_of_week: "LUNES".to_string(),
            breakfast: None,
            mid_morning: None,
            lunch: None,
            afternoon_snack: None,
            dinner: None,
        }
    }

    #[test]
    fn test_single_slot_transforms_to_one_meal() {
        let plan = DayPlan {
            breakfast: Some(vec!["Bread".to_string()]),
            ..empty_plan()
        };
        let meals = plan.to_meals_on("user-1", "2025-01-09");
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].meal_type, MealType::Breakfast);
        assert_eq!(meals[0].id, "plan-1-desayuno");
        assert_eq!(meals[0].user_id, "user-1");
        assert_eq!(meals[0].foods.len(), 1);
        assert_eq!(meals[0].foods[0].name, "Bread");
    }

    #[test]
    fn test_empty_and_absent_slots_are_skipped() {
        let plan = DayPlan {
            lunch: Some(vec!["Pollo".to_string(), "Arroz".to_string()]),
            dinner: Some(Vec::new()), // present but empty
            ..empty_plan()
        };
        let meals = plan.to_meals_on("user-1", "2025-01-09");
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].meal_type, MealType::Lunch);
        assert_eq!(meals[0].foods.len(), 2);
    }

    #[test]
    fn test_plan_meals_carry_zeroed_totals() {
        let plan = DayPlan {
            lunch: Some(vec!["Pollo".to_string()]),
            ..empty_plan()
        };
        let meals = plan.to_meals_on("user-1", "2025-01-09");
        assert_eq!(meals[0].total_calories, 0.0);
        assert_eq!(meals[0].total_protein, 0.0);
        assert_eq!(meals[0].foods[0].quantity, "1 porción");
    }

    #[test]
    fn test_both_snack_slots_map_to_snack() {
        let plan = DayPlan {
            mid_morning: Some(vec!["Fruta".to_string()]),
            afternoon_snack: Some(vec!["Yogur".to_string()]),
            ..empty_plan()
        };
        let meals = plan.to_meals_on("user-1", "2025-01-09");
        assert_eq!(meals.len(), 2);
        assert!(meals.iter().all(|m| m.meal_type == MealType::Snack));
        // Distinct slot keys keep synthesized ids unique
        assert_ne!(meals[0].id, meals[1].id);
    }

    #[test]
    fn test_slot_order_is_stable() {
        let plan = DayPlan {
            breakfast: Some(vec!["Pan".to_string()]),
            lunch: Some(vec!["Pollo".to_string()]),
            dinner: Some(vec!["Sopa".to_string()]),
            ..empty_plan()
        };
        let meals = plan.to_meals_on("user-1", "2025-01-09");
        let types: Vec<MealType> = meals.iter().map(|m| m.meal_type).collect();
        assert_eq!(
            types,
            vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner]
        );
    }

    #[test]
    fn test_wire_field_names_deserialize() {
        let json = r#"{
            "id": "plan-7",
            "dayOfWeek": "MARTES",
            "comida": ["Lentejas"],
            "cena": ["Tortilla"]
        }"#;
        let plan: DayPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.lunch.as_deref(), Some(&["Lentejas".to_string()][..]));
        assert!(plan.breakfast.is_none());
        let meals = plan.to_meals_on("user-1", "2025-01-09");
        assert_eq!(meals.len(), 2);
    }
}
