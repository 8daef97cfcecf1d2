//! nutridiario demo
//!
//! Drives the nutrition store against an in-memory gateway and prints its
//! projections as JSON. Stands in for the UI layer that would normally
//! consume the store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

use nutridiario::gateway::{GatewayResult, Notifier, NutritionGateway};
use nutridiario::models::{DailyNutrition, DayPlan};
use nutridiario::{build_info, NutritionStore, ViewMode};

/// Canned weekly plan data, two weekdays
struct InMemoryGateway;

#[async_trait]
impl NutritionGateway for InMemoryGateway {
    async fn available_meal_days(&self) -> GatewayResult<Vec<String>> {
        Ok(vec!["LUNES".to_string(), "MARTES".to_string()])
    }

    async fn meals_by_day(&self, day: &str) -> GatewayResult<Option<DayPlan>> {
        let plan = match day {
            "LUNES" => serde_json::from_value(serde_json::json!({
                "id": "plan-lunes",
                "dayOfWeek": "LUNES",
                "desayuno": ["Huevos revueltos", "Pan integral"],
                "comida": ["Pollo", "Arroz"],
                "cena": ["Sopa de verduras"]
            })),
            "MARTES" => serde_json::from_value(serde_json::json!({
                "id": "plan-martes",
                "dayOfWeek": "MARTES",
                "comida": ["Lentejas"],
                "merienda": ["Yogur"]
            })),
            _ => return Ok(None),
        };
        plan.map(Some)
            .map_err(|e| nutridiario::GatewayError::BadResponse(e.to_string()))
    }

    async fn daily_nutrition(&self, _user_id: &str, date: &str) -> GatewayResult<DailyNutrition> {
        Ok(DailyNutrition::empty(date))
    }
}

/// Prints toasts to stderr
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn success(&self, message: &str) {
        eprintln!("[toast] {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("[toast!] {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays clean JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("nutridiario=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let mut store = NutritionStore::new(Arc::new(InMemoryGateway), Arc::new(StderrNotifier));

    store.load("user-1").await;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "selectedDay": store.selected_day(),
            "availableDays": store.available_days(),
            "hasMealPlan": store.has_meal_plan(),
            "error": store.error(),
            "meals": store.displayed_meals(),
        }))?
    );

    store.next_meal_day("user-1").await;
    store.set_search_term("lentejas");
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "selectedDay": store.selected_day(),
            "searchTerm": store.search_term(),
            "meals": store.displayed_meals(),
        }))?
    );

    store.clear_search();
    store.set_view_mode(ViewMode::Infinite).await;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "mode": "infinite",
            "hasMore": store.has_more(),
            "meals": store.displayed_meals(),
        }))?
    );

    Ok(())
}
