//! External collaborators
//!
//! The store's two seams: the data-access gateway and the toast notifier.
//! Both are injected at construction; the store owns no transport.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DailyNutrition, DayPlan};

/// Gateway error types
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    BadResponse(String),
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Remote nutrition data access
///
/// Stateless from the store's perspective: pure request/response. The store
/// never lets a gateway failure escape to its callers; every error is folded
/// into state (see `NutritionStore`).
#[async_trait]
pub trait NutritionGateway: Send + Sync {
    /// Weekday labels that have a plan, in the backend's declared order
    async fn available_meal_days(&self) -> GatewayResult<Vec<String>>;

    /// Plan for one weekday, or `None` when the day has no plan
    async fn meals_by_day(&self, day: &str) -> GatewayResult<Option<DayPlan>>;

    /// Calendar-date nutrition log
    async fn daily_nutrition(&self, user_id: &str, date: &str) -> GatewayResult<DailyNutrition>;
}

/// Fire-and-forget user notifications
///
/// The store calls these on CRUD outcomes and never awaits or branches on
/// the result.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
