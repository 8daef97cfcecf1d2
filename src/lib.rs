//! Nutrition diary state store
//!
//! An in-process state container for a nutrition diary client: weekly
//! day-plan loading, calendar-date logs, search, offset and incremental
//! paging, and day/date navigation. Consumers read the store's projections
//! and invoke its operations; all network access goes through the injected
//! `NutritionGateway`.

pub mod build_info;
pub mod gateway;
pub mod models;
pub mod navigate;
pub mod paging;
pub mod search;
pub mod store;

pub use gateway::{GatewayError, GatewayResult, Notifier, NutritionGateway};
pub use store::{NutritionStore, StoreConfig, ViewMode};
