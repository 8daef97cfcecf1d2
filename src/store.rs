//! Nutrition store
//!
//! The orchestrating state container behind the nutrition diary. Owns all
//! mutable state, drives the day-plan transform, search, paging, and the
//! day/date cursors, and folds every gateway failure into state: callers
//! never see an error result, only the `error` field and notifier toasts.

use std::sync::Arc;
use std::time::Duration;

use crate::gateway::{Notifier, NutritionGateway};
use crate::models::{DailyNutrition, Meal};
use crate::navigate;
use crate::paging::{self, IncrementalLoader, DEFAULT_PAGE_SIZE};
use crate::search;

/// User-facing error when a weekday plan fetch fails
const MEALS_LOAD_ERROR: &str = "Error al cargar las comidas";
/// User-facing error when a calendar-date log fetch fails
const DAILY_LOG_LOAD_ERROR: &str = "Error al cargar los datos de nutricion";

const MEAL_ADDED: &str = "Comida agregada";
const MEAL_UPDATED: &str = "Comida actualizada";
const MEAL_REMOVED: &str = "Comida eliminada";

/// Simulated latency for incremental chunk delivery
const DEFAULT_CHUNK_DELAY: Duration = Duration::from_millis(300);

/// How the meal list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Discrete page navigation
    Pagination,
    /// Incremental chunked loading into an accumulator
    Infinite,
}

/// Store tuning knobs
///
/// `chunk_delay` exists so tests can run the incremental loader without
/// real waits.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub page_size: usize,
    pub chunk_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            chunk_delay: DEFAULT_CHUNK_DELAY,
        }
    }
}

/// Which data path currently backs the meal list
///
/// The weekday-plan path and the calendar-log path populate independently;
/// keeping them in one tagged union means `meals()` always projects the
/// active path and a stale cross-path read cannot happen.
#[derive(Debug, Clone)]
enum ActiveView {
    Empty,
    WeekdayPlan { meals: Vec<Meal> },
    CalendarLog { log: DailyNutrition },
}

/// The nutrition diary state container
///
/// Constructed once per session and handed to consumers by reference; all
/// mutation flows through `&mut self`, so there is a single writer by
/// construction. Loading operations are async and settle state before
/// returning; none of them return errors.
pub struct NutritionStore {
    gateway: Arc<dyn NutritionGateway>,
    notifier: Arc<dyn Notifier>,
    config: StoreConfig,

    view: ActiveView,
    loading: bool,
    error: Option<String>,
    search_term: String,
    current_page: usize,
    current_date: String,
    selected_day: String,
    available_days: Vec<String>,
    has_meal_plan: bool,
    view_mode: ViewMode,
    loader: IncrementalLoader<Meal>,
}

impl NutritionStore {
    pub fn new(gateway: Arc<dyn NutritionGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_config(gateway, notifier, StoreConfig::default())
    }

    pub fn with_config(
        gateway: Arc<dyn NutritionGateway>,
        notifier: Arc<dyn Notifier>,
        config: StoreConfig,
    ) -> Self {
        Self {
            gateway,
            notifier,
            config,
            view: ActiveView::Empty,
            loading: false,
            error: None,
            search_term: String::new(),
            current_page: 1,
            current_date: navigate::today(),
            selected_day: String::new(),
            available_days: Vec::new(),
            has_meal_plan: false,
            view_mode: ViewMode::Pagination,
            loader: IncrementalLoader::new(),
        }
    }

    // ========================================================================
    // Read projections
    // ========================================================================

    /// The meal list of the active data path
    pub fn meals(&self) -> &[Meal] {
        match &self.view {
            ActiveView::Empty => &[],
            ActiveView::WeekdayPlan { meals } => meals,
            ActiveView::CalendarLog { log } => &log.meals,
        }
    }

    /// The calendar-date log, when that path is active
    pub fn daily_nutrition(&self) -> Option<&DailyNutrition> {
        match &self.view {
            ActiveView::CalendarLog { log } => Some(log),
            _ => None,
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_date(&self) -> &str {
        &self.current_date
    }

    pub fn selected_day(&self) -> &str {
        &self.selected_day
    }

    pub fn available_days(&self) -> &[String] {
        &self.available_days
    }

    pub fn has_meal_plan(&self) -> bool {
        self.has_meal_plan
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_loading_more(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn has_more(&self) -> bool {
        self.loader.has_more()
    }

    /// Meals matching the current search term
    pub fn filtered_meals(&self) -> Vec<Meal> {
        search::filter_meals(self.meals(), &self.search_term)
    }

    /// Page count over the filtered meal list
    pub fn total_pages(&self) -> usize {
        paging::total_pages(self.filtered_meals().len(), self.config.page_size)
    }

    /// The current page of the filtered meal list
    pub fn paginated_meals(&self) -> Vec<Meal> {
        paging::page_slice(
            &self.filtered_meals(),
            self.current_page,
            self.config.page_size,
        )
    }

    /// What the consumer should render for the active view mode
    ///
    /// In infinite mode the search term is applied to the accumulator at
    /// read time, so a term change is reflected over already-loaded chunks
    /// without a reload.
    pub fn displayed_meals(&self) -> Vec<Meal> {
        match self.view_mode {
            ViewMode::Pagination => self.paginated_meals(),
            ViewMode::Infinite => search::filter_meals(self.loader.accumulated(), &self.search_term),
        }
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Load the weekly plan path: day list, then the selected day's plan
    ///
    /// A failed day-list fetch is swallowed as "no plan exists" with no
    /// user-visible error. A failed plan fetch surfaces `error` and clears
    /// the meal list.
    pub async fn load(&mut self, user_id: &str) {
        self.loading = true;
        self.error = None;

        match self.gateway.available_meal_days().await {
            Ok(days) => {
                self.has_meal_plan = !days.is_empty();
                if days.is_empty() {
                    self.available_days.clear();
                    self.view = ActiveView::Empty;
                    self.finish_load();
                    return;
                }
                if !days.iter().any(|d| d == &self.selected_day) {
                    self.selected_day = days[0].clone();
                }
                self.available_days = days;
                self.fetch_selected_plan(user_id).await;
            }
            Err(e) => {
                // Day-list failure means "no plan", by design not an error
                tracing::warn!("meal day list unavailable: {e}");
                self.available_days.clear();
                self.has_meal_plan = false;
                self.view = ActiveView::Empty;
                self.finish_load();
            }
        }
    }

    /// Fetch and transform the plan for the currently selected weekday
    async fn fetch_selected_plan(&mut self, user_id: &str) {
        self.loading = true;
        match self.gateway.meals_by_day(&self.selected_day).await {
            Ok(Some(plan)) => {
                self.view = ActiveView::WeekdayPlan {
                    meals: plan.to_meals(user_id),
                };
                self.error = None;
            }
            Ok(None) => {
                // Day exists in the list but carries no plan
                self.view = ActiveView::WeekdayPlan { meals: Vec::new() };
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(day = %self.selected_day, "meal plan fetch failed: {e}");
                self.view = ActiveView::WeekdayPlan { meals: Vec::new() };
                self.error = Some(MEALS_LOAD_ERROR.to_string());
            }
        }
        self.finish_load();
    }

    /// Load the calendar-date path for `date`, defaulting to `current_date`
    ///
    /// A failed fetch substitutes a zeroed log for the date so the consumer
    /// always has a renderable shape, and surfaces `error`.
    pub async fn load_by_date(&mut self, user_id: &str, date: Option<&str>) {
        let date = date
            .map(str::to_string)
            .unwrap_or_else(|| self.current_date.clone());
        self.current_date = date.clone();
        self.loading = true;
        self.error = None;

        match self.gateway.daily_nutrition(user_id, &date).await {
            Ok(log) => {
                self.view = ActiveView::CalendarLog { log };
            }
            Err(e) => {
                tracing::warn!(%date, "daily nutrition fetch failed: {e}");
                self.view = ActiveView::CalendarLog {
                    log: DailyNutrition::empty(&date),
                };
                self.error = Some(DAILY_LOG_LOAD_ERROR.to_string());
            }
        }
        self.finish_load();
    }

    /// Common load epilogue: settle the flag, rewind page and accumulator
    fn finish_load(&mut self) {
        self.loading = false;
        self.current_page = 1;
        self.loader.reset();
    }

    // ========================================================================
    // Weekday cursor
    // ========================================================================

    /// Select a weekday and reload its plan
    ///
    /// The selection is accepted unconditionally; only the previous/next
    /// moves are bounds-checked. Two rapid selections race last-write-wins:
    /// in-flight fetches are not cancelled or sequence-guarded.
    pub async fn select_day(&mut self, user_id: &str, day: &str) {
        self.selected_day = day.to_string();
        self.fetch_selected_plan(user_id).await;
    }

    /// Move to the previous available day; no-op at the first
    pub async fn previous_meal_day(&mut self, user_id: &str) {
        if let Some(day) = navigate::previous_label(&self.available_days, &self.selected_day) {
            self.select_day(user_id, &day).await;
        }
    }

    /// Move to the next available day; no-op at the last
    pub async fn next_meal_day(&mut self, user_id: &str) {
        if let Some(day) = navigate::next_label(&self.available_days, &self.selected_day) {
            self.select_day(user_id, &day).await;
        }
    }

    // ========================================================================
    // Calendar cursor
    // ========================================================================

    /// Jump to a calendar date and load its log
    pub async fn set_date(&mut self, user_id: &str, date: &str) {
        self.load_by_date(user_id, Some(date)).await;
    }

    /// Load the previous calendar day; any date is reachable
    pub async fn previous_day(&mut self, user_id: &str) {
        let date = navigate::previous_date(&self.current_date);
        self.load_by_date(user_id, Some(&date)).await;
    }

    /// Load the next calendar day
    pub async fn next_day(&mut self, user_id: &str) {
        let date = navigate::next_date(&self.current_date);
        self.load_by_date(user_id, Some(&date)).await;
    }

    // ========================================================================
    // Local CRUD
    // ========================================================================

    /// Append a meal to the active list (optimistic, no network)
    pub fn add(&mut self, meal: Meal) {
        self.active_meals_mut().push(meal);
        self.notifier.success(MEAL_ADDED);
    }

    /// Replace a meal by id; unknown ids are silently ignored
    pub fn update(&mut self, meal: Meal) {
        let updated = {
            let meals = self.active_meals_mut();
            match meals.iter_mut().find(|m| m.id == meal.id) {
                Some(slot) => {
                    *slot = meal;
                    true
                }
                None => false,
            }
        };
        if updated {
            self.notifier.success(MEAL_UPDATED);
        }
    }

    /// Remove a meal by id; unknown ids are silently ignored
    pub fn remove(&mut self, id: &str) {
        let removed = {
            let meals = self.active_meals_mut();
            let before = meals.len();
            meals.retain(|m| m.id != id);
            meals.len() != before
        };
        if removed {
            // The only mutation that can shrink the filtered set without a
            // page reset, so re-clamp here
            self.clamp_page();
            self.notifier.success(MEAL_REMOVED);
        }
    }

    fn active_meals_mut(&mut self) -> &mut Vec<Meal> {
        if matches!(self.view, ActiveView::Empty) {
            self.view = ActiveView::WeekdayPlan { meals: Vec::new() };
        }
        match &mut self.view {
            ActiveView::WeekdayPlan { meals } => meals,
            ActiveView::CalendarLog { log } => &mut log.meals,
            ActiveView::Empty => unreachable!("empty view promoted above"),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.current_page = 1;
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.current_page = 1;
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Jump to a page; out-of-range requests are silent no-ops, not clamps
    pub fn go_to_page(&mut self, page: usize) {
        if paging::page_in_bounds(page, self.total_pages()) {
            self.current_page = page;
        }
    }

    /// Advance one page; no-op at the last page
    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    /// Go back one page; no-op at page 1
    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.go_to_page(self.current_page - 1);
        }
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        let max = total.max(1);
        if self.current_page > max {
            self.current_page = max;
        }
    }

    // ========================================================================
    // Infinite mode
    // ========================================================================

    /// Switch render modes; entering infinite mode rewinds the accumulator
    /// and immediately loads the first chunk
    pub async fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        if mode == ViewMode::Infinite {
            self.loader.reset();
            self.load_more().await;
        }
    }

    /// Load the next chunk into the accumulator; no-op outside infinite
    /// mode, while a chunk is in flight, or once exhausted
    pub async fn load_more(&mut self) {
        if self.view_mode != ViewMode::Infinite {
            return;
        }
        let source = self.meals().to_vec();
        self.loader
            .load_more(&source, self.config.page_size, self.config.chunk_delay)
            .await;
    }

    // ========================================================================
    // Reset
    // ========================================================================

    /// Restore the constructed-empty state
    pub fn clear(&mut self) {
        self.view = ActiveView::Empty;
        self.loading = false;
        self.error = None;
        self.search_term.clear();
        self.current_page = 1;
        self.current_date = navigate::today();
        self.selected_day.clear();
        self.available_days.clear();
        self.has_meal_plan = false;
        self.view_mode = ViewMode::Pagination;
        self.loader.reset();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
