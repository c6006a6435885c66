//! Local persistence and aggregation layer for the daily tracker app.
//!
//! Screens call into [`services::Services`]; everything below it is plain
//! SQLite behind one shared [`state::Store`].

pub mod config;
pub mod db;
pub mod logging;
pub mod services;
pub mod state;

use anyhow::Context;

pub use config::TrackerConfig;
pub use db::DbError;
pub use services::{DayPlan, MemoService, Services, StudyGoalService, TodoService, WorkoutService};
pub use state::{SharedStore, Store};
pub use tracker_core::{routine_for_date, week_range_for_date, WeekRange};

/// Load configuration, install logging and open the store held by `shared`.
pub async fn bootstrap(shared: &SharedStore) -> anyhow::Result<Services> {
    let config = TrackerConfig::from_env().context("failed to load tracker configuration")?;
    logging::init_tracing();
    bootstrap_with(&config, shared).await
}

/// Build every service over the store in `shared`, opening it on first use.
///
/// Later calls with the same `shared` reuse the already open connection.
pub async fn bootstrap_with(
    config: &TrackerConfig,
    shared: &SharedStore,
) -> anyhow::Result<Services> {
    let store = shared
        .get_or_open(&config.db_path)
        .await
        .with_context(|| format!("failed to open store at {}", config.db_path.display()))?;

    tracing::info!(day_reset_hour = config.day_reset_hour, "tracker store ready");
    Ok(Services::new(store, config))
}
