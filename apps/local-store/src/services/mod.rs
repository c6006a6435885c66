//! Async entry points used by the app's screens.
//!
//! Services never surface storage errors. Reads fall back to an empty value,
//! writes report `false` or `None`, and the underlying error is logged.

pub mod goals;
pub mod memo;
pub mod todo;
pub mod workout;

pub use goals::StudyGoalService;
pub use memo::MemoService;
pub use todo::TodoService;
pub use workout::{DayPlan, WorkoutService};

use crate::config::TrackerConfig;
use crate::db::DbError;
use crate::state::Store;

/// Every service built over one store.
#[derive(Clone)]
pub struct Services {
    pub store: Store,
    pub memos: MemoService,
    pub todos: TodoService,
    pub goals: StudyGoalService,
    pub workouts: WorkoutService,
}

impl Services {
    pub fn new(store: Store, config: &TrackerConfig) -> Self {
        Self {
            memos: MemoService::new(store.clone()),
            todos: TodoService::new(store.clone()),
            goals: StudyGoalService::new(store.clone()),
            workouts: WorkoutService::new(store.clone()).with_day_reset_hour(config.day_reset_hour),
            store,
        }
    }
}

/// Turn a repository result into the degraded value callers see.
pub(crate) trait Degrade<T> {
    fn or_degrade(self, operation: &str) -> T;
}

impl<T: Default> Degrade<T> for Result<T, DbError> {
    fn or_degrade(self, operation: &str) -> T {
        self.unwrap_or_else(|error| {
            tracing::warn!(operation, %error, "storage call failed");
            T::default()
        })
    }
}
