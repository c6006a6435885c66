//! Workout logging and personal bests.

use crate::db::date_utils::get_adjusted_today;
use crate::db::{ExerciseRepository, WorkoutRepository};
use crate::services::Degrade;
use crate::state::Store;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracker_core::progression::{FixedRepTarget, ProgressionScheme};
use tracker_core::routine::{routine_for_date, week_range_for_date};
use tracker_core::routine_plan;
use tracker_core::types::{
    Exercise, ExerciseBest, RoutineCode, WorkoutEntry, WorkoutSession, WorkoutSet, WorkoutSummary,
};

const LAST_RESET_HOUR: u32 = 23;

/// What to train on a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub routine_code: RoutineCode,
    pub exercises: Vec<Exercise>,
}

#[derive(Clone)]
pub struct WorkoutService {
    store: Store,
    scheme: Arc<dyn ProgressionScheme>,
    day_reset_hour: u32,
}

impl WorkoutService {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            scheme: Arc::new(FixedRepTarget::default()),
            day_reset_hour: 0,
        }
    }

    /// Hour before which "today" still means the previous day. Clamped to 23.
    pub fn with_day_reset_hour(mut self, hour: u32) -> Self {
        self.day_reset_hour = hour.min(LAST_RESET_HOUR);
        self
    }

    pub fn today(&self) -> NaiveDate {
        get_adjusted_today(self.day_reset_hour)
    }

    /// Record the sets for one exercise and refresh its summary.
    ///
    /// Re-saving the same (date, routine, exercise) replaces the earlier sets.
    /// Returns `false` if nothing was written.
    pub async fn save_session(
        &self,
        routine_code: RoutineCode,
        exercise_id: i64,
        sets: &[WorkoutSet],
        date: Option<NaiveDate>,
    ) -> bool {
        let date = date.unwrap_or_else(|| self.today());
        let repo = self.store.lock().await;

        match repo.save_session(routine_code, exercise_id, sets, date, self.scheme.as_ref()) {
            Ok(saved) => {
                tracing::debug!(
                    session_id = saved.session_id,
                    exercise_id,
                    %date,
                    %routine_code,
                    sets = sets.len(),
                    success = saved.outcome.success,
                    "saved workout"
                );
                true
            }
            Err(error) => {
                tracing::warn!(exercise_id, %date, %routine_code, %error, "workout save failed");
                false
            }
        }
    }

    /// Personal bests for the given slugs, in the same order.
    pub async fn list_exercise_bests(&self, slugs: &[&str]) -> Vec<ExerciseBest> {
        let repo = self.store.lock().await;
        repo.list_exercise_bests(slugs).or_degrade("list_exercise_bests")
    }

    pub async fn session_for(
        &self,
        date: NaiveDate,
        routine_code: RoutineCode,
    ) -> Option<WorkoutSession> {
        let repo = self.store.lock().await;
        repo.get_session(date, routine_code).or_degrade("get_session")
    }

    pub async fn entries_for(
        &self,
        session_id: i64,
        exercise_id: Option<i64>,
    ) -> Vec<WorkoutEntry> {
        let repo = self.store.lock().await;
        repo.get_entries(session_id, exercise_id).or_degrade("get_entries")
    }

    pub async fn summary_for(&self, exercise_id: i64) -> Option<WorkoutSummary> {
        let repo = self.store.lock().await;
        repo.get_summary(exercise_id).or_degrade("get_summary")
    }

    pub async fn summaries(&self) -> Vec<WorkoutSummary> {
        let repo = self.store.lock().await;
        repo.list_summaries().or_degrade("list_summaries")
    }

    /// Sessions in the Monday-to-Sunday week containing `date`.
    pub async fn sessions_for_week(&self, date: NaiveDate) -> Vec<WorkoutSession> {
        let week = week_range_for_date(date);
        let repo = self.store.lock().await;
        repo.list_sessions_between(week.monday, week.sunday)
            .or_degrade("list_sessions_between")
    }

    pub async fn exercises(&self) -> Vec<Exercise> {
        let repo = self.store.lock().await;
        repo.list_exercises().or_degrade("list_exercises")
    }

    pub async fn exercise_by_slug(&self, slug: &str) -> Option<Exercise> {
        let repo = self.store.lock().await;
        repo.get_exercise_by_slug(slug).or_degrade("get_exercise_by_slug")
    }

    /// Routine for `date` and its exercises in training order.
    pub async fn day_plan(&self, date: NaiveDate) -> DayPlan {
        let routine_code = routine_for_date(date);
        let slugs = routine_plan(routine_code);

        let catalogue = self.exercises().await;
        let exercises = slugs
            .iter()
            .filter_map(|slug| catalogue.iter().find(|e| e.slug == *slug).cloned())
            .collect();

        DayPlan {
            date,
            routine_code,
            exercises,
        }
    }
}
