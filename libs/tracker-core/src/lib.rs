//! Core tracker library shared by the local store and its callers.
//!
//! Provides:
//! - Routine calculator (weekday -> routine code, Monday-start week ranges)
//! - Set outcome evaluation for the fixed 5-rep target scheme
//! - Default exercise catalogue and per-routine plans
//! - Shared types (Exercise, WorkoutSet, TodoType, MemoEntry, etc.)

pub mod catalog;
pub mod error;
pub mod progression;
pub mod routine;
pub mod types;

pub use catalog::{routine_plan, seed_for, ExerciseSeed, DEFAULT_EXERCISES};
pub use error::{ParseError, Result};
pub use progression::{FixedRepTarget, ProgressionScheme, SetOutcome};
pub use routine::{routine_for_date, week_range_for_date, WeekRange};
pub use types::{
    Exercise, ExerciseBest, MemoEntry, PersonalBest, RoutineCode, ScoreKind, StudyGoalCheck,
    TodoMarker, TodoType, WorkoutEntry, WorkoutSession, WorkoutSet, WorkoutSummary,
};
