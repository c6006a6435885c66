//! Local SQLite database operations.

pub mod date_utils;
pub mod error;
pub mod repository;
pub mod schema;
pub mod workout;

pub use error::DbError;
pub use repository::{MemoRepository, SqliteRepository, StudyGoalRepository, TodoRepository};
pub use workout::{ExerciseRepository, SavedSession, WorkoutRepository};
