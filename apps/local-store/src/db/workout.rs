//! Workout sessions, entries and the personal-best summary cache.

use crate::db::date_utils::{format_date, now_timestamp, parse_date, parse_timestamp};
use crate::db::error::DbError;
use crate::db::repository::{Result, SqliteRepository};
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::collections::HashMap;
use tracker_core::progression::{ProgressionScheme, SetOutcome};
use tracker_core::types::{
    Exercise, ExerciseBest, PersonalBest, RoutineCode, ScoreKind, WorkoutEntry, WorkoutSession,
    WorkoutSet, WorkoutSummary,
};

/// Repository for the exercise catalogue.
pub trait ExerciseRepository {
    fn list_exercises(&self) -> Result<Vec<Exercise>>;
    fn get_exercise_by_slug(&self, slug: &str) -> Result<Option<Exercise>>;
}

/// What a successful session save wrote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedSession {
    pub session_id: i64,
    pub outcome: SetOutcome,
}

/// Repository for workout logging.
pub trait WorkoutRepository {
    /// Upsert the session, replace the exercise's entries and refresh its summary.
    fn save_session(
        &self,
        routine_code: RoutineCode,
        exercise_id: i64,
        sets: &[WorkoutSet],
        date: NaiveDate,
        scheme: &dyn ProgressionScheme,
    ) -> Result<SavedSession>;
    fn get_session(
        &self,
        date: NaiveDate,
        routine_code: RoutineCode,
    ) -> Result<Option<WorkoutSession>>;
    fn list_sessions_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<WorkoutSession>>;
    fn get_entries(&self, session_id: i64, exercise_id: Option<i64>) -> Result<Vec<WorkoutEntry>>;
    fn get_summary(&self, exercise_id: i64) -> Result<Option<WorkoutSummary>>;
    fn list_summaries(&self) -> Result<Vec<WorkoutSummary>>;
    /// Best per exercise, in the order of `slugs`.
    fn list_exercise_bests(&self, slugs: &[&str]) -> Result<Vec<ExerciseBest>>;
}

/// Raw exercise row before the score kind is decoded.
struct ExerciseRow {
    id: i64,
    slug: String,
    name: String,
    muscle_group: String,
    score_type: String,
}

impl ExerciseRow {
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            slug: row.get(1)?,
            name: row.get(2)?,
            muscle_group: row.get(3)?,
            score_type: row.get(4)?,
        })
    }

    fn into_exercise(self) -> Result<Exercise> {
        Ok(Exercise {
            id: self.id,
            score_kind: self.score_type.parse()?,
            slug: self.slug,
            name: self.name,
            muscle_group: self.muscle_group,
        })
    }
}

impl ExerciseRepository for SqliteRepository {
    fn list_exercises(&self) -> Result<Vec<Exercise>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, slug, name, muscle_group, score_type FROM exercises ORDER BY id")?;

        let rows = stmt
            .query_map([], ExerciseRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(ExerciseRow::into_exercise).collect()
    }

    fn get_exercise_by_slug(&self, slug: &str) -> Result<Option<Exercise>> {
        self.conn
            .query_row(
                "SELECT id, slug, name, muscle_group, score_type FROM exercises WHERE slug = ?1",
                params![slug],
                ExerciseRow::from_row,
            )
            .optional()?
            .map(ExerciseRow::into_exercise)
            .transpose()
    }
}

fn find_or_create_session(conn: &Connection, date: &str, routine_code: RoutineCode) -> Result<i64> {
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM workout_sessions WHERE date = ?1 AND routine_code = ?2",
            params![date, routine_code.as_str()],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO workout_sessions (date, routine_code) VALUES (?1, ?2)",
        params![date, routine_code.as_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

impl SqliteRepository {
    fn row_to_session(row: &rusqlite::Row) -> rusqlite::Result<(i64, String, String)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    }

    fn into_session((id, date, routine_code): (i64, String, String)) -> Result<WorkoutSession> {
        Ok(WorkoutSession {
            id,
            date: parse_date(&date)?,
            routine_code: routine_code.parse()?,
        })
    }

    fn row_to_summary(row: &rusqlite::Row) -> rusqlite::Result<(i64, String, f64, bool, String)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
    }

    fn into_summary(row: (i64, String, f64, bool, String)) -> Result<WorkoutSummary> {
        let (exercise_id, last_date, last_weight, last_success, updated_at) = row;
        Ok(WorkoutSummary {
            exercise_id,
            last_date: parse_date(&last_date)?,
            last_weight,
            last_success,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }

    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<WorkoutEntry> {
        Ok(WorkoutEntry {
            session_id: row.get(0)?,
            exercise_id: row.get(1)?,
            set_index: row.get(2)?,
            weight: row.get(3)?,
            reps: row.get(4)?,
        })
    }
}

impl WorkoutRepository for SqliteRepository {
    fn save_session(
        &self,
        routine_code: RoutineCode,
        exercise_id: i64,
        sets: &[WorkoutSet],
        date: NaiveDate,
        scheme: &dyn ProgressionScheme,
    ) -> Result<SavedSession> {
        let outcome = scheme
            .evaluate(sets)
            .ok_or_else(|| DbError::InvalidData("cannot save a session without sets".to_string()))?;
        let date = format_date(date);

        self.in_transaction("save_session", |conn| {
            let session_id = find_or_create_session(conn, &date, routine_code)?;

            conn.execute(
                "DELETE FROM workout_entries WHERE session_id = ?1 AND exercise_id = ?2",
                params![session_id, exercise_id],
            )?;

            let mut insert = conn.prepare(
                "INSERT INTO workout_entries (session_id, exercise_id, set_index, weight, reps)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for set in sets {
                insert.execute(params![
                    session_id,
                    exercise_id,
                    set.set_index,
                    set.weight,
                    set.reps
                ])?;
            }

            conn.execute(
                "INSERT INTO workout_summaries (exercise_id, last_date, last_weight, last_success, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(exercise_id) DO UPDATE SET
                    last_date = excluded.last_date,
                    last_weight = excluded.last_weight,
                    last_success = excluded.last_success,
                    updated_at = excluded.updated_at",
                params![
                    exercise_id,
                    date,
                    outcome.representative_weight,
                    outcome.success,
                    now_timestamp()
                ],
            )?;

            Ok(SavedSession {
                session_id,
                outcome,
            })
        })
    }

    fn get_session(
        &self,
        date: NaiveDate,
        routine_code: RoutineCode,
    ) -> Result<Option<WorkoutSession>> {
        self.conn
            .query_row(
                "SELECT id, date, routine_code FROM workout_sessions WHERE date = ?1 AND routine_code = ?2",
                params![format_date(date), routine_code.as_str()],
                Self::row_to_session,
            )
            .optional()?
            .map(Self::into_session)
            .transpose()
    }

    fn list_sessions_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<WorkoutSession>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, routine_code FROM workout_sessions
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date, routine_code",
        )?;

        let rows = stmt
            .query_map(params![format_date(from), format_date(to)], Self::row_to_session)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(Self::into_session).collect()
    }

    fn get_entries(&self, session_id: i64, exercise_id: Option<i64>) -> Result<Vec<WorkoutEntry>> {
        let sql = match exercise_id {
            Some(_) => "SELECT session_id, exercise_id, set_index, weight, reps FROM workout_entries
                WHERE session_id = ?1 AND exercise_id = ?2
                ORDER BY set_index",
            None => "SELECT session_id, exercise_id, set_index, weight, reps FROM workout_entries
                WHERE session_id = ?1
                ORDER BY exercise_id, set_index",
        };

        let mut stmt = self.conn.prepare(sql)?;
        let entries = if let Some(exercise_id) = exercise_id {
            stmt.query_map(params![session_id, exercise_id], Self::row_to_entry)?
        } else {
            stmt.query_map(params![session_id], Self::row_to_entry)?
        };

        entries.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn get_summary(&self, exercise_id: i64) -> Result<Option<WorkoutSummary>> {
        self.conn
            .query_row(
                "SELECT exercise_id, last_date, last_weight, last_success, updated_at
                 FROM workout_summaries WHERE exercise_id = ?1",
                params![exercise_id],
                Self::row_to_summary,
            )
            .optional()?
            .map(Self::into_summary)
            .transpose()
    }

    fn list_summaries(&self) -> Result<Vec<WorkoutSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT exercise_id, last_date, last_weight, last_success, updated_at
             FROM workout_summaries ORDER BY exercise_id",
        )?;

        let rows = stmt
            .query_map([], Self::row_to_summary)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(Self::into_summary).collect()
    }

    fn list_exercise_bests(&self, slugs: &[&str]) -> Result<Vec<ExerciseBest>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = slugs.iter().map(|_| "?").collect::<Vec<_>>().join(",");
        let sql = format!(
            "SELECT e.id, e.slug, e.name, e.muscle_group, e.score_type,
                    MAX(we.weight) AS best_weight, MAX(we.reps) AS best_reps
             FROM exercises e
             LEFT JOIN workout_entries we ON we.exercise_id = e.id
             WHERE e.slug IN ({placeholders})
             GROUP BY e.id"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(slugs.iter()), |row| {
                Ok((
                    ExerciseRow::from_row(row)?,
                    row.get::<_, Option<f64>>(5)?,
                    row.get::<_, Option<u32>>(6)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut by_slug = HashMap::with_capacity(rows.len());
        for (exercise, best_weight, best_reps) in rows {
            let exercise = exercise.into_exercise()?;
            let best = match exercise.score_kind {
                ScoreKind::Reps => best_reps.map(PersonalBest::Reps),
                ScoreKind::Weight => best_weight.map(PersonalBest::Weight),
            };
            by_slug.insert(
                exercise.slug.clone(),
                ExerciseBest {
                    exercise_id: exercise.id,
                    slug: exercise.slug,
                    name: exercise.name,
                    muscle_group: exercise.muscle_group,
                    score_kind: exercise.score_kind,
                    best,
                },
            );
        }

        // Caller's priority order; a repeated slug is reported once.
        Ok(slugs.iter().filter_map(|slug| by_slug.remove(*slug)).collect())
    }
}
