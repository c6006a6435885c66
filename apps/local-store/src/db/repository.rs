//! Repository pattern for database access.

use crate::db::date_utils::{format_date, now_timestamp, parse_date, parse_timestamp};
use crate::db::error::DbError;
use crate::db::schema::{PRAGMAS, RECORD_SCHEMA_VERSION, SCHEMA, SCHEMA_VERSION, SEED_EXERCISE};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracker_core::types::{MemoEntry, StudyGoalCheck, TodoMarker, TodoType};
use tracker_core::DEFAULT_EXERCISES;

pub(crate) type Result<T> = std::result::Result<T, DbError>;

/// Repository for free-form notes.
pub trait MemoRepository {
    /// Newest first.
    fn list_memos(&self) -> Result<Vec<MemoEntry>>;
    fn get_memo(&self, id: i64) -> Result<Option<MemoEntry>>;
    /// Insert when `id` is `None`, otherwise update content in place.
    fn upsert_memo(&self, id: Option<i64>, content: &str) -> Result<MemoEntry>;
    /// Returns whether a row was removed.
    fn delete_memo(&self, id: i64) -> Result<bool>;
}

/// Repository for daily todo markers. A row means "checked".
pub trait TodoRepository {
    fn set_todo_checked(&self, date: NaiveDate, todo_type: TodoType, checked: bool) -> Result<()>;
    fn is_todo_checked(&self, date: NaiveDate, todo_type: TodoType) -> Result<bool>;
    fn list_todo_dates(&self, todo_type: TodoType) -> Result<Vec<NaiveDate>>;
    fn list_todos_for_date(&self, date: NaiveDate) -> Result<BTreeSet<TodoType>>;
    fn list_todo_markers(&self) -> Result<Vec<TodoMarker>>;
}

/// Repository for the study goal checklist.
pub trait StudyGoalRepository {
    fn list_goals(&self) -> Result<Vec<StudyGoalCheck>>;
    fn get_goal(&self, goal_id: &str) -> Result<Option<StudyGoalCheck>>;
    fn set_goal_checked(&self, goal_id: &str, checked: bool) -> Result<()>;
    fn delete_goal(&self, goal_id: &str) -> Result<()>;
    /// Replace the whole checklist in one transaction. Only checked goals get a row.
    fn replace_all_goals(&self, goals: &BTreeMap<String, bool>) -> Result<usize>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    pub(crate) conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating the file and its directory if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |reason: String| DbError::StorageUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| unavailable(e.to_string()))?;
        }

        let conn = Connection::open(path).map_err(|e| unavailable(e.to_string()))?;
        let repo = Self { conn };
        repo.initialize().map_err(|e| unavailable(e.to_string()))?;

        tracing::info!(path = %path.display(), version = SCHEMA_VERSION, "opened local store");
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(PRAGMAS)?;
        self.conn.execute_batch(SCHEMA)?;
        self.conn.execute(RECORD_SCHEMA_VERSION, params![SCHEMA_VERSION])?;

        let seeded = self.seed_exercises()?;
        if seeded > 0 {
            tracing::info!(count = seeded, "seeded exercise catalogue");
        }
        Ok(())
    }

    /// Insert catalogue exercises whose slug is not present yet.
    fn seed_exercises(&self) -> Result<usize> {
        self.in_transaction("seed_exercises", |conn| {
            let mut stmt = conn.prepare(SEED_EXERCISE)?;
            let mut inserted = 0;
            for seed in DEFAULT_EXERCISES {
                inserted += stmt.execute(params![
                    seed.slug,
                    seed.name,
                    seed.muscle_group,
                    seed.score_kind.as_str()
                ])?;
            }
            Ok(inserted)
        })
    }

    /// Schema version recorded in the store.
    pub fn schema_version(&self) -> Result<i32> {
        self.conn
            .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |row| {
                row.get(0)
            })
            .map_err(Into::into)
    }

    /// Run `body` inside a transaction.
    ///
    /// Any error rolls the whole body back and is reported as `TransactionAborted`.
    pub(crate) fn in_transaction<T>(
        &self,
        operation: &str,
        body: impl FnOnce(&Connection) -> Result<T>,
    ) -> Result<T> {
        let tx = self.conn.unchecked_transaction()?;
        // Dropping `tx` without commit rolls back.
        let value = body(&tx).map_err(|e| aborted(operation, e))?;
        tx.commit().map_err(|e| aborted(operation, e.into()))?;
        Ok(value)
    }

    /// Raw connection access for failure-injection tests.
    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn aborted(operation: &str, error: DbError) -> DbError {
    match error {
        DbError::TransactionAborted { .. } => error,
        other => DbError::TransactionAborted {
            operation: operation.to_string(),
            reason: other.to_string(),
        },
    }
}

impl SqliteRepository {
    fn row_to_memo(row: &rusqlite::Row) -> rusqlite::Result<(i64, String, String, String)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    }

    fn into_memo(
        (id, content, created_at, updated_at): (i64, String, String, String),
    ) -> Result<MemoEntry> {
        Ok(MemoEntry {
            id,
            content,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }
}

impl MemoRepository for SqliteRepository {
    fn list_memos(&self) -> Result<Vec<MemoEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, content, created_at, updated_at FROM memo_entries
             ORDER BY created_at DESC, id DESC",
        )?;

        let rows = stmt
            .query_map([], Self::row_to_memo)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(Self::into_memo).collect()
    }

    fn get_memo(&self, id: i64) -> Result<Option<MemoEntry>> {
        self.conn
            .query_row(
                "SELECT id, content, created_at, updated_at FROM memo_entries WHERE id = ?1",
                params![id],
                Self::row_to_memo,
            )
            .optional()?
            .map(Self::into_memo)
            .transpose()
    }

    fn upsert_memo(&self, id: Option<i64>, content: &str) -> Result<MemoEntry> {
        let now = now_timestamp();
        let id = match id {
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO memo_entries (id, content, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)
                     ON CONFLICT(id) DO UPDATE SET content = excluded.content, updated_at = excluded.updated_at",
                    params![id, content, now],
                )?;
                id
            }
            None => {
                self.conn.execute(
                    "INSERT INTO memo_entries (content, created_at, updated_at) VALUES (?1, ?2, ?2)",
                    params![content, now],
                )?;
                self.conn.last_insert_rowid()
            }
        };

        self.get_memo(id)?
            .ok_or_else(|| DbError::InvalidData(format!("memo {id} missing after upsert")))
    }

    fn delete_memo(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM memo_entries WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}

impl TodoRepository for SqliteRepository {
    fn set_todo_checked(&self, date: NaiveDate, todo_type: TodoType, checked: bool) -> Result<()> {
        if checked {
            self.conn.execute(
                "INSERT OR IGNORE INTO today_todo_dates (date, todo_type, created_at) VALUES (?1, ?2, ?3)",
                params![format_date(date), todo_type.as_str(), now_timestamp()],
            )?;
        } else {
            self.conn.execute(
                "DELETE FROM today_todo_dates WHERE date = ?1 AND todo_type = ?2",
                params![format_date(date), todo_type.as_str()],
            )?;
        }
        Ok(())
    }

    fn is_todo_checked(&self, date: NaiveDate, todo_type: TodoType) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM today_todo_dates WHERE date = ?1 AND todo_type = ?2)",
                params![format_date(date), todo_type.as_str()],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }

    fn list_todo_dates(&self, todo_type: TodoType) -> Result<Vec<NaiveDate>> {
        let mut stmt = self
            .conn
            .prepare("SELECT date FROM today_todo_dates WHERE todo_type = ?1 ORDER BY date")?;

        let dates = stmt
            .query_map(params![todo_type.as_str()], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        dates.iter().map(|d| parse_date(d)).collect()
    }

    fn list_todos_for_date(&self, date: NaiveDate) -> Result<BTreeSet<TodoType>> {
        let mut stmt = self
            .conn
            .prepare("SELECT todo_type FROM today_todo_dates WHERE date = ?1")?;

        let types = stmt
            .query_map(params![format_date(date)], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        types
            .iter()
            .map(|t| t.parse::<TodoType>().map_err(Into::into))
            .collect()
    }

    fn list_todo_markers(&self) -> Result<Vec<TodoMarker>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, todo_type, created_at FROM today_todo_dates ORDER BY date, todo_type",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(date, todo_type, created_at)| -> Result<TodoMarker> {
                Ok(TodoMarker {
                    date: parse_date(&date)?,
                    todo_type: todo_type.parse()?,
                    created_at: parse_timestamp(&created_at)?,
                })
            })
            .collect()
    }
}

impl SqliteRepository {
    fn row_to_goal(row: &rusqlite::Row) -> rusqlite::Result<(String, bool, String)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    }

    fn into_goal((goal_id, checked, updated_at): (String, bool, String)) -> Result<StudyGoalCheck> {
        Ok(StudyGoalCheck {
            goal_id,
            checked,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }
}

impl StudyGoalRepository for SqliteRepository {
    fn list_goals(&self) -> Result<Vec<StudyGoalCheck>> {
        let mut stmt = self
            .conn
            .prepare("SELECT goal_id, checked, updated_at FROM study_goals ORDER BY goal_id")?;

        let rows = stmt
            .query_map([], Self::row_to_goal)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(Self::into_goal).collect()
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<StudyGoalCheck>> {
        self.conn
            .query_row(
                "SELECT goal_id, checked, updated_at FROM study_goals WHERE goal_id = ?1",
                params![goal_id],
                Self::row_to_goal,
            )
            .optional()?
            .map(Self::into_goal)
            .transpose()
    }

    fn set_goal_checked(&self, goal_id: &str, checked: bool) -> Result<()> {
        self.conn.execute(
            "INSERT INTO study_goals (goal_id, checked, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(goal_id) DO UPDATE SET checked = excluded.checked, updated_at = excluded.updated_at",
            params![goal_id, checked, now_timestamp()],
        )?;
        Ok(())
    }

    fn delete_goal(&self, goal_id: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM study_goals WHERE goal_id = ?1", params![goal_id])?;
        Ok(())
    }

    fn replace_all_goals(&self, goals: &BTreeMap<String, bool>) -> Result<usize> {
        let now = now_timestamp();
        self.in_transaction("replace_all_goals", |conn| {
            conn.execute("DELETE FROM study_goals", [])?;

            let mut stmt = conn.prepare(
                "INSERT INTO study_goals (goal_id, checked, updated_at) VALUES (?1, 1, ?2)",
            )?;
            let mut inserted = 0;
            for goal_id in goals.iter().filter(|(_, checked)| **checked).map(|(id, _)| id) {
                inserted += stmt.execute(params![goal_id, now])?;
            }
            Ok(inserted)
        })
    }
}
