//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for the local store.
pub const SCHEMA: &str = r#"
-- Exercise catalogue (seeded)
CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    slug TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    muscle_group TEXT NOT NULL,
    score_type TEXT NOT NULL DEFAULT 'weight'
);

-- One session per day and routine
CREATE TABLE IF NOT EXISTS workout_sessions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    routine_code TEXT NOT NULL,
    UNIQUE (date, routine_code)
);

-- Logged sets
CREATE TABLE IF NOT EXISTS workout_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id INTEGER NOT NULL REFERENCES workout_sessions(id) ON DELETE CASCADE,
    exercise_id INTEGER NOT NULL REFERENCES exercises(id),
    set_index INTEGER NOT NULL,
    weight REAL NOT NULL,
    reps INTEGER NOT NULL
);

-- Latest outcome per exercise, written only by the session save path
CREATE TABLE IF NOT EXISTS workout_summaries (
    exercise_id INTEGER PRIMARY KEY REFERENCES exercises(id),
    last_date TEXT NOT NULL,
    last_weight REAL NOT NULL,
    last_success INTEGER NOT NULL,
    updated_at TEXT NOT NULL
);

-- Checked daily todos (row present = checked)
CREATE TABLE IF NOT EXISTS today_todo_dates (
    date TEXT NOT NULL,
    todo_type TEXT NOT NULL,
    created_at TEXT NOT NULL,
    UNIQUE (date, todo_type)
);

-- Study goal checklist
CREATE TABLE IF NOT EXISTS study_goals (
    goal_id TEXT PRIMARY KEY,
    checked INTEGER NOT NULL DEFAULT 0,
    updated_at TEXT NOT NULL
);

-- Notes
CREATE TABLE IF NOT EXISTS memo_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_entries_session_exercise ON workout_entries(session_id, exercise_id);
CREATE INDEX IF NOT EXISTS idx_entries_exercise ON workout_entries(exercise_id);
CREATE INDEX IF NOT EXISTS idx_sessions_date ON workout_sessions(date);
CREATE INDEX IF NOT EXISTS idx_todo_type ON today_todo_dates(todo_type);
CREATE INDEX IF NOT EXISTS idx_memo_created ON memo_entries(created_at);
"#;

/// Connection-level settings applied on every open.
pub const PRAGMAS: &str = r#"
PRAGMA foreign_keys = ON;
"#;

/// Seed one catalogue exercise if its slug is not present yet.
pub const SEED_EXERCISE: &str =
    "INSERT OR IGNORE INTO exercises (slug, name, muscle_group, score_type) VALUES (?1, ?2, ?3, ?4)";

/// Record the schema version if not recorded yet.
pub const RECORD_SCHEMA_VERSION: &str = "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)";
