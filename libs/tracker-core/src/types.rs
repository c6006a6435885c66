//! Core types for the tracker.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Workout program label derived from the weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutineCode {
    A,
    B,
    C,
    #[serde(rename = "WEEKEND")]
    Weekend,
}

impl RoutineCode {
    pub const ALL: [RoutineCode; 4] = [Self::A, Self::B, Self::C, Self::Weekend];

    /// Stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Weekend => "WEEKEND",
        }
    }

    /// Whether this routine is a training day.
    pub fn is_training_day(&self) -> bool {
        !matches!(self, Self::Weekend)
    }
}

impl FromStr for RoutineCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "WEEKEND" => Ok(Self::Weekend),
            other => Err(ParseError::UnknownRoutineCode(other.to_string())),
        }
    }
}

impl fmt::Display for RoutineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily checklist category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoType {
    Study,
    Algorithm,
    Bodyweight,
    Reading,
    Running,
    Health,
}

impl TodoType {
    pub const ALL: [TodoType; 6] = [
        Self::Study,
        Self::Algorithm,
        Self::Bodyweight,
        Self::Reading,
        Self::Running,
        Self::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Algorithm => "algorithm",
            Self::Bodyweight => "bodyweight",
            Self::Reading => "reading",
            Self::Running => "running",
            Self::Health => "health",
        }
    }
}

impl FromStr for TodoType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::UnknownTodoType(s.to_string()))
    }
}

impl fmt::Display for TodoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an exercise's personal best is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    /// Heaviest weight ever lifted.
    Weight,
    /// Most reps in a single set (bodyweight movements).
    Reps,
}

impl Default for ScoreKind {
    fn default() -> Self {
        Self::Weight
    }
}

impl ScoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Reps => "reps",
        }
    }
}

impl FromStr for ScoreKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight" => Ok(Self::Weight),
            "reps" => Ok(Self::Reps),
            other => Err(ParseError::UnknownScoreKind(other.to_string())),
        }
    }
}

/// Reference exercise from the seeded catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub muscle_group: String,
    pub score_kind: ScoreKind,
}

/// A single set as submitted by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub set_index: u32,
    pub weight: f64,
    pub reps: u32,
}

impl WorkoutSet {
    pub fn new(set_index: u32, weight: f64, reps: u32) -> Self {
        Self {
            set_index,
            weight,
            reps,
        }
    }
}

/// One workout per (date, routine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: i64,
    pub date: NaiveDate,
    pub routine_code: RoutineCode,
}

/// Persisted set belonging to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub session_id: i64,
    pub exercise_id: i64,
    pub set_index: u32,
    pub weight: f64,
    pub reps: u32,
}

/// Cached outcome of the most recent save for an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub exercise_id: i64,
    pub last_date: NaiveDate,
    pub last_weight: f64,
    pub last_success: bool,
    pub updated_at: DateTime<Utc>,
}

/// Best historical value for an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PersonalBest {
    Weight(f64),
    Reps(u32),
}

/// Exercise metadata joined with its personal best.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseBest {
    pub exercise_id: i64,
    pub slug: String,
    pub name: String,
    pub muscle_group: String,
    pub score_kind: ScoreKind,
    /// `None` when the exercise has no logged sets.
    pub best: Option<PersonalBest>,
}

/// A checked todo for one day. Absence means unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoMarker {
    pub date: NaiveDate,
    pub todo_type: TodoType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGoalCheck {
    pub goal_id: String,
    pub checked: bool,
    pub updated_at: DateTime<Utc>,
}

/// Free-form note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoEntry {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn routine_code_round_trips_through_storage_form() {
        for code in RoutineCode::ALL {
            assert_eq!(code.as_str().parse::<RoutineCode>(), Ok(code));
        }
        assert_eq!(
            "D".parse::<RoutineCode>(),
            Err(ParseError::UnknownRoutineCode("D".to_string()))
        );
    }

    #[test]
    fn weekend_is_not_a_training_day() {
        assert!(RoutineCode::A.is_training_day());
        assert!(!RoutineCode::Weekend.is_training_day());
    }

    #[test]
    fn todo_type_parses_lowercase_names() {
        assert_eq!("running".parse::<TodoType>(), Ok(TodoType::Running));
        assert!("Running".parse::<TodoType>().is_err());
    }

    #[test]
    fn personal_best_serializes_with_kind_tag() {
        let json = serde_json::to_string(&PersonalBest::Reps(12)).unwrap();
        assert_eq!(json, r#"{"kind":"reps","value":12}"#);
        let json = serde_json::to_string(&RoutineCode::Weekend).unwrap();
        assert_eq!(json, r#""WEEKEND""#);
    }
}
