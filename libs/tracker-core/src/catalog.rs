//! Default exercise catalogue and routine plans.

use crate::types::{RoutineCode, ScoreKind};

/// Exercise inserted on first open of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseSeed {
    pub slug: &'static str,
    pub name: &'static str,
    pub muscle_group: &'static str,
    pub score_kind: ScoreKind,
}

const fn weighted(
    slug: &'static str,
    name: &'static str,
    muscle_group: &'static str,
) -> ExerciseSeed {
    ExerciseSeed {
        slug,
        name,
        muscle_group,
        score_kind: ScoreKind::Weight,
    }
}

const fn bodyweight(
    slug: &'static str,
    name: &'static str,
    muscle_group: &'static str,
) -> ExerciseSeed {
    ExerciseSeed {
        slug,
        name,
        muscle_group,
        score_kind: ScoreKind::Reps,
    }
}

pub const DEFAULT_EXERCISES: &[ExerciseSeed] = &[
    weighted("squat", "Back Squat", "legs"),
    weighted("bench_press", "Bench Press", "chest"),
    weighted("barbell_row", "Barbell Row", "back"),
    weighted("overhead_press", "Overhead Press", "shoulders"),
    weighted("deadlift", "Deadlift", "back"),
    weighted("romanian_deadlift", "Romanian Deadlift", "legs"),
    weighted("incline_dumbbell_press", "Incline Dumbbell Press", "chest"),
    bodyweight("pull_up", "Pull-up", "back"),
    bodyweight("push_up", "Push-up", "chest"),
    bodyweight("dip", "Dip", "arms"),
];

const ROUTINE_A: &[&str] = &["squat", "bench_press", "barbell_row"];
const ROUTINE_B: &[&str] = &["squat", "overhead_press", "deadlift", "pull_up"];
const ROUTINE_C: &[&str] = &["romanian_deadlift", "incline_dumbbell_press", "push_up", "dip"];

/// Exercise slugs for a routine, in the order they are performed.
pub fn routine_plan(code: RoutineCode) -> &'static [&'static str] {
    match code {
        RoutineCode::A => ROUTINE_A,
        RoutineCode::B => ROUTINE_B,
        RoutineCode::C => ROUTINE_C,
        RoutineCode::Weekend => &[],
    }
}

/// Seed entry for a slug.
pub fn seed_for(slug: &str) -> Option<&'static ExerciseSeed> {
    DEFAULT_EXERCISES.iter().find(|s| s.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = DEFAULT_EXERCISES.iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), DEFAULT_EXERCISES.len());
    }

    #[test]
    fn every_planned_exercise_is_seeded() {
        for code in RoutineCode::ALL {
            for slug in routine_plan(code) {
                assert!(seed_for(slug).is_some(), "{slug} missing from catalogue");
            }
        }
    }

    #[test]
    fn weekend_has_no_plan() {
        assert!(routine_plan(RoutineCode::Weekend).is_empty());
    }

    #[test]
    fn bodyweight_moves_are_rep_scored() {
        assert_eq!(seed_for("pull_up").unwrap().score_kind, ScoreKind::Reps);
        assert_eq!(seed_for("squat").unwrap().score_kind, ScoreKind::Weight);
    }
}
