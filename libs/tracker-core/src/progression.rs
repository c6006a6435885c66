//! Set outcome evaluation.

use crate::types::WorkoutSet;

/// Result of evaluating the sets logged for one exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetOutcome {
    pub success: bool,
    /// Weight cached in the summary row.
    pub representative_weight: f64,
}

/// Decides whether a workout hit its target.
pub trait ProgressionScheme: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns `None` for an empty set list.
    fn evaluate(&self, sets: &[WorkoutSet]) -> Option<SetOutcome>;
}

/// Every set must reach a fixed rep count.
#[derive(Debug, Clone, Copy)]
pub struct FixedRepTarget {
    pub target_reps: u32,
}

impl Default for FixedRepTarget {
    fn default() -> Self {
        Self { target_reps: 5 }
    }
}

impl ProgressionScheme for FixedRepTarget {
    fn name(&self) -> &'static str {
        "fixed_rep_target"
    }

    fn evaluate(&self, sets: &[WorkoutSet]) -> Option<SetOutcome> {
        // The first submitted set carries the working weight, not the heaviest one.
        let first = sets.first()?;
        Some(SetOutcome {
            success: sets.iter().all(|s| s.reps >= self.target_reps),
            representative_weight: first.weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(spec: &[(f64, u32)]) -> Vec<WorkoutSet> {
        spec.iter()
            .enumerate()
            .map(|(i, &(weight, reps))| WorkoutSet::new(i as u32 + 1, weight, reps))
            .collect()
    }

    #[test]
    fn all_sets_at_target_is_success() {
        let outcome = FixedRepTarget::default()
            .evaluate(&sets(&[(60.0, 5), (60.0, 5), (60.0, 6)]))
            .unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.representative_weight, 60.0);
    }

    #[test]
    fn one_short_set_fails() {
        let outcome = FixedRepTarget::default()
            .evaluate(&sets(&[(60.0, 5), (60.0, 4), (60.0, 5)]))
            .unwrap();
        assert!(!outcome.success);
    }

    #[test]
    fn representative_weight_is_first_set_not_max() {
        let outcome = FixedRepTarget::default()
            .evaluate(&sets(&[(50.0, 5), (70.0, 5), (65.0, 5)]))
            .unwrap();
        assert_eq!(outcome.representative_weight, 50.0);
    }

    #[test]
    fn empty_sets_have_no_outcome() {
        assert!(FixedRepTarget::default().evaluate(&[]).is_none());
    }
}
