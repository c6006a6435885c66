//! Study goal checklist.

use crate::db::StudyGoalRepository;
use crate::services::Degrade;
use crate::state::Store;
use std::collections::BTreeMap;
use tracker_core::types::StudyGoalCheck;

#[derive(Clone)]
pub struct StudyGoalService {
    store: Store,
}

impl StudyGoalService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Goal id to checked flag.
    pub async fn list(&self) -> BTreeMap<String, bool> {
        let repo = self.store.lock().await;
        repo.list_goals()
            .map(|goals| {
                goals
                    .into_iter()
                    .map(|g| (g.goal_id, g.checked))
                    .collect::<BTreeMap<_, _>>()
            })
            .or_degrade("list_goals")
    }

    pub async fn get(&self, goal_id: &str) -> Option<StudyGoalCheck> {
        let repo = self.store.lock().await;
        repo.get_goal(goal_id).or_degrade("get_goal")
    }

    pub async fn set_checked(&self, goal_id: &str, checked: bool) -> bool {
        let repo = self.store.lock().await;
        repo.set_goal_checked(goal_id, checked)
            .map(|_| true)
            .or_degrade("set_goal_checked")
    }

    pub async fn delete(&self, goal_id: &str) -> bool {
        let repo = self.store.lock().await;
        repo.delete_goal(goal_id).map(|_| true).or_degrade("delete_goal")
    }

    /// Swap in a whole new checklist. On failure the previous one stays as it was.
    pub async fn replace_all(&self, goals: &BTreeMap<String, bool>) -> bool {
        let repo = self.store.lock().await;
        match repo.replace_all_goals(goals) {
            Ok(stored) => {
                tracing::debug!(submitted = goals.len(), stored, "replaced study goals");
                true
            }
            Err(error) => {
                tracing::warn!(%error, "study goal replace rolled back");
                false
            }
        }
    }
}
