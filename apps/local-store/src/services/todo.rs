//! Daily todo checklist.

use crate::db::TodoRepository;
use crate::services::Degrade;
use crate::state::Store;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracker_core::types::{TodoMarker, TodoType};

#[derive(Clone)]
pub struct TodoService {
    store: Store,
}

impl TodoService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Check or uncheck a todo. Repeating either direction is a no-op.
    pub async fn set_checked(&self, date: NaiveDate, todo_type: TodoType, checked: bool) -> bool {
        let repo = self.store.lock().await;
        let ok = repo
            .set_todo_checked(date, todo_type, checked)
            .map(|_| true)
            .or_degrade("set_todo_checked");
        tracing::debug!(%date, %todo_type, checked, ok, "toggled todo");
        ok
    }

    pub async fn is_checked(&self, date: NaiveDate, todo_type: TodoType) -> bool {
        let repo = self.store.lock().await;
        repo.is_todo_checked(date, todo_type).or_degrade("is_todo_checked")
    }

    /// Dates on which `todo_type` was checked, oldest first.
    pub async fn list_dates(&self, todo_type: TodoType) -> Vec<NaiveDate> {
        let repo = self.store.lock().await;
        repo.list_todo_dates(todo_type).or_degrade("list_todo_dates")
    }

    pub async fn list_for_date(&self, date: NaiveDate) -> BTreeSet<TodoType> {
        let repo = self.store.lock().await;
        repo.list_todos_for_date(date).or_degrade("list_todos_for_date")
    }

    pub async fn list(&self) -> Vec<TodoMarker> {
        let repo = self.store.lock().await;
        repo.list_todo_markers().or_degrade("list_todo_markers")
    }
}
