//! Memo notes.

use crate::db::MemoRepository;
use crate::services::Degrade;
use crate::state::Store;
use tracker_core::types::MemoEntry;

#[derive(Clone)]
pub struct MemoService {
    store: Store,
}

impl MemoService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All memos, newest first.
    pub async fn list(&self) -> Vec<MemoEntry> {
        let repo = self.store.lock().await;
        repo.list_memos().or_degrade("list_memos")
    }

    pub async fn get(&self, id: i64) -> Option<MemoEntry> {
        let repo = self.store.lock().await;
        repo.get_memo(id).or_degrade("get_memo")
    }

    /// Create (no id) or rewrite a memo. `None` means the save failed.
    pub async fn upsert(&self, id: Option<i64>, content: &str) -> Option<MemoEntry> {
        let repo = self.store.lock().await;
        let saved = repo.upsert_memo(id, content).map(Some).or_degrade("upsert_memo");
        if let Some(memo) = &saved {
            tracing::debug!(id = memo.id, "saved memo");
        }
        saved
    }

    /// Returns `false` only when the delete failed; a missing memo is fine.
    pub async fn delete(&self, id: i64) -> bool {
        let repo = self.store.lock().await;
        repo.delete_memo(id).map(|_| true).or_degrade("delete_memo")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn service() -> MemoService {
        MemoService::new(Store::open_in_memory().unwrap())
    }

    #[tokio::test]
    async fn upsert_get_delete() {
        let memos = service();
        let memo = memos.upsert(None, "buy chalk").await.unwrap();
        assert_eq!(memos.get(memo.id).await, Some(memo.clone()));

        let edited = memos.upsert(Some(memo.id), "buy chalk and tape").await.unwrap();
        assert_eq!(edited.created_at, memo.created_at);
        assert_eq!(memos.list().await, vec![edited]);

        assert!(memos.delete(memo.id).await);
        assert!(memos.delete(memo.id).await);
        assert!(memos.list().await.is_empty());
    }

    #[tokio::test]
    async fn storage_failure_degrades() {
        let memos = service();
        memos
            .store
            .lock()
            .await
            .connection()
            .execute_batch("DROP TABLE memo_entries")
            .unwrap();

        assert!(memos.list().await.is_empty());
        assert_eq!(memos.get(1).await, None);
        assert_eq!(memos.upsert(None, "lost").await, None);
        assert!(!memos.delete(1).await);
    }
}
