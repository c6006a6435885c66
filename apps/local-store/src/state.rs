//! Shared store handle.

use crate::db::{DbError, SqliteRepository};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, OnceCell};

/// The single connection every service shares.
///
/// Cloning is cheap and yields the same underlying connection.
#[derive(Clone)]
pub struct Store {
    repository: Arc<Mutex<SqliteRepository>>,
}

impl Store {
    pub fn new(repository: SqliteRepository) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
        }
    }

    /// Open or create the store file and apply the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        SqliteRepository::open(path).map(Self::new)
    }

    pub fn open_in_memory() -> Result<Self, DbError> {
        SqliteRepository::open_in_memory().map(Self::new)
    }

    /// Wait for exclusive use of the connection.
    pub async fn lock(&self) -> MutexGuard<'_, SqliteRepository> {
        self.repository.lock().await
    }

    /// Whether both handles point at the same connection.
    pub fn same_handle(&self, other: &Store) -> bool {
        Arc::ptr_eq(&self.repository, &other.repository)
    }
}

/// Lazily opened store, initialized at most once.
#[derive(Default)]
pub struct SharedStore {
    cell: OnceCell<Store>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the store on first call; later calls reuse it regardless of `path`.
    pub async fn get_or_open(&self, path: &Path) -> Result<Store, DbError> {
        self.cell
            .get_or_try_init(|| async { Store::open(path) })
            .await
            .cloned()
    }

    pub fn get(&self) -> Option<&Store> {
        self.cell.get()
    }
}
