pub mod mongo_repository;
pub mod test_repository;

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error;

/// A stored record: integer id, collection name and creation/update
/// timestamps in microseconds.
pub trait Entity {
    const COLLECTION: &'static str;

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn set_timestamps(&mut self, at: i64);
}

#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Assigns the next id, sets `created_at == updated_at`, persists
    /// and returns the stored record. Ids are never reused.
    async fn insert(&self, item: T) -> error::Result<T>;
    async fn find_all(&self) -> error::Result<Vec<T>>;
    /// Applies `patch` as a `$set` (plus a fresh `updated_at`) in a
    /// single statement. `None` when the id does not exist.
    async fn update_by_id(&self, id: i64, patch: Document) -> error::Result<Option<T>>;
    /// `false` when the id does not exist; absence is not an error.
    async fn delete_by_id(&self, id: i64) -> error::Result<bool>;
}

pub type RepositoryObject<T> = Arc<dyn Repository<T>>;
