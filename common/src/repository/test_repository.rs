use std::sync::{
    atomic::{AtomicI64, Ordering},
    Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::{self, Bson, Document};
use serde::{de::DeserializeOwned, Serialize};

use crate::error;

use super::{Entity, Repository};

/// In-memory stand-in for `MongoRepository`, used to drive handlers
/// in tests without a running database.
pub struct TestRepository<T> {
    _t: std::marker::PhantomData<T>,
    db: Mutex<Vec<Bson>>,
    next_id: AtomicI64,
}

impl<T> TestRepository<T> {
    pub fn new() -> Self {
        Self {
            _t: std::marker::PhantomData,
            db: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<T> Default for TestRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Repository<T> for TestRepository<T>
where
    T: Entity + Serialize + DeserializeOwned + Clone + Send + Sync,
{
    async fn insert(&self, mut item: T) -> error::Result<T> {
        let mut db = self.db.lock().unwrap();

        item.set_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        item.set_timestamps(Utc::now().timestamp_micros());

        db.push(bson::to_bson(&item)?);
        Ok(item)
    }

    async fn find_all(&self) -> error::Result<Vec<T>> {
        let db = self.db.lock().unwrap();
        db.iter()
            .map(|x| Ok(bson::from_bson(x.clone())?))
            .collect()
    }

    async fn update_by_id(&self, id: i64, mut patch: Document) -> error::Result<Option<T>> {
        patch.insert("updated_at", Utc::now().timestamp_micros());

        let mut db = self.db.lock().unwrap();
        let Some(entry) = db
            .iter_mut()
            .find(|x| x.as_document().unwrap().get_i64("id").unwrap() == id)
        else {
            return Ok(None);
        };

        let document = entry.as_document_mut().unwrap();
        for (key, value) in patch {
            document.insert(key, value);
        }

        Ok(Some(bson::from_bson(entry.clone())?))
    }

    async fn delete_by_id(&self, id: i64) -> error::Result<bool> {
        let mut db = self.db.lock().unwrap();
        let pos = db
            .iter()
            .position(|x| x.as_document().unwrap().get_i64("id").unwrap() == id);

        Ok(pos.map(|x| db.remove(x)).is_some())
    }
}
