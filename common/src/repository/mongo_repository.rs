use async_trait::async_trait;
use chrono::Utc;
use futures::StreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Client, Collection,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{self, AddCode};

use super::{Entity, Repository};

pub struct MongoRepository<T> {
    collection: Collection<T>,
    counters: Collection<Document>,
}

impl<T: Entity> MongoRepository<T> {
    const DATABASE: &'static str = "Archive";

    pub async fn new(mongo_uri: &str) -> Self {
        let db = Client::with_uri_str(mongo_uri)
            .await
            .unwrap()
            .database(Self::DATABASE);
        Self {
            collection: db.collection(T::COLLECTION),
            counters: db.collection("counters"),
        }
    }

    // `$inc` with upsert is a single atomic statement, so concurrent
    // inserts never observe the same sequence value.
    async fn next_id(&self) -> error::Result<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();
        let counter = self
            .counters
            .find_one_and_update(
                doc! {"_id": T::COLLECTION},
                doc! {"$inc": {"seq": 1_i64}},
                options,
            )
            .await?
            .ok_or_else(|| anyhow::anyhow!("Counter for {} not found", T::COLLECTION).code(500))?;
        Ok(counter.get_i64("seq")?)
    }
}

#[async_trait]
impl<T> Repository<T> for MongoRepository<T>
where
    T: Entity + Serialize + DeserializeOwned + Unpin + Clone + Send + Sync,
{
    async fn insert(&self, mut item: T) -> error::Result<T> {
        item.set_id(self.next_id().await?);
        item.set_timestamps(Utc::now().timestamp_micros());

        self.collection.insert_one(&item, None).await?;
        Ok(item)
    }

    async fn find_all(&self) -> error::Result<Vec<T>> {
        let results: Vec<mongodb::error::Result<T>> =
            self.collection.find(None, None).await?.collect().await;

        Ok(results.into_iter().collect::<mongodb::error::Result<_>>()?)
    }

    async fn update_by_id(&self, id: i64, mut patch: Document) -> error::Result<Option<T>> {
        patch.insert("updated_at", Utc::now().timestamp_micros());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let result = self
            .collection
            .find_one_and_update(doc! {"id": id}, doc! {"$set": patch}, options)
            .await?;
        Ok(result)
    }

    async fn delete_by_id(&self, id: i64) -> error::Result<bool> {
        let result = self.collection.delete_one(doc! {"id": id}, None).await?;
        Ok(result.deleted_count > 0)
    }
}
