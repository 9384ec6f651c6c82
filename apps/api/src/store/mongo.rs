use std::marker::PhantomData;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::Collection;
use serde::{de::DeserializeOwned, Serialize};

use super::{parse_id, DocumentStore, Stored, StoreError};

/// MongoDB-backed `DocumentStore`.
///
/// Works over a raw `Collection<Document>` so the `_id` assigned by the server
/// can be split off before the remaining fields are deserialized into `T`.
pub struct MongoStore<T> {
    coll: Collection<Document>,
    _doc: PhantomData<fn() -> T>,
}

impl<T> MongoStore<T> {
    pub fn new(coll: Collection<Document>) -> Self {
        Self {
            coll,
            _doc: PhantomData,
        }
    }
}

fn split_id<T: DeserializeOwned>(mut document: Document) -> Result<Stored<T>, StoreError> {
    let id = document
        .remove("_id")
        .as_ref()
        .and_then(bson::Bson::as_object_id)
        .map(|oid| oid.to_hex())
        .unwrap_or_default();
    let doc = bson::from_document(document).map_err(mongodb::error::Error::from)?;
    Ok(Stored { id, doc })
}

#[async_trait]
impl<T> DocumentStore<T> for MongoStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn insert(&self, doc: &T) -> Result<String, StoreError> {
        let document = bson::to_document(doc).map_err(mongodb::error::Error::from)?;
        let result = self.coll.insert_one(document, None).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Stored<T>>, StoreError> {
        let mut cursor = self.coll.find(None, None).await?;
        let mut out = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            out.push(split_id(document)?);
        }
        Ok(out)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Stored<T>>, StoreError> {
        let oid = parse_id(id)?;
        let found = self.coll.find_one(doc! { "_id": oid }, None).await?;
        found.map(split_id).transpose()
    }

    async fn replace_by_id(&self, id: &str, doc: &T) -> Result<bool, StoreError> {
        let oid = parse_id(id)?;
        let document = bson::to_document(doc).map_err(mongodb::error::Error::from)?;
        let result = self
            .coll
            .replace_one(doc! { "_id": oid }, document, None)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let oid = parse_id(id)?;
        let result = self.coll.delete_one(doc! { "_id": oid }, None).await?;
        Ok(result.deleted_count > 0)
    }
}
