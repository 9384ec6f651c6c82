//! Document store seam.
//!
//! Handlers depend on the `DocumentStore` trait, never on the MongoDB driver
//! directly, so the whole HTTP surface can be exercised against the in-memory
//! implementation in tests.

pub mod mongo;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed document id: {0}")]
    MalformedId(String),

    #[error(transparent)]
    Backend(#[from] mongodb::error::Error),
}

/// A document paired with its store-assigned id.
#[derive(Debug, Clone)]
pub struct Stored<T> {
    pub id: String,
    pub doc: T,
}

/// One logical collection of documents addressed by opaque string ids.
///
/// Updates are whole-document replaces; there are no partial-update semantics.
/// `replace_by_id` and `delete_by_id` report whether any document matched.
#[async_trait]
pub trait DocumentStore<T>: Send + Sync {
    async fn insert(&self, doc: &T) -> Result<String, StoreError>;

    async fn find_all(&self) -> Result<Vec<Stored<T>>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Stored<T>>, StoreError>;

    async fn replace_by_id(&self, id: &str, doc: &T) -> Result<bool, StoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;
}

/// Parses a client-supplied id, rejecting anything that is not a well-formed
/// ObjectId before it reaches the backend.
pub(crate) fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}
