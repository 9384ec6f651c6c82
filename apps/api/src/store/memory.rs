use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{parse_id, DocumentStore, Stored, StoreError};

/// In-memory `DocumentStore` used as the handler-test double.
///
/// Assigns real ObjectId hex strings so id validation behaves exactly like
/// the MongoDB implementation. Preserves insertion order.
#[derive(Default)]
pub struct MemoryStore<T> {
    docs: Mutex<Vec<(String, T)>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<T> DocumentStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn insert(&self, doc: &T) -> Result<String, StoreError> {
        let id = ObjectId::new().to_hex();
        self.docs.lock().unwrap().push((id.clone(), doc.clone()));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Stored<T>>, StoreError> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .map(|(id, doc)| Stored {
                id: id.clone(),
                doc: doc.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Stored<T>>, StoreError> {
        parse_id(id)?;
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .find(|(stored_id, _)| stored_id == id)
            .map(|(stored_id, doc)| Stored {
                id: stored_id.clone(),
                doc: doc.clone(),
            }))
    }

    async fn replace_by_id(&self, id: &str, doc: &T) -> Result<bool, StoreError> {
        parse_id(id)?;
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|(stored_id, _)| stored_id == id) {
            Some((_, stored)) => {
                *stored = doc.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        parse_id(id)?;
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|(stored_id, _)| stored_id != id);
        Ok(docs.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_find_round_trip() {
        let store = MemoryStore::new();
        let id = store.insert(&"hello".to_string()).await.unwrap();

        let found = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.doc, "hello");

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_and_delete_report_matches() {
        let store = MemoryStore::new();
        let id = store.insert(&1u32).await.unwrap();
        let absent = ObjectId::new().to_hex();

        assert!(store.replace_by_id(&id, &2).await.unwrap());
        assert!(!store.replace_by_id(&absent, &3).await.unwrap());
        assert_eq!(store.find_by_id(&id).await.unwrap().unwrap().doc, 2);

        assert!(store.delete_by_id(&id).await.unwrap());
        assert!(!store.delete_by_id(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected_before_lookup() {
        let store: MemoryStore<String> = MemoryStore::new();
        assert!(matches!(
            store.find_by_id("garbage").await,
            Err(StoreError::MalformedId(_))
        ));
        assert!(matches!(
            store.delete_by_id("garbage").await,
            Err(StoreError::MalformedId(_))
        ));
    }
}
