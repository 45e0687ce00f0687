use crate::domain::ports::DocumentStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory document store.
///
/// Uses `Arc<RwLock<HashMap<String, String>>>` so clones share the same
/// documents. Nothing survives the process; used by default and in tests.
#[derive(Default, Clone)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryDocumentStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let documents = self.documents.read().await;
        Ok(documents.get(key).cloned())
    }

    async fn write(&self, key: &str, document: String) -> Result<()> {
        let mut documents = self.documents.write().await;
        documents.insert(key.to_string(), document);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut documents = self.documents.write().await;
        documents.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_document_store() {
        let store = InMemoryDocumentStore::new();
        assert!(store.read("gym_members").await.unwrap().is_none());

        store.write("gym_members", "[]".to_string()).await.unwrap();
        assert_eq!(store.read("gym_members").await.unwrap().as_deref(), Some("[]"));

        // Whole-document replace
        store.write("gym_members", "[1]".to_string()).await.unwrap();
        assert_eq!(store.read("gym_members").await.unwrap().as_deref(), Some("[1]"));

        store.remove("gym_members").await.unwrap();
        assert!(store.read("gym_members").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_documents() {
        let store = InMemoryDocumentStore::new();
        let other = store.clone();
        store.write("gym_payments", "[]".to_string()).await.unwrap();
        assert!(other.read("gym_payments").await.unwrap().is_some());
    }
}
