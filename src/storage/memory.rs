/// In-memory datastore backend.
///
/// Used by the test suite and by embedders that want an ephemeral keychain.
/// `commit` holds the write lock for the whole batch, so batches are atomic.
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Batch, Datastore};
use crate::error::{KeychainError, Result};

#[derive(Default)]
pub struct MemoryDatastore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryDatastore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Datastore for MemoryDatastore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn has(&self, key: &str) -> Result<bool> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.entries
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| KeychainError::Datastore(format!("key '{key}' not found")))
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| KeychainError::Datastore(format!("key '{key}' not found")))
    }

    async fn query_keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }

    async fn commit(&self, batch: Batch) -> Result<()> {
        let mut entries = self.entries.write().await;
        for (key, value) in batch.puts() {
            entries.insert(key.clone(), value.clone());
        }
        for key in batch.deletes() {
            entries.remove(key);
        }
        Ok(())
    }
}
