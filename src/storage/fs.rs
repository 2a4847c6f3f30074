/// Directory-backed datastore backend.
///
/// One file per key under a root directory, named `<name>.p8` after the
/// conventional extension for PKCS#8 blobs. Keys arrive from the keychain
/// as `/<name>` with a validated name, so the translation to a file name is
/// a straight strip-and-append.
///
/// `commit` applies puts then deletes sequentially; a crash mid-batch may
/// leave either both or neither key of a rename present.
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{Batch, Datastore};
use crate::error::{KeychainError, Result};

/// File extension for stored blobs.
const KEY_FILE_EXTENSION: &str = "p8";

pub struct FsDatastore {
    root: PathBuf,
}

impl FsDatastore {
    /// Open a datastore rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| KeychainError::Datastore(format!("cannot create '{}': {e}", root.display())))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let stem = key.strip_prefix('/').unwrap_or(key);
        self.root.join(format!("{stem}.{KEY_FILE_EXTENSION}"))
    }
}

#[async_trait]
impl Datastore for FsDatastore {
    fn name(&self) -> &str {
        "fs"
    }

    async fn has(&self, key: &str) -> Result<bool> {
        fs::try_exists(self.path_for(key))
            .await
            .map_err(|e| KeychainError::Datastore(format!("cannot stat '{key}': {e}")))
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        fs::read(self.path_for(key))
            .await
            .map_err(|e| KeychainError::Datastore(format!("key '{key}' not found: {e}")))
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        fs::write(self.path_for(key), value)
            .await
            .map_err(|e| KeychainError::Datastore(format!("cannot write '{key}': {e}")))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        fs::remove_file(self.path_for(key))
            .await
            .map_err(|e| KeychainError::Datastore(format!("key '{key}' not found: {e}")))
    }

    async fn query_keys(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| KeychainError::Datastore(format!("cannot list keys: {e}")))?;

        let mut keys = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| KeychainError::Datastore(format!("cannot list keys: {e}")))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(KEY_FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(format!("/{stem}"));
            }
        }
        Ok(keys)
    }

    async fn commit(&self, batch: Batch) -> Result<()> {
        for (key, value) in batch.puts() {
            self.put(key, value.clone()).await?;
        }
        for key in batch.deletes() {
            self.delete(key).await?;
        }
        Ok(())
    }

    fn file_path(&self, key: &str) -> Option<PathBuf> {
        Some(self.path_for(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDatastore::open(dir.path()).await.unwrap();

        store.put("/a", b"blob".to_vec()).await.unwrap();
        assert!(store.has("/a").await.unwrap());
        assert_eq!(store.get("/a").await.unwrap(), b"blob");

        store.delete("/a").await.unwrap();
        assert!(!store.has("/a").await.unwrap());
    }

    #[tokio::test]
    async fn test_blobs_get_the_p8_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDatastore::open(dir.path()).await.unwrap();

        store.put("/my-key", b"blob".to_vec()).await.unwrap();
        assert!(dir.path().join("my-key.p8").exists());

        let hint = store.file_path("/my-key").unwrap();
        assert_eq!(hint, dir.path().join("my-key.p8"));
    }

    #[tokio::test]
    async fn test_query_keys_restores_the_slash() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDatastore::open(dir.path()).await.unwrap();

        store.put("/a", b"1".to_vec()).await.unwrap();
        store.put("/b", b"2".to_vec()).await.unwrap();
        // unrelated files are not keys
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let mut keys = store.query_keys().await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["/a".to_string(), "/b".to_string()]);
    }

    #[tokio::test]
    async fn test_commit_moves_a_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDatastore::open(dir.path()).await.unwrap();
        store.put("/old", b"blob".to_vec()).await.unwrap();

        let mut batch = Batch::new();
        batch.put("/new", b"blob".to_vec());
        batch.delete("/old");
        store.commit(batch).await.unwrap();

        assert!(store.has("/new").await.unwrap());
        assert!(!store.has("/old").await.unwrap());
    }
}
