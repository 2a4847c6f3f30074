/// Pluggable datastore abstraction for the keychain.
///
/// The keychain owns no storage logic; it persists one PKCS#8-encrypted PEM
/// blob per key and depends only on this contract. Blobs are already
/// encrypted when they reach a backend; backends never see plaintext key
/// material or the DEK.
pub mod fs;
pub mod memory;

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::Result;

/// An atomic unit of puts and deletes, applied via [`Datastore::commit`].
#[derive(Debug, Default, Clone)]
pub struct Batch {
    puts: Vec<(String, Vec<u8>)>,
    deletes: Vec<String>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.puts.push((key.into(), value));
    }

    pub fn delete(&mut self, key: impl Into<String>) {
        self.deletes.push(key.into());
    }

    pub fn puts(&self) -> &[(String, Vec<u8>)] {
        &self.puts
    }

    pub fn deletes(&self) -> &[String] {
        &self.deletes
    }
}

/// Trait for pluggable keyed-blob stores.
///
/// Keys handed in by the keychain are always `/<name>` with a validated
/// name, so they contain no path separators beyond the leading slash.
#[async_trait]
pub trait Datastore: Send + Sync {
    /// Human-readable name of this backend (e.g., "memory", "fs").
    fn name(&self) -> &str;

    /// Check whether a key exists.
    async fn has(&self, key: &str) -> Result<bool>;

    /// Fetch the value at `key`; error when absent.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Store a value, overwriting any previous one.
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Remove a key; error when absent.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Enumerate all keys. Order is backend-defined.
    async fn query_keys(&self) -> Result<Vec<String>>;

    /// Apply a batch of puts and deletes. Atomicity is per-backend: the
    /// in-memory store applies the whole batch under one lock, the
    /// filesystem store is best-effort.
    async fn commit(&self, batch: Batch) -> Result<()>;

    /// Optional on-disk location hint for a key, surfaced as the `path`
    /// field of `KeyInfo`. Backends without one return `None`.
    fn file_path(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}
