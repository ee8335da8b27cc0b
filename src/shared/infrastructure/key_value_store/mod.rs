// Durable string keyed storage. The device-local persistence for every module.
//
// Responsibilities
// - Read, write and remove whole values by key. Values are opaque strings (JSON in practice).
// - Offer compare_and_set so read-modify-write cycles can detect an interleaved writer.
//
// Boundaries
// - No knowledge of time entries, users or sessions. Modules own their keys and encodings.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("stale value for key {key}")]
    Conflict { key: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueStoreError>;

    async fn remove_all(&self, keys: &[&str]) -> Result<(), KeyValueStoreError>;

    /// Write `value` only if the key still holds `expected` (`None` meaning absent).
    async fn compare_and_set(
        &self,
        key: &str,
        expected: Option<&str>,
        value: String,
    ) -> Result<(), KeyValueStoreError>;
}

pub mod file;
pub mod in_memory;
