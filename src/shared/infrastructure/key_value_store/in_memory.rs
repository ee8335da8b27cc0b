// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Support handler tests and local development without touching the filesystem.
//
// Responsibilities
// - Keep values in a map.
// - Simulate an unavailable backend and slow writes so failure and race paths can be exercised.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, String>>,
    is_offline: AtomicBool,
    delay_write_ms: AtomicU64,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), KeyValueStoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(KeyValueStoreError::Backend("Key value store offline".into()));
        }
        Ok(())
    }

    async fn simulate_latency(&self) {
        let ms = self.delay_write_ms.load(Ordering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueStoreError> {
        self.ensure_online()?;
        self.simulate_latency().await;
        self.inner.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_all(&self, keys: &[&str]) -> Result<(), KeyValueStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        for key in keys {
            guard.remove(*key);
        }
        Ok(())
    }

    async fn compare_and_set(
        &self,
        key: &str,
        expected: Option<&str>,
        value: String,
    ) -> Result<(), KeyValueStoreError> {
        self.ensure_online()?;
        self.simulate_latency().await;
        let mut guard = self.inner.write().await;
        if guard.get(key).map(String::as_str) != expected {
            return Err(KeyValueStoreError::Conflict {
                key: key.to_string(),
            });
        }
        guard.insert(key.to_string(), value);
        Ok(())
    }
}
