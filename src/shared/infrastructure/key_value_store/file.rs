// File backed implementation of the KeyValueStore port.
//
// Purpose
// - Durable device storage for the command line shell.
//
// Responsibilities
// - Keep every key in one JSON object on disk.
// - Replace the file atomically (write a sibling temp file, then rename) so a failed
//   write leaves the previous contents intact.
// - Serialize read-modify-write cycles inside the process.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

type Entries = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Entries, KeyValueStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Entries::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), KeyValueStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(entries)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value);
        self.write_entries(&entries).await
    }

    async fn remove_all(&self, keys: &[&str]) -> Result<(), KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        for key in keys {
            entries.remove(*key);
        }
        self.write_entries(&entries).await
    }

    async fn compare_and_set(
        &self,
        key: &str,
        expected: Option<&str>,
        value: String,
    ) -> Result<(), KeyValueStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.get(key).map(String::as_str) != expected {
            return Err(KeyValueStoreError::Conflict {
                key: key.to_string(),
            });
        }
        entries.insert(key.to_string(), value);
        self.write_entries(&entries).await
    }
}
