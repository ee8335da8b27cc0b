// Persistence port for the time entry list.
//
// Purpose
// - Load the whole list together with the revision it was read at.
// - Save the whole list only if nobody wrote since that revision.

use crate::modules::time_entries::core::state::TimeEntriesState;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::key_value_store::KeyValueStoreError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("time entry list changed since it was loaded")]
    StaleRevision,

    #[error("stored time entry list is unreadable: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error(transparent)]
    Store(KeyValueStoreError),
}

impl From<KeyValueStoreError> for RepositoryError {
    fn from(error: KeyValueStoreError) -> Self {
        match error {
            KeyValueStoreError::Conflict { .. } => RepositoryError::StaleRevision,
            other => RepositoryError::Store(other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedEntries {
    pub state: TimeEntriesState,
    /// Opaque token identifying what was read. `None` when nothing was stored yet.
    pub revision: Option<String>,
}

#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    async fn load(&self) -> Result<LoadedEntries, RepositoryError>;

    async fn save(
        &self,
        expected_revision: Option<&str>,
        entries: &[TimeEntry],
    ) -> Result<(), RepositoryError>;
}
