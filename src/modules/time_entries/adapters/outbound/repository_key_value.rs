// TimeEntryRepository over any KeyValueStore. The list lives under a single key as a
// JSON array; the raw stored string doubles as the revision for compare_and_set.

use crate::modules::time_entries::adapters::outbound::repository::{
    LoadedEntries, RepositoryError, TimeEntryRepository,
};
use crate::modules::time_entries::core::state::TimeEntriesState;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

pub const TIME_ENTRIES_KEY: &str = "time_entries";

pub struct KeyValueTimeEntryRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> KeyValueTimeEntryRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl<TStore> TimeEntryRepository for KeyValueTimeEntryRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    async fn load(&self) -> Result<LoadedEntries, RepositoryError> {
        let revision = self.store.get(TIME_ENTRIES_KEY).await?;
        let entries: Vec<TimeEntry> = match revision.as_deref() {
            Some(raw) => serde_json::from_str(raw)?,
            None => Vec::new(),
        };
        Ok(LoadedEntries {
            state: TimeEntriesState::new(entries),
            revision,
        })
    }

    async fn save(
        &self,
        expected_revision: Option<&str>,
        entries: &[TimeEntry],
    ) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(entries)?;
        self.store
            .compare_and_set(TIME_ENTRIES_KEY, expected_revision, raw)
            .await?;
        Ok(())
    }
}
