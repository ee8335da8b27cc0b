// The full time entry list as loaded from storage, with the lookups the deciders need.
//
// Boundaries
// - No input or output.

use crate::modules::time_entries::core::time_entry::TimeEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntriesState {
    pub entries: Vec<TimeEntry>,
}

impl TimeEntriesState {
    pub fn new(entries: Vec<TimeEntry>) -> Self {
        Self { entries }
    }

    /// First open entry for the pair. At most one exists while the ledger is the only writer.
    pub fn active_entry(&self, job_id: &str, employee_id: &str) -> Option<&TimeEntry> {
        self.entries
            .iter()
            .find(|e| e.is_open() && e.belongs_to(job_id, employee_id))
    }

    pub fn find(&self, time_entry_id: &str) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.id == time_entry_id)
    }
}
