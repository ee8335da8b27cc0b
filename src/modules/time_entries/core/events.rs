// Changes the deciders emit against the ledger. They are folded into state by `evolve`
// and never stored themselves; the ledger persists the resulting entry list.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockedOut {
    pub time_entry_id: String,
    pub clock_out_time: Timestamp,
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntryEvent {
    ClockedIn(TimeEntry),
    ClockedOut(ClockedOut),
}
