// The ledger's core entity.
//
// Invariants
// - duration is Some iff status is ClockedOut, and equals the whole minutes between
//   clock_in_time and clock_out_time.
// - clock_in_time never changes; clock_out_time is written once.
//
// Stored field-for-field as camelCase JSON with RFC 3339 UTC timestamps.

use crate::shared::core::primitives::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeEntryStatus {
    ClockedIn,
    ClockedOut,
}

impl TimeEntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeEntryStatus::ClockedIn => "clocked-in",
            TimeEntryStatus::ClockedOut => "clocked-out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub job_id: String,
    pub employee_id: String,
    pub clock_in_time: Timestamp,
    pub clock_out_time: Option<Timestamp>,
    pub duration: Option<i64>,
    pub status: TimeEntryStatus,
}

impl TimeEntry {
    pub fn open(
        id: impl Into<String>,
        job_id: impl Into<String>,
        employee_id: impl Into<String>,
        clock_in_time: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            job_id: job_id.into(),
            employee_id: employee_id.into(),
            clock_in_time,
            clock_out_time: None,
            duration: None,
            status: TimeEntryStatus::ClockedIn,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == TimeEntryStatus::ClockedIn
    }

    pub fn belongs_to(&self, job_id: &str, employee_id: &str) -> bool {
        self.job_id == job_id && self.employee_id == employee_id
    }
}

/// Whole minutes from `from` to `to`, truncated. `None` when `to` precedes `from`.
pub fn elapsed_minutes(from: Timestamp, to: Timestamp) -> Option<i64> {
    let seconds = (to - from).num_seconds();
    (seconds >= 0).then_some(seconds / 60)
}
