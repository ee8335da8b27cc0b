use crate::modules::time_entries::core::time_entry::{TimeEntry, TimeEntryStatus};
use crate::shared::core::primitives::Timestamp;
use chrono::{Duration, TimeZone, Utc};

/// Fixed reference instant used across the ledger tests.
pub fn t0() -> Timestamp {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0)
        .single()
        .expect("valid fixed instant")
}

pub fn open_entry(id: &str, job_id: &str, employee_id: &str) -> TimeEntry {
    TimeEntry::open(id, job_id, employee_id, t0())
}

/// A finished 90 minute entry that ended half an hour before `t0`.
pub fn clocked_out_entry(id: &str, job_id: &str, employee_id: &str) -> TimeEntry {
    let clock_in_time = t0() - Duration::hours(2);
    TimeEntry {
        clock_out_time: Some(clock_in_time + Duration::minutes(90)),
        duration: Some(90),
        status: TimeEntryStatus::ClockedOut,
        ..TimeEntry::open(id, job_id, employee_id, clock_in_time)
    }
}
