// Aggregate figures for the administrator overview.

use crate::modules::jobs::core::job::Job;
use crate::modules::time_entries::core::time_entry::{TimeEntry, TimeEntryStatus};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_jobs: usize,
    pub clocked_in: usize,
    pub pending_approval: usize,
    /// Whole hours over every finished entry, truncated.
    pub total_hours: i64,
    pub todays_jobs: Vec<Job>,
}

impl DashboardStats {
    pub fn compute(jobs: &[Job], entries: &[TimeEntry], today: NaiveDate) -> Self {
        let count = |status: TimeEntryStatus| entries.iter().filter(|e| e.status == status).count();
        let total_minutes: i64 = entries.iter().filter_map(|e| e.duration).sum();
        Self {
            active_jobs: jobs.iter().filter(|j| j.status.is_active()).count(),
            clocked_in: count(TimeEntryStatus::ClockedIn),
            pending_approval: count(TimeEntryStatus::ClockedOut),
            total_hours: total_minutes.div_euclid(60),
            todays_jobs: jobs
                .iter()
                .filter(|j| j.scheduled_date == today)
                .cloned()
                .collect(),
        }
    }
}
