// Display shape of a time entry: the stored entry plus the job it refers to.
// The job is attached best-effort and never written back to storage.

use crate::modules::jobs::core::catalog::JobCatalog;
use crate::modules::jobs::core::job::Job;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryView {
    #[serde(flatten)]
    pub entry: TimeEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
}

impl From<TimeEntry> for TimeEntryView {
    fn from(entry: TimeEntry) -> Self {
        Self { entry, job: None }
    }
}

/// Attach the entry's job. A missing job, or a catalog that cannot answer, yields `job: None`.
pub async fn enrich<TCatalog>(catalog: &TCatalog, entry: TimeEntry) -> TimeEntryView
where
    TCatalog: JobCatalog + ?Sized,
{
    let job = match catalog.get_job(&entry.job_id).await {
        Ok(job) => job,
        Err(e) => {
            warn!(
                job_id = %entry.job_id,
                error = %e,
                "job lookup failed, showing entry without job"
            );
            None
        }
    };
    TimeEntryView { entry, job }
}
