use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryView;
use async_trait::async_trait;

#[async_trait]
pub trait TimeEntryQueries: Send + Sync {
    /// Every stored entry in storage order, optionally only one employee's, with jobs attached.
    async fn list_entries(&self, employee_id: Option<&str>)
    -> anyhow::Result<Vec<TimeEntryView>>;

    async fn active_entry(
        &self,
        job_id: &str,
        employee_id: &str,
    ) -> anyhow::Result<Option<TimeEntryView>>;

    async fn find_entry(&self, time_entry_id: &str) -> anyhow::Result<Option<TimeEntryView>>;
}
