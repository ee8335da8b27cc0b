// Read-only lookup of jobs. Consulted for display enrichment and dashboards,
// never for enforcing time entry rules.

use crate::modules::jobs::core::job::Job;
use async_trait::async_trait;

#[async_trait]
pub trait JobCatalog: Send + Sync {
    async fn list_jobs(&self) -> anyhow::Result<Vec<Job>>;

    async fn get_job(&self, job_id: &str) -> anyhow::Result<Option<Job>>;
}
