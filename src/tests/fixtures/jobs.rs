use crate::modules::jobs::adapters::outbound::seed_catalog::SeedJobCatalog;
use crate::modules::jobs::core::catalog::JobCatalog;
use crate::modules::jobs::core::job::Job;
use async_trait::async_trait;
use chrono::NaiveDate;
use rstest::fixture;

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid fixed date")
}

#[fixture]
pub fn seed_catalog() -> SeedJobCatalog {
    SeedJobCatalog::new(reference_date())
}

/// Catalog whose every lookup fails.
pub struct OfflineJobCatalog;

#[async_trait]
impl JobCatalog for OfflineJobCatalog {
    async fn list_jobs(&self) -> anyhow::Result<Vec<Job>> {
        anyhow::bail!("job catalog offline")
    }

    async fn get_job(&self, _job_id: &str) -> anyhow::Result<Option<Job>> {
        anyhow::bail!("job catalog offline")
    }
}
