// Read side of the ledger. Pure reads through the repository, enriched from the job catalog.

use crate::modules::jobs::core::catalog::JobCatalog;
use crate::modules::time_entries::adapters::outbound::repository::TimeEntryRepository;
use crate::modules::time_entries::use_cases::list_time_entries::projection::{
    TimeEntryView, enrich,
};
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

pub struct TimeEntryQueryService<TRepository, TCatalog>
where
    TRepository: TimeEntryRepository + 'static,
    TCatalog: JobCatalog + 'static,
{
    repository: Arc<TRepository>,
    catalog: Arc<TCatalog>,
}

impl<TRepository, TCatalog> TimeEntryQueryService<TRepository, TCatalog>
where
    TRepository: TimeEntryRepository + 'static,
    TCatalog: JobCatalog + 'static,
{
    pub fn new(repository: Arc<TRepository>, catalog: Arc<TCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}

#[async_trait]
impl<TRepository, TCatalog> TimeEntryQueries for TimeEntryQueryService<TRepository, TCatalog>
where
    TRepository: TimeEntryRepository + 'static,
    TCatalog: JobCatalog + 'static,
{
    async fn list_entries(
        &self,
        employee_id: Option<&str>,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        let loaded = self.repository.load().await?;
        let mut views = Vec::new();
        for entry in loaded
            .state
            .entries
            .into_iter()
            .filter(|e| employee_id.is_none_or(|id| e.employee_id == id))
        {
            views.push(enrich(&*self.catalog, entry).await);
        }
        debug!(count = views.len(), employee_id, "listed time entries");
        Ok(views)
    }

    async fn active_entry(
        &self,
        job_id: &str,
        employee_id: &str,
    ) -> anyhow::Result<Option<TimeEntryView>> {
        let loaded = self.repository.load().await?;
        match loaded.state.active_entry(job_id, employee_id) {
            Some(entry) => Ok(Some(enrich(&*self.catalog, entry.clone()).await)),
            None => Ok(None),
        }
    }

    async fn find_entry(&self, time_entry_id: &str) -> anyhow::Result<Option<TimeEntryView>> {
        let loaded = self.repository.load().await?;
        match loaded.state.find(time_entry_id) {
            Some(entry) => Ok(Some(enrich(&*self.catalog, entry.clone()).await)),
            None => Ok(None),
        }
    }
}
