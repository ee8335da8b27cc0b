use crate::modules::jobs::core::catalog::JobCatalog;
use crate::modules::time_entries::adapters::outbound::repository::TimeEntryRepository;
use crate::modules::time_entries::use_cases::admin_dashboard::projection::DashboardStats;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

pub struct DashboardHandler<TRepository, TCatalog>
where
    TRepository: TimeEntryRepository + 'static,
    TCatalog: JobCatalog + 'static,
{
    repository: Arc<TRepository>,
    catalog: Arc<TCatalog>,
}

impl<TRepository, TCatalog> DashboardHandler<TRepository, TCatalog>
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

    pub async fn handle(&self, today: NaiveDate) -> anyhow::Result<DashboardStats> {
        let jobs = self.catalog.list_jobs().await?;
        let loaded = self.repository.load().await?;
        let stats = DashboardStats::compute(&jobs, &loaded.state.entries, today);
        debug!(
            active_jobs = stats.active_jobs,
            clocked_in = stats.clocked_in,
            pending_approval = stats.pending_approval,
            "computed dashboard"
        );
        Ok(stats)
    }
}
