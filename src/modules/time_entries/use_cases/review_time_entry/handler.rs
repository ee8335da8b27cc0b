use crate::modules::jobs::core::catalog::JobCatalog;
use crate::modules::time_entries::adapters::outbound::repository::{
    RepositoryError, TimeEntryRepository,
};
use crate::modules::time_entries::use_cases::list_time_entries::projection::{
    TimeEntryView, enrich,
};
use crate::modules::time_entries::use_cases::review_time_entry::command::ReviewTimeEntry;
use crate::modules::time_entries::use_cases::review_time_entry::decide::{
    ReviewOutcome, ReviewRejection, decide_review,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Rejected(#[from] ReviewRejection),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct ReviewTimeEntryHandler<TRepository, TCatalog>
where
    TRepository: TimeEntryRepository + 'static,
    TCatalog: JobCatalog + 'static,
{
    repository: Arc<TRepository>,
    catalog: Arc<TCatalog>,
}

impl<TRepository, TCatalog> ReviewTimeEntryHandler<TRepository, TCatalog>
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

    /// Finished entries waiting for a verdict, in storage order.
    pub async fn pending(&self) -> Result<Vec<TimeEntryView>, ReviewError> {
        let loaded = self.repository.load().await?;
        let mut views = Vec::new();
        for entry in loaded.state.entries.into_iter().filter(|e| !e.is_open()) {
            views.push(enrich(&*self.catalog, entry).await);
        }
        Ok(views)
    }

    pub async fn handle(&self, command: ReviewTimeEntry) -> Result<ReviewOutcome, ReviewError> {
        let loaded = self.repository.load().await?;
        let time_entry_id = command.time_entry_id.clone();
        let outcome = decide_review(&loaded.state, command).inspect_err(|e| {
            warn!(time_entry_id = %time_entry_id, error = %e, "review rejected")
        })?;
        info!(
            time_entry_id = %outcome.time_entry_id,
            reviewer_id = %outcome.reviewer_id,
            verdict = outcome.verdict.as_str(),
            "time entry reviewed"
        );
        Ok(outcome)
    }
}
