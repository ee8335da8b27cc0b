use crate::modules::jobs::core::catalog::JobCatalog;
use crate::modules::time_entries::adapters::outbound::repository::TimeEntryRepository;
use crate::modules::time_entries::application::errors::ApplicationError;
use crate::modules::time_entries::application::ledger_writer::{
    DEFAULT_MAX_ATTEMPTS, write_through,
};
use crate::modules::time_entries::core::decision::DecideError;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::modules::time_entries::use_cases::clock_out::decide::decide_clock_out;
use crate::modules::time_entries::use_cases::list_time_entries::projection::{
    TimeEntryView, enrich,
};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ClockOutHandler<TRepository, TCatalog>
where
    TRepository: TimeEntryRepository + 'static,
    TCatalog: JobCatalog + 'static,
{
    repository: Arc<TRepository>,
    catalog: Arc<TCatalog>,
    max_attempts: u32,
}

impl<TRepository, TCatalog> ClockOutHandler<TRepository, TCatalog>
where
    TRepository: TimeEntryRepository + 'static,
    TCatalog: JobCatalog + 'static,
{
    pub fn new(repository: Arc<TRepository>, catalog: Arc<TCatalog>) -> Self {
        Self {
            repository,
            catalog,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub async fn handle(&self, command: ClockOut) -> Result<TimeEntryView, ApplicationError> {
        let written = write_through(&*self.repository, self.max_attempts, |state| {
            decide_clock_out(state, command.clone())
        })
        .await
        .inspect_err(|e| {
            warn!(time_entry_id = %command.time_entry_id, error = %e, "clock out rejected")
        })?;

        let entry = written
            .state
            .find(&command.time_entry_id)
            .cloned()
            .ok_or(ApplicationError::Domain(DecideError::NotFound))?;
        info!(
            time_entry_id = %entry.id,
            duration_minutes = entry.duration,
            "clocked out"
        );
        Ok(enrich(&*self.catalog, entry).await)
    }
}
