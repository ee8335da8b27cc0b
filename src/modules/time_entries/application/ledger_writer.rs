// Read-modify-write cycle shared by every ledger mutation.
//
// Responsibilities
// - Load the entry list and its revision, run the decider, fold the accepted events.
// - Save the full list only against the revision that was read.
// - On a stale revision, reload and decide again, so a concurrent duplicate sees the
//   winner's write and is rejected by the domain rules instead of breaking them.

use crate::modules::time_entries::adapters::outbound::repository::{
    RepositoryError, TimeEntryRepository,
};
use crate::modules::time_entries::application::errors::ApplicationError;
use crate::modules::time_entries::core::decision::Decision;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::evolve::evolve;
use crate::modules::time_entries::core::state::TimeEntriesState;
use tracing::warn;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub struct Written {
    pub state: TimeEntriesState,
    pub events: Vec<TimeEntryEvent>,
}

pub async fn write_through<TRepository, TDecide>(
    repository: &TRepository,
    max_attempts: u32,
    mut decide: TDecide,
) -> Result<Written, ApplicationError>
where
    TRepository: TimeEntryRepository + ?Sized,
    TDecide: FnMut(&TimeEntriesState) -> Decision,
{
    let max_attempts = max_attempts.max(1);
    for attempt in 1..=max_attempts {
        let loaded = repository.load().await?;
        let events = match decide(&loaded.state) {
            Decision::Accepted { events } => events,
            Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
        };
        let state = events.iter().cloned().fold(loaded.state, evolve);
        match repository
            .save(loaded.revision.as_deref(), &state.entries)
            .await
        {
            Ok(()) => return Ok(Written { state, events }),
            Err(RepositoryError::StaleRevision) => {
                warn!(attempt, max_attempts, "time entry list changed during write, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(ApplicationError::Conflict {
        attempts: max_attempts,
    })
}
