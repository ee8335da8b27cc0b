use crate::modules::time_entries::adapters::outbound::repository::RepositoryError;
use crate::modules::time_entries::core::decision::DecideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("time entries kept changing, gave up after {attempts} attempts")]
    Conflict { attempts: u32 },
}
