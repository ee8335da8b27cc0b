use crate::modules::time_entries::core::events::TimeEntryEvent;

/// Reasons a ledger command is refused. Messages are shown to the user as is.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{0} must not be empty")]
    MissingIdentifier(&'static str),

    #[error("time entry id is already in use")]
    AlreadyExists,

    #[error("already clocked in on this job, clock out first")]
    AlreadyClockedIn,

    #[error("time entry is already clocked out")]
    AlreadyClockedOut,

    #[error("time entry not found")]
    NotFound,

    #[error("clock out time is before the clock in time")]
    ClockOutBeforeClockIn,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<TimeEntryEvent> },
    Rejected { reason: DecideError },
}
