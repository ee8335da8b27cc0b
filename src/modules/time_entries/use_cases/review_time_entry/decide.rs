// Review rules.
//
// A review records nothing: entries carry no approval state, so an accepted review only
// confirms that this reviewer may pass this verdict on this entry.

use crate::modules::time_entries::core::state::TimeEntriesState;
use crate::modules::time_entries::use_cases::review_time_entry::command::{
    ReviewTimeEntry, Verdict,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewRejection {
    #[error("only administrators can review time entries")]
    NotAuthorized,
    #[error("time entry not found")]
    NotFound,
    #[error("time entry is still clocked in")]
    StillClockedIn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub time_entry_id: String,
    pub verdict: Verdict,
    pub reviewer_id: String,
}

pub fn decide_review(
    state: &TimeEntriesState,
    command: ReviewTimeEntry,
) -> Result<ReviewOutcome, ReviewRejection> {
    if !command.reviewer_is_admin {
        return Err(ReviewRejection::NotAuthorized);
    }
    let entry = state
        .find(&command.time_entry_id)
        .ok_or(ReviewRejection::NotFound)?;
    if entry.is_open() {
        return Err(ReviewRejection::StillClockedIn);
    }
    Ok(ReviewOutcome {
        time_entry_id: command.time_entry_id,
        verdict: command.verdict,
        reviewer_id: command.reviewer_id,
    })
}
