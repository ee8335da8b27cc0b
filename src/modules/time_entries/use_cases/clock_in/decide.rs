// Pure decision function for clocking in.
//
// Rules
// - Both identifiers must be present.
// - The entry id must not be taken by a stored entry.
// - No open entry may exist for the same job and employee.

use crate::modules::time_entries::core::{
    decision::{DecideError, Decision},
    events::TimeEntryEvent,
    state::TimeEntriesState,
    time_entry::TimeEntry,
};
use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;

pub fn decide_clock_in(state: &TimeEntriesState, command: ClockIn) -> Decision {
    if command.job_id.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingIdentifier("job id"),
        };
    }
    if command.employee_id.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingIdentifier("employee id"),
        };
    }
    if state.find(&command.time_entry_id).is_some() {
        return Decision::Rejected {
            reason: DecideError::AlreadyExists,
        };
    }
    if state
        .active_entry(&command.job_id, &command.employee_id)
        .is_some()
    {
        return Decision::Rejected {
            reason: DecideError::AlreadyClockedIn,
        };
    }
    let entry = TimeEntry::open(
        command.time_entry_id,
        command.job_id,
        command.employee_id,
        command.clock_in_time,
    );
    Decision::Accepted {
        events: vec![TimeEntryEvent::ClockedIn(entry)],
    }
}
