// Pure decision function for clocking out.
//
// Rules
// - The entry must exist and still be open. A second close is refused, not ignored.
// - The clock out instant may not precede the clock in instant.
// - Duration is fixed here, once, as whole elapsed minutes.

use crate::modules::time_entries::core::{
    decision::{DecideError, Decision},
    events::{ClockedOut, TimeEntryEvent},
    state::TimeEntriesState,
    time_entry::elapsed_minutes,
};
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;

pub fn decide_clock_out(state: &TimeEntriesState, command: ClockOut) -> Decision {
    let Some(entry) = state.find(&command.time_entry_id) else {
        return Decision::Rejected {
            reason: DecideError::NotFound,
        };
    };
    if !entry.is_open() {
        return Decision::Rejected {
            reason: DecideError::AlreadyClockedOut,
        };
    }
    let Some(duration) = elapsed_minutes(entry.clock_in_time, command.clock_out_time) else {
        return Decision::Rejected {
            reason: DecideError::ClockOutBeforeClockIn,
        };
    };
    Decision::Accepted {
        events: vec![TimeEntryEvent::ClockedOut(ClockedOut {
            time_entry_id: command.time_entry_id,
            clock_out_time: command.clock_out_time,
            duration,
        })],
    }
}
