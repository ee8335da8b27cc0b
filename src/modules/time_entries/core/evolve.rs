// Evolve function: combine the prior entry list with one change to produce the next list.
//
// Boundaries
// - No input or output. No side effects.
// - A change that does not apply (unknown or already closed entry) leaves the state as is.

use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::state::TimeEntriesState;
use crate::modules::time_entries::core::time_entry::TimeEntryStatus;

pub fn evolve(mut state: TimeEntriesState, event: TimeEntryEvent) -> TimeEntriesState {
    match event {
        TimeEntryEvent::ClockedIn(entry) => {
            state.entries.push(entry);
        }
        TimeEntryEvent::ClockedOut(e) => {
            if let Some(entry) = state
                .entries
                .iter_mut()
                .find(|entry| entry.id == e.time_entry_id && entry.is_open())
            {
                entry.clock_out_time = Some(e.clock_out_time);
                entry.duration = Some(e.duration);
                entry.status = TimeEntryStatus::ClockedOut;
            }
        }
    }
    state
}

#[cfg(test)]
mod time_entry_evolve_tests {
    use super::*;
    use crate::modules::time_entries::core::events::ClockedOut;
    use crate::tests::fixtures::time_entries::{open_entry, t0};
    use chrono::Duration;
    use rstest::{fixture, rstest};

    #[fixture]
    fn opened() -> TimeEntriesState {
        evolve(
            TimeEntriesState::default(),
            TimeEntryEvent::ClockedIn(open_entry("time-1", "job-001", "emp-001")),
        )
    }

    #[rstest]
    fn it_should_append_a_clocked_in_entry(opened: TimeEntriesState) {
        assert_eq!(opened.entries.len(), 1);
        assert!(opened.entries[0].is_open());
    }

    #[rstest]
    fn it_should_close_the_entry_on_clock_out(opened: TimeEntriesState) {
        let clock_out_time = t0() + Duration::seconds(130);
        let closed = evolve(
            opened,
            TimeEntryEvent::ClockedOut(ClockedOut {
                time_entry_id: "time-1".into(),
                clock_out_time,
                duration: 2,
            }),
        );
        let entry = &closed.entries[0];
        assert_eq!(entry.status, TimeEntryStatus::ClockedOut);
        assert_eq!(entry.clock_out_time, Some(clock_out_time));
        assert_eq!(entry.duration, Some(2));
        assert_eq!(entry.clock_in_time, t0());
    }

    #[rstest]
    fn it_should_not_reclose_a_closed_entry(opened: TimeEntriesState) {
        let first = TimeEntryEvent::ClockedOut(ClockedOut {
            time_entry_id: "time-1".into(),
            clock_out_time: t0() + Duration::minutes(5),
            duration: 5,
        });
        let second = TimeEntryEvent::ClockedOut(ClockedOut {
            time_entry_id: "time-1".into(),
            clock_out_time: t0() + Duration::minutes(50),
            duration: 50,
        });
        let closed = evolve(opened, first);
        let next = evolve(closed.clone(), second);
        assert_eq!(next, closed, "state should be unchanged by a second close");
    }

    #[rstest]
    fn it_should_ignore_unknown_entries(opened: TimeEntriesState) {
        let next = evolve(
            opened.clone(),
            TimeEntryEvent::ClockedOut(ClockedOut {
                time_entry_id: "time-404".into(),
                clock_out_time: t0(),
                duration: 0,
            }),
        );
        assert_eq!(next, opened);
    }
}
