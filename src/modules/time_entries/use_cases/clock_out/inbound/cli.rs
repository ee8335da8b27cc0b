use crate::modules::identity::core::session::Session;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::cli::render_entry;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::{Result, anyhow};
use chrono::Utc;

/// What to close: an entry by id, or the caller's open entry on a job.
pub enum ClockOutTarget {
    Entry(String),
    Job(String),
}

pub async fn clock_out<TStore>(
    state: &AppState<TStore>,
    session: &Session,
    target: ClockOutTarget,
) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    let time_entry_id = match target {
        ClockOutTarget::Entry(id) => id,
        ClockOutTarget::Job(job_id) => state
            .queries
            .active_entry(&job_id, session.employee_id())
            .await?
            .map(|view| view.entry.id)
            .ok_or_else(|| anyhow!("not clocked in on {job_id}"))?,
    };
    let view = state
        .clock_out_handler
        .handle(ClockOut {
            time_entry_id,
            clock_out_time: Utc::now(),
        })
        .await?;
    Ok(format!("Clocked out.\n{}", render_entry(&view)))
}
