// Clock in from the terminal. Only jobs scheduled for today accept a clock in; the ledger
// itself never consults the catalog.

use crate::modules::identity::core::session::Session;
use crate::modules::jobs::core::catalog::JobCatalog;
use crate::modules::jobs::core::job::Job;
use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::cli::render_entry;
use crate::shared::core::primitives::prefixed_id;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::{Result, anyhow, bail};
use chrono::{NaiveDate, Utc};

pub fn ensure_scheduled_today(job: &Job, today: NaiveDate) -> Result<()> {
    if job.scheduled_date != today {
        bail!(
            "{} is scheduled for {}, clock in opens on the day of the job",
            job.id,
            job.scheduled_date
        );
    }
    Ok(())
}

pub async fn clock_in<TStore>(
    state: &AppState<TStore>,
    session: &Session,
    job_id: String,
) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    let job = state
        .catalog
        .get_job(&job_id)
        .await?
        .ok_or_else(|| anyhow!("job {job_id} not found"))?;
    ensure_scheduled_today(&job, state.today)?;

    let command = ClockIn {
        time_entry_id: prefixed_id("time"),
        job_id,
        employee_id: session.employee_id().to_string(),
        clock_in_time: Utc::now(),
    };
    let view = state.clock_in_handler.handle(command).await?;
    Ok(format!("Clocked in.\n{}", render_entry(&view)))
}
