// Job schedule commands.

use crate::modules::identity::core::session::Session;
use crate::modules::jobs::core::catalog::JobCatalog;
use crate::modules::jobs::core::job::Job;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use clap::Subcommand;
use colored::Colorize;
use std::collections::HashSet;

#[derive(Debug, Subcommand)]
pub enum JobsCommands {
    /// List the scheduled jobs
    List,
    /// Show one job in full
    Show {
        /// Job id, e.g. job-001
        job_id: String,
    },
}

/// Routes a jobs command. With a session, `list` marks the jobs the employee is clocked in on.
pub async fn handle_jobs_command<TStore>(
    command: JobsCommands,
    state: &AppState<TStore>,
    session: Option<&Session>,
) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    match command {
        JobsCommands::List => {
            let jobs = state.catalog.list_jobs().await?;
            let working = match session {
                Some(session) => working_job_ids(state, session).await?,
                None => HashSet::new(),
            };
            Ok(jobs
                .iter()
                .map(|job| render_job_summary(job, state.today, working.contains(&job.id)))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        JobsCommands::Show { job_id } => {
            let job = state
                .catalog
                .get_job(&job_id)
                .await?
                .ok_or_else(|| anyhow!("job {job_id} not found"))?;
            Ok(render_job_details(&job))
        }
    }
}

async fn working_job_ids<TStore>(
    state: &AppState<TStore>,
    session: &Session,
) -> Result<HashSet<String>>
where
    TStore: KeyValueStore + 'static,
{
    Ok(state
        .queries
        .list_entries(Some(session.employee_id()))
        .await?
        .into_iter()
        .filter(|view| view.entry.is_open())
        .map(|view| view.entry.job_id)
        .collect())
}

/// `Today`, `Tomorrow` or the date itself.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

fn render_job_summary(job: &Job, today: NaiveDate, working: bool) -> String {
    let line = format!(
        "{}  {:<10}  {}-{}  {}  {}",
        job.id.bold(),
        day_label(job.scheduled_date, today),
        job.scheduled_start_time.format("%H:%M"),
        job.scheduled_end_time.format("%H:%M"),
        job.customer_name,
        job.status.as_str()
    );
    if working {
        format!("{line}  {}", "clocked in, working".green())
    } else {
        line
    }
}

fn render_job_details(job: &Job) -> String {
    let mut lines = vec![
        format!("{}  {}", job.id.bold(), job.customer_name),
        format!("Address:     {}", job.customer_address),
        format!(
            "Scheduled:   {} {}-{}",
            job.scheduled_date,
            job.scheduled_start_time.format("%H:%M"),
            job.scheduled_end_time.format("%H:%M")
        ),
        format!("Status:      {}", job.status.as_str()),
        format!("Description: {}", job.description),
    ];
    if let Some(notes) = &job.notes {
        lines.push(format!("Notes:       {notes}"));
    }
    lines.join("\n")
}
