// Terminal rendering of time entries and the read commands built on it.

use crate::modules::identity::core::session::Session;
use crate::modules::time_entries::core::time_entry::TimeEntryStatus;
use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::list_time_entries::timesheet::{
    Timesheet, load_timesheet,
};
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::{Result, bail};
use chrono::NaiveDate;
use colored::Colorize;

/// `1h 5m` above an hour, `5m` below it. Open entries count as zero.
pub fn format_duration(minutes: Option<i64>) -> String {
    let minutes = minutes.unwrap_or(0);
    let (hours, rest) = (minutes.div_euclid(60), minutes.rem_euclid(60));
    if hours > 0 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}

pub fn render_entry(view: &TimeEntryView) -> String {
    let entry = &view.entry;
    let status = match entry.status {
        TimeEntryStatus::ClockedIn => entry.status.as_str().green(),
        TimeEntryStatus::ClockedOut => entry.status.as_str().normal(),
    };
    let job = view.job.as_ref().map_or_else(
        || entry.job_id.clone(),
        |job| format!("{} {}", job.id, job.customer_name),
    );
    let until = entry
        .clock_out_time
        .map_or_else(|| "now".to_string(), |t| t.format("%H:%M").to_string());
    format!(
        "{}  {}  {}  {} - {}  {}",
        entry.id.dimmed(),
        status,
        job,
        entry.clock_in_time.format("%Y-%m-%d %H:%M"),
        until,
        format_duration(entry.duration)
    )
}

pub fn render_timesheet(title: &str, sheet: &Timesheet) -> String {
    let mut lines = vec![title.bold().to_string()];
    if !sheet.dates.is_empty() {
        let days: Vec<String> = sheet.dates.iter().map(NaiveDate::to_string).collect();
        lines.push(format!("Days: {}", days.join(", ")));
    }
    if sheet.entries.is_empty() {
        lines.push("No time entries.".yellow().to_string());
    }
    lines.extend(sheet.entries.iter().map(render_entry));
    lines.push(format!("Total: {}", format_duration(Some(sheet.total_minutes))));
    lines.join("\n")
}

pub async fn active<TStore>(
    state: &AppState<TStore>,
    session: &Session,
    job_id: &str,
) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    match state.queries.active_entry(job_id, session.employee_id()).await? {
        Some(view) => Ok(render_entry(&view)),
        None => Ok(format!("Not clocked in on {job_id}.")),
    }
}

pub async fn timesheet<TStore>(
    state: &AppState<TStore>,
    session: &Session,
    date: Option<NaiveDate>,
    all: bool,
) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    if all && !session.is_admin() {
        bail!("only administrators can view every timesheet");
    }
    let employee_id = (!all).then(|| session.employee_id());
    let sheet = load_timesheet(&*state.queries, employee_id, date).await?;
    let whose = if all {
        "all employees".to_string()
    } else {
        session.employee.name.clone()
    };
    let title = match date {
        Some(day) => format!("Timesheet for {whose} on {day}"),
        None => format!("Timesheet for {whose}"),
    };
    Ok(render_timesheet(&title, &sheet))
}
