use crate::modules::time_entries::use_cases::admin_dashboard::projection::DashboardStats;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::Result;
use colored::Colorize;

pub fn render_dashboard(stats: &DashboardStats) -> String {
    let mut lines = vec![
        "Dashboard".bold().to_string(),
        format!("Active jobs:       {}", stats.active_jobs),
        format!("Clocked in now:    {}", stats.clocked_in),
        format!("Pending approval:  {}", stats.pending_approval),
        format!("Total hours:       {}", stats.total_hours),
        "Today's jobs".bold().to_string(),
    ];
    if stats.todays_jobs.is_empty() {
        lines.push("No jobs scheduled today.".yellow().to_string());
    }
    lines.extend(stats.todays_jobs.iter().map(|job| {
        format!(
            "{}  {}  {}-{}  {}",
            job.id,
            job.customer_name,
            job.scheduled_start_time.format("%H:%M"),
            job.scheduled_end_time.format("%H:%M"),
            job.status.as_str()
        )
    }));
    lines.join("\n")
}

pub async fn dashboard<TStore>(state: &AppState<TStore>) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    let stats = state.dashboard_handler.handle(state.today).await?;
    Ok(render_dashboard(&stats))
}
