use crate::modules::identity::core::session::Session;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::cli::render_entry;
use crate::modules::time_entries::use_cases::review_time_entry::command::{
    ReviewTimeEntry, Verdict,
};
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::{Result, bail};
use colored::Colorize;

pub async fn approvals<TStore>(state: &AppState<TStore>, session: &Session) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    if !session.is_admin() {
        bail!("only administrators can review time entries");
    }
    let pending = state.review_handler.pending().await?;
    let mut lines = vec![format!("{} ({})", "Pending approval".bold(), pending.len())];
    lines.extend(pending.iter().map(render_entry));
    Ok(lines.join("\n"))
}

pub async fn review<TStore>(
    state: &AppState<TStore>,
    session: &Session,
    time_entry_id: String,
    verdict: Verdict,
) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    let outcome = state
        .review_handler
        .handle(ReviewTimeEntry {
            time_entry_id,
            verdict,
            reviewer_id: session.employee_id().to_string(),
            reviewer_is_admin: session.is_admin(),
        })
        .await?;
    Ok(format!(
        "Time entry {} {}.",
        outcome.time_entry_id,
        outcome.verdict.as_str()
    ))
}
