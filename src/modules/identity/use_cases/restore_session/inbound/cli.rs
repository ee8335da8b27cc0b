use crate::modules::identity::core::session::Session;
use crate::modules::identity::use_cases::login::inbound::cli::render_session;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::{Result, anyhow};

pub async fn current_session<TStore>(state: &AppState<TStore>) -> Result<Option<Session>>
where
    TStore: KeyValueStore + 'static,
{
    Ok(state.restore_session_handler.handle().await?)
}

/// The stored session, or an error telling the user to log in.
pub async fn require_session<TStore>(state: &AppState<TStore>) -> Result<Session>
where
    TStore: KeyValueStore + 'static,
{
    current_session(state)
        .await?
        .ok_or_else(|| anyhow!("not logged in, run `login` first"))
}

pub async fn whoami<TStore>(state: &AppState<TStore>) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    Ok(match state.restore_session_handler.handle().await? {
        Some(session) => render_session(&session),
        None => "Not logged in.".to_string(),
    })
}
