use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;
use anyhow::Result;

pub async fn logout<TStore>(state: &AppState<TStore>) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    state.logout_handler.handle().await?;
    Ok("Logged out.".to_string())
}
