use crate::modules::identity::adapters::outbound::session_store::KeyValueSessionStore;
use crate::modules::identity::application::errors::IdentityError;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;
use tracing::info;

pub struct LogoutHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    sessions: Arc<KeyValueSessionStore<TStore>>,
}

impl<TStore> LogoutHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(sessions: Arc<KeyValueSessionStore<TStore>>) -> Self {
        Self { sessions }
    }

    /// Forget the session. Time entries and registered users are kept.
    pub async fn handle(&self) -> Result<(), IdentityError> {
        self.sessions.clear().await?;
        info!("logged out");
        Ok(())
    }
}
