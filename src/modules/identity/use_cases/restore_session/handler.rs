use crate::modules::identity::adapters::outbound::session_store::KeyValueSessionStore;
use crate::modules::identity::application::errors::IdentityError;
use crate::modules::identity::core::session::Session;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;
use tracing::debug;

pub struct RestoreSessionHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    sessions: Arc<KeyValueSessionStore<TStore>>,
}

impl<TStore> RestoreSessionHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(sessions: Arc<KeyValueSessionStore<TStore>>) -> Self {
        Self { sessions }
    }

    /// The session left by the last login on this device, if any.
    pub async fn handle(&self) -> Result<Option<Session>, IdentityError> {
        let session = self.sessions.load().await?;
        debug!(
            employee_id = session.as_ref().map(|s| s.employee.id.as_str()),
            "restored session"
        );
        Ok(session)
    }
}
