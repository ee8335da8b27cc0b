// Device-local session persistence.
//
// Responsibilities
// - Keep the token and the signed-in employee under their own keys.
// - Treat a half-present session (only one of the two keys) as signed out.

use crate::modules::identity::application::errors::IdentityError;
use crate::modules::identity::core::employee::Employee;
use crate::modules::identity::core::session::Session;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const EMPLOYEE_KEY: &str = "employee";

pub struct KeyValueSessionStore<TStore>
where
    TStore: KeyValueStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> KeyValueSessionStore<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn save(&self, session: &Session) -> Result<(), IdentityError> {
        self.store
            .set(AUTH_TOKEN_KEY, session.token.clone())
            .await?;
        self.store
            .set(EMPLOYEE_KEY, serde_json::to_string(&session.employee)?)
            .await?;
        Ok(())
    }

    pub async fn load(&self) -> Result<Option<Session>, IdentityError> {
        let Some(raw_employee) = self.store.get(EMPLOYEE_KEY).await? else {
            return Ok(None);
        };
        let Some(token) = self.store.get(AUTH_TOKEN_KEY).await? else {
            return Ok(None);
        };
        let employee: Employee = serde_json::from_str(&raw_employee)?;
        Ok(Some(Session { employee, token }))
    }

    pub async fn clear(&self) -> Result<(), IdentityError> {
        self.store
            .remove_all(&[AUTH_TOKEN_KEY, EMPLOYEE_KEY])
            .await?;
        Ok(())
    }
}
