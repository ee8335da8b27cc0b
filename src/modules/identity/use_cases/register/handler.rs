// Create a local employee account and sign it in.

use crate::modules::identity::adapters::outbound::session_store::KeyValueSessionStore;
use crate::modules::identity::adapters::outbound::user_directory::KeyValueUserDirectory;
use crate::modules::identity::application::errors::IdentityError;
use crate::modules::identity::core::employee::{Employee, RegisteredEmployee, is_reserved_email};
use crate::modules::identity::core::session::{REGISTERED_TOKEN_PREFIX, Session};
use crate::modules::identity::use_cases::register::command::Register;
use crate::shared::core::primitives::prefixed_id;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct RegisterHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    users: Arc<KeyValueUserDirectory<TStore>>,
    sessions: Arc<KeyValueSessionStore<TStore>>,
}

impl<TStore> RegisterHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(
        users: Arc<KeyValueUserDirectory<TStore>>,
        sessions: Arc<KeyValueSessionStore<TStore>>,
    ) -> Self {
        Self { users, sessions }
    }

    pub async fn handle(&self, command: Register) -> Result<Session, IdentityError> {
        let result = self.register(command).await;
        if let Err(e) = &result {
            warn!(error = %e, "registration rejected");
        }
        result
    }

    async fn register(&self, command: Register) -> Result<Session, IdentityError> {
        for (field, value) in [
            ("name", &command.name),
            ("email", &command.email),
            ("password", &command.password),
        ] {
            if value.trim().is_empty() {
                return Err(IdentityError::MissingField(field));
            }
        }
        if self.users.find_by_email(&command.email).await?.is_some() {
            return Err(IdentityError::EmailAlreadyRegistered(command.email));
        }
        if is_reserved_email(&command.email) {
            return Err(IdentityError::EmailUnavailable(command.email));
        }

        let employee = Employee {
            id: prefixed_id("emp"),
            name: command.name,
            email: command.email,
            phone: command.phone,
            role: command.role,
            is_admin: false,
        };
        self.users
            .add(RegisteredEmployee {
                employee: employee.clone(),
                password: command.password,
            })
            .await?;

        let session = Session::issue(employee, REGISTERED_TOKEN_PREFIX, command.now);
        self.sessions.save(&session).await?;
        info!(employee_id = %session.employee.id, "registered");
        Ok(session)
    }
}
