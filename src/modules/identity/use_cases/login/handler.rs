// Sign in against the built-in accounts first, then the locally registered ones.

use crate::modules::identity::adapters::outbound::session_store::KeyValueSessionStore;
use crate::modules::identity::adapters::outbound::user_directory::KeyValueUserDirectory;
use crate::modules::identity::application::errors::IdentityError;
use crate::modules::identity::core::employee::built_in_accounts;
use crate::modules::identity::core::session::{REGISTERED_TOKEN_PREFIX, Session};
use crate::modules::identity::use_cases::login::command::Login;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct LoginHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    users: Arc<KeyValueUserDirectory<TStore>>,
    sessions: Arc<KeyValueSessionStore<TStore>>,
}

impl<TStore> LoginHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(
        users: Arc<KeyValueUserDirectory<TStore>>,
        sessions: Arc<KeyValueSessionStore<TStore>>,
    ) -> Self {
        Self { users, sessions }
    }

    pub async fn handle(&self, command: Login) -> Result<Session, IdentityError> {
        let session = match self.authenticate(&command).await? {
            Some(session) => session,
            None => {
                warn!(email = %command.email, "login rejected");
                return Err(IdentityError::InvalidCredentials);
            }
        };
        self.sessions.save(&session).await?;
        info!(employee_id = %session.employee.id, "logged in");
        Ok(session)
    }

    async fn authenticate(&self, command: &Login) -> Result<Option<Session>, IdentityError> {
        if let Some(account) = built_in_accounts().into_iter().find(|account| {
            account.login_email == command.email && account.password == command.password
        }) {
            return Ok(Some(Session::issue(
                account.employee,
                account.token_prefix,
                command.now,
            )));
        }
        Ok(self
            .users
            .find_by_email(&command.email)
            .await?
            .filter(|user| user.password == command.password)
            .map(|user| Session::issue(user.employee, REGISTERED_TOKEN_PREFIX, command.now)))
    }
}

#[cfg(test)]
mod login_handler_tests {
    use super::*;
    use crate::modules::identity::adapters::outbound::session_store::AUTH_TOKEN_KEY;
    use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
    use crate::tests::fixtures::identity::registered;
    use crate::tests::fixtures::time_entries::t0;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (
        Arc<InMemoryKeyValueStore>,
        Arc<KeyValueUserDirectory<InMemoryKeyValueStore>>,
        Arc<KeyValueSessionStore<InMemoryKeyValueStore>>,
        LoginHandler<InMemoryKeyValueStore>,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let users = Arc::new(KeyValueUserDirectory::new(store.clone()));
        let sessions = Arc::new(KeyValueSessionStore::new(store.clone()));
        let handler = LoginHandler::new(users.clone(), sessions.clone());
        (store, users, sessions, handler)
    }

    fn login(email: &str, password: &str) -> Login {
        Login {
            email: email.into(),
            password: password.into(),
            now: t0(),
        }
    }

    #[rstest]
    #[case("demo@example.com", "demo123", "emp-001", "mock-token-", false)]
    #[case("admin@example.com", "admin123", "admin-001", "admin-token-", true)]
    #[tokio::test]
    async fn handle_login_accepts_built_in_accounts(
        before_each: BeforeEachReturn,
        #[case] email: &str,
        #[case] password: &str,
        #[case] employee_id: &str,
        #[case] token_prefix: &str,
        #[case] is_admin: bool,
    ) {
        let (_, _, sessions, handler) = before_each;
        let session = handler.handle(login(email, password)).await.unwrap();

        assert_eq!(session.employee_id(), employee_id);
        assert_eq!(session.is_admin(), is_admin);
        assert_eq!(
            session.token,
            format!("{token_prefix}{}", t0().timestamp_millis())
        );
        assert_eq!(sessions.load().await.unwrap(), Some(session));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_login_accepts_registered_users(before_each: BeforeEachReturn) {
        let (_, users, _, handler) = before_each;
        users.add(registered("emp-9", "li@example.com")).await.unwrap();

        let session = handler
            .handle(login("li@example.com", "secret"))
            .await
            .unwrap();
        assert_eq!(session.employee_id(), "emp-9");
        assert!(session.token.starts_with("token-"));
    }

    #[rstest]
    #[case("demo@example.com", "wrong")]
    #[case("li@example.com", "wrong")]
    #[case("nobody@example.com", "secret")]
    #[tokio::test]
    async fn handle_login_rejects_bad_credentials_without_a_session(
        before_each: BeforeEachReturn,
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let (store, users, _, handler) = before_each;
        users.add(registered("emp-9", "li@example.com")).await.unwrap();

        let result = handler.handle(login(email, password)).await;
        assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
        assert_eq!(store.get(AUTH_TOKEN_KEY).await.unwrap(), None);
    }
}
