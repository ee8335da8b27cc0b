// Locally registered employees, stored as one JSON array.

use crate::modules::identity::application::errors::IdentityError;
use crate::modules::identity::core::employee::RegisteredEmployee;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

pub const REGISTERED_USERS_KEY: &str = "registered_users";

pub struct KeyValueUserDirectory<TStore>
where
    TStore: KeyValueStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> KeyValueUserDirectory<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<RegisteredEmployee>, IdentityError> {
        Ok(self.load().await?.0)
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<RegisteredEmployee>, IdentityError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|user| user.employee.email == email))
    }

    /// Append a user unless the email is taken. A concurrent append surfaces as a store
    /// conflict rather than overwriting the other registration.
    pub async fn add(&self, user: RegisteredEmployee) -> Result<(), IdentityError> {
        let (mut users, revision) = self.load().await?;
        if users.iter().any(|u| u.employee.email == user.employee.email) {
            return Err(IdentityError::EmailAlreadyRegistered(user.employee.email));
        }
        users.push(user);
        self.store
            .compare_and_set(
                REGISTERED_USERS_KEY,
                revision.as_deref(),
                serde_json::to_string(&users)?,
            )
            .await?;
        Ok(())
    }

    async fn load(&self) -> Result<(Vec<RegisteredEmployee>, Option<String>), IdentityError> {
        let raw = self.store.get(REGISTERED_USERS_KEY).await?;
        let users = match raw.as_deref() {
            Some(raw) => serde_json::from_str(raw)?,
            None => Vec::new(),
        };
        Ok((users, raw))
    }
}

#[cfg(test)]
mod key_value_user_directory_tests {
    use super::*;
    use crate::tests::fixtures::identity::registered;
    use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn directory() -> KeyValueUserDirectory<InMemoryKeyValueStore> {
        KeyValueUserDirectory::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_empty(directory: KeyValueUserDirectory<InMemoryKeyValueStore>) {
        assert!(directory.list().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_add_and_find_users(directory: KeyValueUserDirectory<InMemoryKeyValueStore>) {
        directory.add(registered("emp-1", "a@example.com")).await.unwrap();
        directory.add(registered("emp-2", "b@example.com")).await.unwrap();

        assert_eq!(directory.list().await.unwrap().len(), 2);
        let found = directory.find_by_email("b@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.employee.id), Some("emp-2".to_string()));
        assert!(directory.find_by_email("c@example.com").await.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_duplicate_email(
        directory: KeyValueUserDirectory<InMemoryKeyValueStore>,
    ) {
        directory.add(registered("emp-1", "a@example.com")).await.unwrap();
        let result = directory.add(registered("emp-2", "a@example.com")).await;
        assert!(
            matches!(result, Err(IdentityError::EmailAlreadyRegistered(e)) if e == "a@example.com")
        );
        assert_eq!(directory.list().await.unwrap().len(), 1);
    }
}
