// Employee lookup for administrators: built-in accounts plus local registrations,
// matched case-insensitively on name or email.

use crate::modules::identity::adapters::outbound::user_directory::KeyValueUserDirectory;
use crate::modules::identity::application::errors::IdentityError;
use crate::modules::identity::core::employee::{Employee, admin_employee, demo_employee};
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

pub struct SearchEmployeesHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    users: Arc<KeyValueUserDirectory<TStore>>,
}

impl<TStore> SearchEmployeesHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(users: Arc<KeyValueUserDirectory<TStore>>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: &str) -> Result<Vec<Employee>, IdentityError> {
        let needle = query.trim().to_lowercase();
        let registered = self.users.list().await?.into_iter().map(|u| u.employee);
        Ok([demo_employee(), admin_employee()]
            .into_iter()
            .chain(registered)
            .filter(|e| {
                e.name.to_lowercase().contains(&needle) || e.email.to_lowercase().contains(&needle)
            })
            .collect())
    }
}
