use crate::modules::identity::core::employee::Employee;
use crate::shared::core::primitives::{Timestamp, prefixed_token};

/// Token prefix for sessions of locally registered employees.
pub const REGISTERED_TOKEN_PREFIX: &str = "token";

/// The signed-in employee together with the token issued at sign in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub employee: Employee,
    pub token: String,
}

impl Session {
    pub fn issue(employee: Employee, token_prefix: &str, now: Timestamp) -> Self {
        Self {
            employee,
            token: prefixed_token(token_prefix, now),
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee.id
    }

    pub fn is_admin(&self) -> bool {
        self.employee.is_admin
    }
}
