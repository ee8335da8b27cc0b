// Employees and the built-in accounts.
//
// Purpose
// - Describe who is using the device. Two accounts always exist (one employee, one
//   administrator); everyone else registers locally.
//
// Boundaries
// - Passwords are compared in plain text. This is a local stand-in for authentication,
//   not a security boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// A locally registered employee as stored, password included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredEmployee {
    #[serde(flatten)]
    pub employee: Employee,
    pub password: String,
}

/// A built-in account: the address it logs in with, its password, and the token prefix
/// its sessions get.
pub struct BuiltInAccount {
    pub login_email: &'static str,
    pub password: &'static str,
    pub token_prefix: &'static str,
    pub employee: Employee,
}

pub fn demo_employee() -> Employee {
    Employee {
        id: "emp-001".into(),
        name: "Zhang Wei".into(),
        email: "zhangwei@example.com".into(),
        phone: "+86 138 0000 0000".into(),
        role: "Field Technician".into(),
        is_admin: false,
    }
}

pub fn admin_employee() -> Employee {
    Employee {
        id: "admin-001".into(),
        name: "Administrator".into(),
        email: "admin@example.com".into(),
        phone: "+86 138 0000 0001".into(),
        role: "System Administrator".into(),
        is_admin: true,
    }
}

pub fn built_in_accounts() -> [BuiltInAccount; 2] {
    [
        BuiltInAccount {
            login_email: "demo@example.com",
            password: "demo123",
            token_prefix: "mock-token",
            employee: demo_employee(),
        },
        BuiltInAccount {
            login_email: "admin@example.com",
            password: "admin123",
            token_prefix: "admin-token",
            employee: admin_employee(),
        },
    ]
}

/// Addresses that belong to built-in accounts and can never be registered.
pub fn is_reserved_email(email: &str) -> bool {
    built_in_accounts()
        .iter()
        .any(|account| account.login_email == email)
}
