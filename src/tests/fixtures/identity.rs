use crate::modules::identity::core::employee::{Employee, RegisteredEmployee};
use crate::modules::identity::use_cases::register::command::Register;
use crate::tests::fixtures::time_entries::t0;

/// A registered employee with password `secret`.
pub fn registered(id: &str, email: &str) -> RegisteredEmployee {
    RegisteredEmployee {
        employee: Employee {
            id: id.to_string(),
            name: "Li Na".to_string(),
            email: email.to_string(),
            phone: "+86 139 0000 0000".to_string(),
            role: "Field Technician".to_string(),
            is_admin: false,
        },
        password: "secret".to_string(),
    }
}

pub struct RegisterBuilder {
    inner: Register,
}

impl Default for RegisterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterBuilder {
    pub fn new() -> Self {
        Self {
            inner: Register {
                name: "Li Na".to_string(),
                email: "lina@example.com".to_string(),
                phone: "+86 139 0000 0000".to_string(),
                role: "Field Technician".to_string(),
                password: "secret".to_string(),
                now: t0(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn build(self) -> Register {
        self.inner
    }
}
