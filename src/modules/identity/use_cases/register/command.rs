use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub password: String,
    pub now: Timestamp,
}
