use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub email: String,
    pub password: String,
    pub now: Timestamp,
}
