use crate::shared::infrastructure::key_value_store::KeyValueStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email {0} is already registered")]
    EmailAlreadyRegistered(String),

    #[error("email {0} is not available")]
    EmailUnavailable(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error(transparent)]
    Store(#[from] KeyValueStoreError),

    #[error("stored identity data is unreadable: {0}")]
    Serialization(#[from] serde_json::Error),
}
