use chrono::{DateTime, Utc};
use uuid::Uuid;

/// All instants handled by the crate are UTC.
pub type Timestamp = DateTime<Utc>;

/// Fresh identifier of the form `<prefix>-<uuid v7>`. Time ordered, unique per call.
pub fn prefixed_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::now_v7())
}

/// Opaque session token of the form `<prefix>-<epoch millis>`.
pub fn prefixed_token(prefix: &str, now: Timestamp) -> String {
    format!("{prefix}-{}", now.timestamp_millis())
}
