// A scheduled unit of field work.
//
// Jobs are read-only seed data; nothing in the crate creates or updates them.
// The serialized shape mirrors the stored device format (camelCase, `HH:MM` times).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    /// Scheduled and in-progress jobs still need someone on site.
    pub fn is_active(self) -> bool {
        matches!(self, JobStatus::Scheduled | JobStatus::InProgress)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Scheduled => "scheduled",
            JobStatus::InProgress => "in-progress",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub customer_name: String,
    pub customer_address: String,
    pub scheduled_date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub scheduled_start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub scheduled_end_time: NaiveTime,
    pub description: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
