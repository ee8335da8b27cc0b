use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockOut {
    pub time_entry_id: String,
    pub clock_out_time: Timestamp,
}
