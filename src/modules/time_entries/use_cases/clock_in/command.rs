// Command data type for starting work on a job.
//
// Purpose
// - Carry who clocks in where and when. The identifier and the instant are chosen by the
//   caller so the decision stays deterministic.

use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockIn {
    pub time_entry_id: String,
    pub job_id: String,
    pub employee_id: String,
    pub clock_in_time: Timestamp,
}
