// Builder for the ClockIn command with stable defaults.

use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use crate::shared::core::primitives::Timestamp;
use crate::tests::fixtures::time_entries::t0;

pub struct ClockInBuilder {
    inner: ClockIn,
}

impl Default for ClockInBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClockInBuilder {
    pub fn new() -> Self {
        Self {
            inner: ClockIn {
                time_entry_id: "time-fixed-0001".to_string(),
                job_id: "job-001".to_string(),
                employee_id: "emp-001".to_string(),
                clock_in_time: t0(),
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn job_id(mut self, v: impl Into<String>) -> Self {
        self.inner.job_id = v.into();
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn clock_in_time(mut self, v: Timestamp) -> Self {
        self.inner.clock_in_time = v;
        self
    }

    pub fn build(self) -> ClockIn {
        self.inner
    }
}

#[cfg(test)]
mod clock_in_builder_tests {
    use super::*;
    use chrono::Duration;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(ClockInBuilder::default().build(), ClockInBuilder::new().build());
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = ClockInBuilder::new()
            .time_entry_id("time-123")
            .job_id("job-456")
            .employee_id("emp-789")
            .clock_in_time(t0() + Duration::minutes(1))
            .build();
        assert_eq!(built.time_entry_id, "time-123");
        assert_eq!(built.job_id, "job-456");
        assert_eq!(built.employee_id, "emp-789");
        assert_eq!(built.clock_in_time, t0() + Duration::minutes(1));
    }
}
