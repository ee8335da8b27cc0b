// Fixed job catalog scheduled relative to a reference date.

use crate::modules::jobs::core::catalog::JobCatalog;
use crate::modules::jobs::core::job::{Job, JobStatus};
use chrono::{Days, NaiveDate, NaiveTime};

pub struct SeedJobCatalog {
    today: NaiveDate,
    jobs: Vec<Job>,
}

impl SeedJobCatalog {
    pub fn new(today: NaiveDate) -> Self {
        let seed = [
            (
                "job-001",
                "Shanghai Construction Group",
                "1000 Century Avenue, Pudong New Area, Shanghai",
                0,
                (9, 0),
                (17, 0),
                "Office building electrical system maintenance",
                Some("Bring electrical test equipment"),
            ),
            (
                "job-002",
                "Blue Sky Property Management",
                "888 Middle Huaihai Road, Xuhui District, Shanghai",
                1,
                (10, 0),
                (15, 0),
                "Annual air conditioning inspection",
                None,
            ),
            (
                "job-003",
                "Oriental Science Park",
                "500 Keyuan Road, Zhangjiang Hi-Tech Park, Shanghai",
                2,
                (8, 0),
                (12, 0),
                "Fire protection system testing",
                None,
            ),
            (
                "job-004",
                "Greentown Real Estate",
                "2000 Hongqiao Road, Minhang District, Shanghai",
                3,
                (13, 0),
                (18, 0),
                "Elevator maintenance",
                None,
            ),
            (
                "job-005",
                "Galaxy Commercial Center",
                "1788 West Nanjing Road, Jing'an District, Shanghai",
                4,
                (9, 30),
                (16, 0),
                "Water supply system inspection",
                None,
            ),
        ];

        let jobs = seed
            .into_iter()
            .map(
                |(id, customer, address, offset, start, end, description, notes)| Job {
                    id: id.to_string(),
                    customer_name: customer.to_string(),
                    customer_address: address.to_string(),
                    scheduled_date: today
                        .checked_add_days(Days::new(offset))
                        .unwrap_or(today),
                    scheduled_start_time: time_of_day(start),
                    scheduled_end_time: time_of_day(end),
                    description: description.to_string(),
                    status: JobStatus::Scheduled,
                    notes: notes.map(str::to_string),
                },
            )
            .collect();

        Self { today, jobs }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

fn time_of_day((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[async_trait::async_trait]
impl JobCatalog for SeedJobCatalog {
    async fn list_jobs(&self) -> anyhow::Result<Vec<Job>> {
        Ok(self.jobs.clone())
    }

    async fn get_job(&self, job_id: &str) -> anyhow::Result<Option<Job>> {
        Ok(self.jobs.iter().find(|job| job.id == job_id).cloned())
    }
}
