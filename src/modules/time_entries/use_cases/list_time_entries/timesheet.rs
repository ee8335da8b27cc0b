// Timesheet read model.
//
// Purpose
// - Group an employee's entries by the UTC calendar day they were clocked in on.
// - The day list is always taken from the unfiltered entries, newest day first, so the
//   caller can offer every day while one is selected.
// - Totals count only finished entries; open entries contribute nothing.

use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timesheet {
    pub entries: Vec<TimeEntryView>,
    pub dates: Vec<NaiveDate>,
    pub selected_date: Option<NaiveDate>,
    pub total_minutes: i64,
}

impl Timesheet {
    pub fn from_views(views: Vec<TimeEntryView>, selected_date: Option<NaiveDate>) -> Self {
        let dates: BTreeSet<NaiveDate> = views.iter().map(clock_in_date).collect();
        let entries: Vec<TimeEntryView> = views
            .into_iter()
            .filter(|v| selected_date.is_none_or(|d| clock_in_date(v) == d))
            .collect();
        let total_minutes = entries.iter().filter_map(|v| v.entry.duration).sum();
        Self {
            entries,
            dates: dates.into_iter().rev().collect(),
            selected_date,
            total_minutes,
        }
    }
}

fn clock_in_date(view: &TimeEntryView) -> NaiveDate {
    view.entry.clock_in_time.date_naive()
}

pub async fn load_timesheet<TQueries>(
    queries: &TQueries,
    employee_id: Option<&str>,
    selected_date: Option<NaiveDate>,
) -> anyhow::Result<Timesheet>
where
    TQueries: TimeEntryQueries + ?Sized,
{
    let views = queries.list_entries(employee_id).await?;
    Ok(Timesheet::from_views(views, selected_date))
}
