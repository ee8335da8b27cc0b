use crate::modules::identity::adapters::outbound::session_store::KeyValueSessionStore;
use crate::modules::identity::adapters::outbound::user_directory::KeyValueUserDirectory;
use crate::modules::identity::use_cases::login::handler::LoginHandler;
use crate::modules::identity::use_cases::logout::handler::LogoutHandler;
use crate::modules::identity::use_cases::register::handler::RegisterHandler;
use crate::modules::identity::use_cases::restore_session::handler::RestoreSessionHandler;
use crate::modules::identity::use_cases::search_employees::handler::SearchEmployeesHandler;
use crate::modules::jobs::adapters::outbound::seed_catalog::SeedJobCatalog;
use crate::modules::time_entries::adapters::outbound::repository_key_value::KeyValueTimeEntryRepository;
use crate::modules::time_entries::use_cases::admin_dashboard::handler::DashboardHandler;
use crate::modules::time_entries::use_cases::clock_in::handler::ClockInHandler;
use crate::modules::time_entries::use_cases::clock_out::handler::ClockOutHandler;
use crate::modules::time_entries::use_cases::list_time_entries::handler::TimeEntryQueryService;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::review_time_entry::handler::ReviewTimeEntryHandler;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

pub type Repository<TStore> = KeyValueTimeEntryRepository<TStore>;

/// The UTC calendar day, the same boundary timesheets use for clock in times.
pub fn current_day() -> NaiveDate {
    Utc::now().date_naive()
}

pub struct AppState<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub today: NaiveDate,
    pub catalog: Arc<SeedJobCatalog>,
    pub queries: Arc<dyn TimeEntryQueries>,
    pub clock_in_handler: ClockInHandler<Repository<TStore>, SeedJobCatalog>,
    pub clock_out_handler: ClockOutHandler<Repository<TStore>, SeedJobCatalog>,
    pub dashboard_handler: DashboardHandler<Repository<TStore>, SeedJobCatalog>,
    pub review_handler: ReviewTimeEntryHandler<Repository<TStore>, SeedJobCatalog>,
    pub login_handler: LoginHandler<TStore>,
    pub register_handler: RegisterHandler<TStore>,
    pub logout_handler: LogoutHandler<TStore>,
    pub restore_session_handler: RestoreSessionHandler<TStore>,
    pub search_employees_handler: SearchEmployeesHandler<TStore>,
}

impl<TStore> AppState<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>, today: NaiveDate, conflict_retries: u32) -> Self {
        let catalog = Arc::new(SeedJobCatalog::new(today));
        let repository = Arc::new(KeyValueTimeEntryRepository::new(store.clone()));
        let users = Arc::new(KeyValueUserDirectory::new(store.clone()));
        let sessions = Arc::new(KeyValueSessionStore::new(store));

        Self {
            today,
            catalog: catalog.clone(),
            queries: Arc::new(TimeEntryQueryService::new(
                repository.clone(),
                catalog.clone(),
            )),
            clock_in_handler: ClockInHandler::new(repository.clone(), catalog.clone())
                .with_max_attempts(conflict_retries),
            clock_out_handler: ClockOutHandler::new(repository.clone(), catalog.clone())
                .with_max_attempts(conflict_retries),
            dashboard_handler: DashboardHandler::new(repository.clone(), catalog.clone()),
            review_handler: ReviewTimeEntryHandler::new(repository, catalog),
            login_handler: LoginHandler::new(users.clone(), sessions.clone()),
            register_handler: RegisterHandler::new(users.clone(), sessions.clone()),
            logout_handler: LogoutHandler::new(sessions.clone()),
            restore_session_handler: RestoreSessionHandler::new(sessions),
            search_employees_handler: SearchEmployeesHandler::new(users),
        }
    }
}

#[cfg(test)]
mod app_state_tests {
    use super::*;
    use crate::modules::jobs::core::catalog::JobCatalog;
    use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
    use crate::modules::time_entries::use_cases::list_time_entries::timesheet::load_timesheet;
    use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn an_entry_clocked_in_now_lands_on_the_current_day() {
        let now = Utc::now();
        let state = AppState::new(Arc::new(InMemoryKeyValueStore::new()), now.date_naive(), 3);
        state
            .clock_in_handler
            .handle(ClockIn {
                time_entry_id: "time-now".to_string(),
                job_id: "job-001".to_string(),
                employee_id: "emp-001".to_string(),
                clock_in_time: now,
            })
            .await
            .unwrap();

        let sheet = load_timesheet(&*state.queries, Some("emp-001"), Some(now.date_naive()))
            .await
            .unwrap();
        assert_eq!(sheet.entries.len(), 1);
        assert_eq!(sheet.dates, vec![now.date_naive()]);

        assert!(current_day() >= now.date_naive());
        let jobs = state.catalog.list_jobs().await.unwrap();
        assert_eq!(jobs[0].scheduled_date, now.date_naive());
    }
}
