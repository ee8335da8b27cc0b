use crate::modules::jobs::adapters::outbound::seed_catalog::SeedJobCatalog;
use crate::modules::time_entries::adapters::outbound::repository::TimeEntryRepository;
use crate::modules::time_entries::adapters::outbound::repository_key_value::KeyValueTimeEntryRepository;
use crate::modules::time_entries::application::errors::ApplicationError;
use crate::modules::time_entries::core::decision::DecideError;
use crate::modules::time_entries::core::time_entry::TimeEntryStatus;
use crate::modules::time_entries::use_cases::clock_in::handler::ClockInHandler;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::modules::time_entries::use_cases::clock_out::handler::ClockOutHandler;
use crate::modules::time_entries::use_cases::list_time_entries::handler::TimeEntryQueryService;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::list_time_entries::timesheet::load_timesheet;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::tests::fixtures::commands::clock_in::ClockInBuilder;
use crate::tests::fixtures::jobs::seed_catalog;
use crate::tests::fixtures::time_entries::t0;
use chrono::Duration;
use rstest::{fixture, rstest};
use std::sync::Arc;

struct Ledger<TStore>
where
    TStore: KeyValueStore + 'static,
{
    repository: Arc<KeyValueTimeEntryRepository<TStore>>,
    clock_in: ClockInHandler<KeyValueTimeEntryRepository<TStore>, SeedJobCatalog>,
    clock_out: ClockOutHandler<KeyValueTimeEntryRepository<TStore>, SeedJobCatalog>,
    queries: TimeEntryQueryService<KeyValueTimeEntryRepository<TStore>, SeedJobCatalog>,
}

fn ledger_over<TStore>(store: Arc<TStore>, catalog: SeedJobCatalog) -> Ledger<TStore>
where
    TStore: KeyValueStore + 'static,
{
    let repository = Arc::new(KeyValueTimeEntryRepository::new(store));
    let catalog = Arc::new(catalog);
    Ledger {
        clock_in: ClockInHandler::new(repository.clone(), catalog.clone()),
        clock_out: ClockOutHandler::new(repository.clone(), catalog.clone()),
        queries: TimeEntryQueryService::new(repository.clone(), catalog),
        repository,
    }
}

#[fixture]
fn ledger(seed_catalog: SeedJobCatalog) -> Ledger<InMemoryKeyValueStore> {
    ledger_over(Arc::new(InMemoryKeyValueStore::new()), seed_catalog)
}

fn clock_out_at(time_entry_id: &str, seconds_after_t0: i64) -> ClockOut {
    ClockOut {
        time_entry_id: time_entry_id.to_string(),
        clock_out_time: t0() + Duration::seconds(seconds_after_t0),
    }
}

#[rstest]
#[tokio::test]
async fn scenarios_clock_in_twice_then_out_then_unknown(ledger: Ledger<InMemoryKeyValueStore>) {
    let opened = ledger
        .clock_in
        .handle(ClockInBuilder::new().time_entry_id("time-a").build())
        .await
        .unwrap();
    assert_eq!(opened.entry.status, TimeEntryStatus::ClockedIn);
    assert_eq!(opened.entry.clock_out_time, None);
    assert_eq!(opened.entry.duration, None);

    let again = ledger
        .clock_in
        .handle(
            ClockInBuilder::new()
                .time_entry_id("time-b")
                .clock_in_time(t0() + Duration::seconds(1))
                .build(),
        )
        .await;
    assert!(matches!(
        again,
        Err(ApplicationError::Domain(DecideError::AlreadyClockedIn))
    ));

    let closed = ledger
        .clock_out
        .handle(clock_out_at("time-a", 130))
        .await
        .unwrap();
    assert_eq!(closed.entry.duration, Some(2));
    assert_eq!(closed.entry.status, TimeEntryStatus::ClockedOut);

    let unknown = ledger.clock_out.handle(clock_out_at("time-zzz", 10)).await;
    assert!(matches!(
        unknown,
        Err(ApplicationError::Domain(DecideError::NotFound))
    ));
}

#[rstest]
#[case(0, 0)]
#[case(59, 0)]
#[case(60, 1)]
#[case(61, 1)]
#[case(130, 2)]
#[case(3_599, 59)]
#[case(3_600, 60)]
#[case(86_399, 1_439)]
#[tokio::test]
async fn duration_is_the_floor_of_elapsed_minutes(
    ledger: Ledger<InMemoryKeyValueStore>,
    #[case] elapsed_seconds: i64,
    #[case] minutes: i64,
) {
    ledger.clock_in.handle(ClockInBuilder::new().build()).await.unwrap();
    let closed = ledger
        .clock_out
        .handle(clock_out_at("time-fixed-0001", elapsed_seconds))
        .await
        .unwrap();
    assert_eq!(closed.entry.duration, Some(minutes));
    assert_eq!(
        closed.entry.clock_out_time,
        Some(t0() + Duration::seconds(elapsed_seconds))
    );
}

#[rstest]
#[tokio::test]
async fn second_clock_out_is_rejected_and_changes_nothing(
    ledger: Ledger<InMemoryKeyValueStore>,
) {
    ledger.clock_in.handle(ClockInBuilder::new().build()).await.unwrap();
    ledger
        .clock_out
        .handle(clock_out_at("time-fixed-0001", 300))
        .await
        .unwrap();
    let after_first = ledger.repository.load().await.unwrap();

    let second = ledger
        .clock_out
        .handle(clock_out_at("time-fixed-0001", 900))
        .await;
    assert!(matches!(
        second,
        Err(ApplicationError::Domain(DecideError::AlreadyClockedOut))
    ));
    let after_second = ledger.repository.load().await.unwrap();
    assert_eq!(after_second.state, after_first.state);
    assert_eq!(after_second.revision, after_first.revision);
}

#[rstest]
#[tokio::test]
async fn clocking_in_again_after_a_close_opens_an_independent_entry(
    ledger: Ledger<InMemoryKeyValueStore>,
) {
    ledger
        .clock_in
        .handle(ClockInBuilder::new().time_entry_id("time-1").build())
        .await
        .unwrap();
    ledger
        .clock_out
        .handle(clock_out_at("time-1", 600))
        .await
        .unwrap();
    ledger
        .clock_in
        .handle(
            ClockInBuilder::new()
                .time_entry_id("time-2")
                .clock_in_time(t0() + Duration::minutes(15))
                .build(),
        )
        .await
        .unwrap();

    let active = ledger
        .queries
        .active_entry("job-001", "emp-001")
        .await
        .unwrap()
        .expect("an open entry");
    assert_eq!(active.entry.id, "time-2");

    let all = ledger.queries.list_entries(Some("emp-001")).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].entry.status, TimeEntryStatus::ClockedOut);
    assert_eq!(all[0].entry.duration, Some(10));
    assert_eq!(all[1].entry.status, TimeEntryStatus::ClockedIn);
}

#[rstest]
#[tokio::test]
async fn never_more_than_one_open_entry_per_job_and_employee(
    ledger: Ledger<InMemoryKeyValueStore>,
) {
    // Deterministic mix of taps on one (job, employee) pair.
    let mut seed: u64 = 0x5eed;
    let mut last_id: Option<String> = None;
    for step in 0..200_i64 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let at = t0() + Duration::seconds(step * 45);
        if seed >> 63 == 0 {
            let id = format!("time-{step}");
            if ledger
                .clock_in
                .handle(
                    ClockInBuilder::new()
                        .time_entry_id(id.clone())
                        .clock_in_time(at)
                        .build(),
                )
                .await
                .is_ok()
            {
                last_id = Some(id);
            }
        } else if let Some(id) = &last_id {
            let _ = ledger
                .clock_out
                .handle(ClockOut {
                    time_entry_id: id.clone(),
                    clock_out_time: at,
                })
                .await;
        }

        let open = ledger
            .repository
            .load()
            .await
            .unwrap()
            .state
            .entries
            .iter()
            .filter(|e| e.is_open())
            .count();
        assert!(open <= 1, "step {step}: {open} open entries");
    }
}

#[rstest]
#[tokio::test]
async fn entries_survive_a_restart_with_the_file_store(seed_catalog: SeedJobCatalog) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("device").join("store.json");

    {
        let ledger = ledger_over(Arc::new(FileKeyValueStore::new(path.clone())), seed_catalog);
        ledger.clock_in.handle(ClockInBuilder::new().build()).await.unwrap();
        ledger
            .clock_out
            .handle(clock_out_at("time-fixed-0001", 5_400))
            .await
            .unwrap();
    }

    let reopened = ledger_over(
        Arc::new(FileKeyValueStore::new(path)),
        SeedJobCatalog::new(t0().date_naive()),
    );
    let sheet = load_timesheet(&reopened.queries, Some("emp-001"), Some(t0().date_naive()))
        .await
        .unwrap();
    assert_eq!(sheet.entries.len(), 1);
    assert_eq!(sheet.total_minutes, 90);
    assert_eq!(
        sheet.entries[0].job.as_ref().map(|j| j.id.as_str()),
        Some("job-001")
    );
}
