use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use sleepy::api::SleepApi;
use sleepy::core::add::AddLogic;
use sleepy::core::dashboard::Dashboard;
use sleepy::core::del::DeleteLogic;
use sleepy::core::replay::ReplayCell;
use sleepy::core::time_resolver::TimeParsePolicy;
use sleepy::errors::{AppError, AppResult};
use sleepy::models::entry::Entry;
use sleepy::models::new_entry::NewEntry;
use sleepy::models::stats::Stats;

/// In-memory API used to observe what the dashboard asks for.
#[derive(Default)]
struct MemoryApi {
    entries: Mutex<Vec<Entry>>,
    posted: Mutex<Vec<NewEntry>>,
    entry_fetches: AtomicUsize,
    stats_fetches: AtomicUsize,
    fail_mutations: bool,
    fail_fetches: AtomicBool,
}

impl MemoryApi {
    fn with(raw: &[&str]) -> Self {
        Self {
            entries: Mutex::new(Entry::parse_all(raw).unwrap()),
            ..Default::default()
        }
    }
}

impl SleepApi for MemoryApi {
    fn get_entries(&self) -> AppResult<Vec<Entry>> {
        self.entry_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(AppError::Api {
                status: 503,
                message: "busy".into(),
            });
        }
        Ok(self.entries.lock().unwrap().clone())
    }

    fn add_entry(&self, entry: &NewEntry) -> AppResult<()> {
        if self.fail_mutations {
            return Err(AppError::Api {
                status: 500,
                message: "disk full".into(),
            });
        }
        self.posted.lock().unwrap().push(entry.clone());
        self.entries.lock().unwrap().push(Entry::parse(&entry.time)?);
        Ok(())
    }

    fn remove_entry(&self) -> AppResult<()> {
        if self.fail_mutations {
            return Err(AppError::Api {
                status: 500,
                message: "disk full".into(),
            });
        }
        self.entries.lock().unwrap().pop();
        Ok(())
    }

    fn get_stats(&self) -> AppResult<Stats> {
        self.stats_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(Stats {
            avg_awake: "16h".into(),
            ..Default::default()
        })
    }
}

#[test]
fn test_fetches_once_and_caches() {
    let cell: ReplayCell<u32> = ReplayCell::new();
    let calls = AtomicUsize::new(0);

    for _ in 0..3 {
        let v = cell
            .get_or_fetch(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(7)
            })
            .unwrap();
        assert_eq!(v, 7);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_late_subscriber_gets_last_value() {
    let cell: ReplayCell<u32> = ReplayCell::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    cell.reload(|| Ok(1)).unwrap();
    cell.reload(|| Ok(2)).unwrap();

    let sink = Arc::clone(&seen);
    cell.subscribe(move |v| sink.lock().unwrap().push(*v));
    assert_eq!(*seen.lock().unwrap(), vec![2]);

    cell.reload(|| Ok(3)).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![2, 3]);
}

#[test]
fn test_failed_reload_keeps_value() {
    let cell: ReplayCell<u32> = ReplayCell::new();
    let notified = Arc::new(AtomicUsize::new(0));

    cell.reload(|| Ok(5)).unwrap();
    let counter = Arc::clone(&notified);
    cell.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let err = cell.reload(|| Err(AppError::Other("offline".into())));
    assert!(err.is_err());
    assert_eq!(cell.latest(), Some(5));
    assert_eq!(notified.load(Ordering::SeqCst), 1);

    cell.invalidate();
    assert_eq!(cell.latest(), None);
}

#[test]
fn test_concurrent_readers_share_one_fetch() {
    let cell: ReplayCell<Vec<u32>> = ReplayCell::new();
    let calls = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                let v = cell
                    .get_or_fetch(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        thread::sleep(Duration::from_millis(30));
                        Ok(vec![1, 2, 3])
                    })
                    .unwrap();
                assert_eq!(v, vec![1, 2, 3]);
            });
        }
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_add_reloads_entries_once() {
    let api = MemoryApi::with(&["2024-03-01T00:30:00"]);
    let dashboard = Dashboard::new(&api);
    let seen = Arc::new(Mutex::new(Vec::new()));

    assert_eq!(dashboard.entries().unwrap().len(), 1);
    let sink = Arc::clone(&seen);
    dashboard.on_entries(move |list| sink.lock().unwrap().push(list.len()));

    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let ts = AddLogic::apply(&dashboard, date, "7:15am", true, TimeParsePolicy::Lenient).unwrap();

    assert_eq!(ts.to_wire(), "2024-03-01T07:15:00");
    assert_eq!(
        api.posted.lock().unwrap()[0],
        NewEntry {
            time: "2024-03-01T07:15:00".into(),
            estimated: true,
        }
    );
    assert_eq!(api.entry_fetches.load(Ordering::SeqCst), 2);
    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    // nobody asked for stats
    assert_eq!(api.stats_fetches.load(Ordering::SeqCst), 0);
}

#[test]
fn test_watched_stats_are_reloaded() {
    let api = MemoryApi::with(&["2024-03-01T00:30:00", "2024-03-01T07:00:00"]);
    let dashboard = Dashboard::new(&api);

    assert_eq!(dashboard.stats().unwrap().avg_awake, "16h");
    DeleteLogic::apply(&dashboard).unwrap();

    assert_eq!(api.stats_fetches.load(Ordering::SeqCst), 2);
    assert_eq!(dashboard.entries().unwrap().len(), 1);
}

#[test]
fn test_strict_add_sends_nothing() {
    let api = MemoryApi::default();
    let dashboard = Dashboard::new(&api);
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let res = AddLogic::apply(&dashboard, date, "12pm", false, TimeParsePolicy::Strict);
    assert!(matches!(res, Err(AppError::InvalidTime(_))));
    assert!(api.posted.lock().unwrap().is_empty());
}

#[test]
fn test_failed_mutation_resets_cache() {
    let api = MemoryApi {
        fail_mutations: true,
        ..MemoryApi::with(&["2024-03-01T00:30:00"])
    };
    let dashboard = Dashboard::new(&api);
    dashboard.entries().unwrap();

    match dashboard.remove_last() {
        Err(AppError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "disk full");
        }
        other => panic!("expected API error, got {:?}", other),
    }

    // cache was dropped: next read goes back to the server
    dashboard.entries().unwrap();
    assert_eq!(api.entry_fetches.load(Ordering::SeqCst), 2);
}

#[test]
fn test_delete_preview_is_latest_entry() {
    let api = MemoryApi::with(&["2024-03-01T00:30:00", "2024-03-01T07:00:00"]);
    let dashboard = Dashboard::new(&api);
    let last = DeleteLogic::preview(&dashboard).unwrap();
    assert_eq!(last.get_date_time(), "2024-03-01 07:00");

    let empty = MemoryApi::default();
    assert!(DeleteLogic::preview(&Dashboard::new(&empty)).is_err());
}

#[test]
fn test_saved_add_is_ok_when_refresh_fails() {
    let api = MemoryApi::with(&["2024-03-01T00:30:00"]);
    let dashboard = Dashboard::new(&api);
    assert_eq!(dashboard.entries().unwrap().len(), 1);

    api.fail_fetches.store(true, Ordering::SeqCst);
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let ts = AddLogic::apply(&dashboard, date, "7:15am", false, TimeParsePolicy::Lenient).unwrap();

    assert_eq!(ts.to_wire(), "2024-03-01T07:15:00");
    assert_eq!(api.posted.lock().unwrap().len(), 1);
    // stale list was dropped rather than served
    assert!(dashboard.entries().is_err());

    api.fail_fetches.store(false, Ordering::SeqCst);
    assert_eq!(dashboard.entries().unwrap().len(), 2);
}

#[test]
fn test_saved_delete_is_ok_when_refresh_fails() {
    let api = MemoryApi::with(&["2024-03-01T00:30:00", "2024-03-01T07:00:00"]);
    let dashboard = Dashboard::new(&api);
    dashboard.entries().unwrap();

    api.fail_fetches.store(true, Ordering::SeqCst);
    DeleteLogic::apply(&dashboard).unwrap();
    assert_eq!(api.entries.lock().unwrap().len(), 1);

    api.fail_fetches.store(false, Ordering::SeqCst);
    assert_eq!(dashboard.entries().unwrap().len(), 1);
}

#[test]
fn test_concurrent_subscribers_see_final_value() {
    let cell = Arc::new(ReplayCell::<u32>::new());
    cell.reload(|| Ok(0)).unwrap();

    let writer = {
        let cell = Arc::clone(&cell);
        thread::spawn(move || {
            for i in 1..=200u32 {
                cell.reload(|| Ok(i)).unwrap();
            }
        })
    };

    let mut sinks = Vec::new();
    for _ in 0..50 {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        cell.subscribe(move |v| *sink.lock().unwrap() = Some(*v));
        sinks.push(seen);
    }
    writer.join().unwrap();

    for seen in sinks {
        assert_eq!(*seen.lock().unwrap(), Some(200));
    }
}
