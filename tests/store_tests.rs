use tempfile::tempdir;
use worklog::errors::AppError;
use worklog::models::entry::LogEntry;
use worklog::store::LogStore;

fn entry(timestamp: i64, duration_hours: f64, description: &str) -> LogEntry {
    LogEntry {
        timestamp,
        duration_hours,
        description: description.to_string(),
    }
}

#[test]
fn append_then_read_all_round_trips() {
    let dir = tempdir().unwrap();
    let store = LogStore::new(dir.path());

    let handle = store.open_or_create("Alice", |_| true).unwrap();
    let first = entry(1609459200, 2.5, "Refactored the parser");
    let second = entry(1609462800, 0.75, "Code review");
    handle.append(&first).unwrap();
    handle.append(&second).unwrap();

    assert_eq!(handle.read_all().unwrap(), vec![first, second]);
}

#[test]
fn open_or_create_declined_fails_and_leaves_no_file() {
    let dir = tempdir().unwrap();
    let store = LogStore::new(dir.path());

    let err = store.open_or_create("Bob", |_| false).unwrap_err();
    assert!(matches!(err, AppError::UserAborted));
    assert!(!store.exists("Bob"));
    assert!(!dir.path().join("Bob.wl").exists());
}

#[test]
fn open_or_create_existing_log_skips_confirmation() {
    let dir = tempdir().unwrap();
    let store = LogStore::new(dir.path());

    store.open_or_create("Carol", |_| true).unwrap();

    // The callback must not fire once the log exists.
    let handle = store
        .open_or_create("Carol", |_| panic!("unexpected prompt"))
        .unwrap();
    assert!(handle.read_all().unwrap().is_empty());
}

#[test]
fn open_missing_log_fails_with_path() {
    let dir = tempdir().unwrap();
    let store = LogStore::new(dir.path());

    match store.open("Dave") {
        Err(AppError::NoSuchLog(path)) => assert!(path.ends_with("Dave.wl")),
        other => panic!("expected NoSuchLog, got {other:?}"),
    }
}

#[test]
fn read_all_rejects_line_with_too_few_colons() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("Eve.wl"), "1000:1.5\n").unwrap();

    let store = LogStore::new(dir.path());
    let err = store.open("Eve").unwrap().read_all().unwrap_err();
    assert!(matches!(err, AppError::CorruptRecord(_)));
}

#[test]
fn read_all_rejects_non_numeric_prefix() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("Frank.wl"), "yesterday:1.5:some work\n").unwrap();

    let store = LogStore::new(dir.path());
    let err = store.open("Frank").unwrap().read_all().unwrap_err();
    assert!(matches!(err, AppError::CorruptRecord(_)));
}

#[test]
fn read_all_reports_offending_line_number() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("Grace.wl"),
        "1000:1.0:fine\n2000:2.0:also fine\nbroken\n",
    )
    .unwrap();

    let store = LogStore::new(dir.path());
    match store.open("Grace").unwrap().read_all() {
        Err(AppError::CorruptRecord(msg)) => assert!(msg.contains("line 3")),
        other => panic!("expected CorruptRecord, got {other:?}"),
    }
}

#[test]
fn read_all_preserves_file_order() {
    let dir = tempdir().unwrap();
    let store = LogStore::new(dir.path());

    // Timestamps out of chronological order stay in file order.
    let handle = store.open_or_create("Henry", |_| true).unwrap();
    handle.append(&entry(5000, 1.0, "later clock")).unwrap();
    handle.append(&entry(1000, 2.0, "earlier clock")).unwrap();

    let read = handle.read_all().unwrap();
    assert_eq!(read[0].timestamp, 5000);
    assert_eq!(read[1].timestamp, 1000);
}
