use chrono::{DateTime, Duration, Local, TimeZone};
use gymcheck::core::session::{AttendanceSession, ScanOutcome};
use gymcheck::models::attendance_kind::AttendanceKind;

fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 5, h, m, s).unwrap()
}

#[test]
fn three_scans_produce_entry_exit_entry() {
    let mut session = AttendanceSession::new("alice", "gym123");

    let t1 = at(9, 0, 0);
    let t2 = at(10, 15, 0);
    let t3 = at(18, 30, 0);

    session.record_scan_at(t1);
    session.record_scan_at(t2);
    session.record_scan_at(t3);

    let log = session.log();
    assert_eq!(log.len(), 3);
    assert_eq!((log[0].kind, log[0].timestamp), (AttendanceKind::Entry, t1));
    assert_eq!((log[1].kind, log[1].timestamp), (AttendanceKind::Exit, t2));
    assert_eq!((log[2].kind, log[2].timestamp), (AttendanceKind::Entry, t3));
}

#[test]
fn scans_strictly_alternate_starting_with_entry() {
    let mut session = AttendanceSession::new("alice", "gym123");

    for i in 0..25 {
        let ev = session.record_scan();
        let expected = if i % 2 == 0 {
            AttendanceKind::Entry
        } else {
            AttendanceKind::Exit
        };
        assert_eq!(ev.kind, expected, "scan #{i}");
        assert_eq!(session.log().len(), i + 1);
    }

    for pair in session.log().windows(2) {
        assert_ne!(pair[0].kind, pair[1].kind);
    }
}

#[test]
fn entry_follows_exit_and_empty_log() {
    let mut session = AttendanceSession::new("bob", "gym9");
    assert!(!session.is_checked_in());

    assert_eq!(session.record_scan_at(at(7, 0, 0)).kind, AttendanceKind::Entry);
    assert!(session.is_checked_in());

    assert_eq!(session.record_scan_at(at(8, 0, 0)).kind, AttendanceKind::Exit);
    assert!(!session.is_checked_in());

    assert_eq!(session.record_scan_at(at(9, 0, 0)).kind, AttendanceKind::Entry);
}

#[test]
fn record_scan_ignores_wall_clock_order() {
    // kind depends only on the previous event, not on timestamps
    let mut session = AttendanceSession::new("alice", "gym123");
    session.record_scan_at(at(12, 0, 0));
    let ev = session.record_scan_at(at(11, 0, 0));

    assert_eq!(ev.kind, AttendanceKind::Exit);
    assert_eq!(session.log()[1].timestamp, at(11, 0, 0));
}

#[test]
fn session_carries_explicit_user_and_gym() {
    let session = AttendanceSession::new("carol", "downtown-42");
    assert_eq!(session.username(), "carol");
    assert_eq!(session.gym_id(), "downtown-42");
    assert_eq!(session.payload(), "downtown-42");
    assert!(session.log().is_empty());
    assert!(session.last_event().is_none());
}

#[test]
fn without_guard_submit_scan_always_records() {
    let mut session = AttendanceSession::new("alice", "gym123");
    assert!(session.min_interval().is_none());

    let t = at(9, 0, 0);
    assert!(session.submit_scan_at(t).is_recorded());
    assert!(session.submit_scan_at(t).is_recorded());
    assert_eq!(session.log().len(), 2);
}

#[test]
fn guard_debounces_scans_inside_interval() {
    let mut session =
        AttendanceSession::new("alice", "gym123").with_min_interval(Duration::seconds(60));

    let first = session.submit_scan_at(at(9, 0, 0));
    assert!(first.is_recorded());

    match session.submit_scan_at(at(9, 0, 10)) {
        ScanOutcome::Debounced { last, retry_after } => {
            assert_eq!(last.kind, AttendanceKind::Entry);
            assert_eq!(retry_after, Duration::seconds(50));
        }
        other => panic!("expected debounce, got {other:?}"),
    }
    assert_eq!(session.log().len(), 1);

    let later = session.submit_scan_at(at(9, 1, 1));
    assert_eq!(later.event().map(|e| e.kind), Some(AttendanceKind::Exit));
    assert_eq!(session.log().len(), 2);
}

#[test]
fn guard_does_not_affect_record_scan() {
    let mut session =
        AttendanceSession::new("alice", "gym123").with_min_interval(Duration::minutes(5));

    session.record_scan_at(at(9, 0, 0));
    session.record_scan_at(at(9, 0, 1));
    assert_eq!(session.log().len(), 2);
}

#[test]
fn zero_interval_disables_guard() {
    let session = AttendanceSession::new("alice", "gym123").with_min_interval(Duration::zero());
    assert!(session.min_interval().is_none());
}

#[test]
fn visits_pair_entries_with_exits() {
    let mut session = AttendanceSession::new("alice", "gym123");
    session.record_scan_at(at(9, 0, 0));
    session.record_scan_at(at(10, 30, 0));
    session.record_scan_at(at(18, 0, 0));

    let visits = session.visits();
    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0].duration_minutes(), Some(90));
    assert!(visits[1].is_open());
    assert_eq!(visits[1].duration_minutes(), None);
    assert_eq!(session.total_minutes(), 90);
}

#[test]
fn line_driven_session_scans_lists_and_quits() {
    use gymcheck::cli::commands::scan::run_session;
    use std::io::Cursor;

    let mut session = AttendanceSession::new("alice", "gym123");
    let mut out: Vec<u8> = Vec::new();

    run_session(&mut session, Cursor::new("\nscan\nl\nfoo\nq\ns\n"), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(session.log().len(), 2);
    assert!(!session.is_checked_in());
    assert!(text.contains("logged at"));
    assert!(text.contains("  1. "));
    assert!(text.contains("  2. "));
    assert!(text.contains("Unknown command 'foo'"));
}

#[test]
fn listing_an_empty_session() {
    use gymcheck::cli::commands::scan::run_session;
    use std::io::Cursor;

    let mut session = AttendanceSession::new("alice", "gym123");
    let mut out: Vec<u8> = Vec::new();
    run_session(&mut session, Cursor::new("log\n"), &mut out).unwrap();

    assert!(String::from_utf8(out).unwrap().contains("No scans yet."));
    assert!(session.log().is_empty());
}

#[test]
fn kind_toggles_and_names() {
    assert_eq!(AttendanceKind::Entry.toggled(), AttendanceKind::Exit);
    assert_eq!(AttendanceKind::Exit.as_str(), "exit");
}

#[test]
fn debounced_scans_are_reported_on_the_session_output() {
    use gymcheck::cli::commands::scan::run_session;
    use std::io::Cursor;

    let mut session =
        AttendanceSession::new("alice", "gym123").with_min_interval(Duration::hours(1));
    let mut out: Vec<u8> = Vec::new();
    run_session(&mut session, Cursor::new("s\ns\n"), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(session.log().len(), 1);
    assert!(text.contains("Scan ignored: last entry was at"));
}

#[test]
fn scan_interval_bounds() {
    use gymcheck::cli::commands::scan::scan_interval;
    use gymcheck::core::session::MAX_MIN_INTERVAL_SECS;
    use gymcheck::errors::AppError;

    assert_eq!(scan_interval(0).unwrap(), Duration::zero());
    assert_eq!(
        scan_interval(MAX_MIN_INTERVAL_SECS).unwrap(),
        Duration::seconds(MAX_MIN_INTERVAL_SECS)
    );
    assert!(matches!(
        scan_interval(i64::MAX),
        Err(AppError::InvalidInterval(..))
    ));
    assert!(matches!(scan_interval(-5), Err(AppError::InvalidInterval(..))));
}
