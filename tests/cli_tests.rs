use chrono::{Datelike, Local};
use predicates::prelude::*;
use std::fs;

mod common;
use common::{gym, init_db, init_db_with_visits, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    gym()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized at"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_visit_reports_month_count() {
    let db_path = setup_test_db("visit_month_count");
    init_db(&db_path);

    gym()
        .args([
            "--db", &db_path, "visit", "--user", "alice", "--gym", "gym123", "2024-03-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Visit on 2024-03-05 recorded for alice at gym123 (1 this month).",
        ));

    gym()
        .args([
            "--db", &db_path, "visit", "--user", "alice", "--gym", "gym123", "2024-03-09",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 this month)"));
}

#[test]
fn test_visit_rejects_bad_and_future_dates() {
    let db_path = setup_test_db("visit_bad_dates");
    init_db(&db_path);

    gym()
        .args([
            "--db", &db_path, "visit", "--user", "alice", "--gym", "gym123", "05/03/2024",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    let tomorrow = (Local::now().date_naive() + chrono::Duration::days(1))
        .format("%Y-%m-%d")
        .to_string();
    gym()
        .args([
            "--db", &db_path, "visit", "--user", "alice", "--gym", "gym123", &tomorrow,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is in the future"));
}

#[test]
fn test_missing_user_is_an_error() {
    let db_path = setup_test_db("missing_user");
    init_db(&db_path);

    gym()
        .args(["--db", &db_path, "visit", "--gym", "gym123", "2024-03-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing username"));
}

#[test]
fn test_analytics_plain_heatmap_for_month() {
    let db_path = setup_test_db("analytics_plain");
    init_db_with_visits(&db_path);

    gym()
        .args([
            "--db",
            &db_path,
            "analytics",
            "--user",
            "alice",
            "--gym",
            "gym123",
            "--month",
            "2024-03",
            "--no-color",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attendance for MARCH 2024"))
        .stdout(predicate::str::contains("135"))
        .stdout(predicate::str::contains(" 5*"))
        .stdout(predicate::str::contains("12*"))
        .stdout(predicate::str::contains("< Prev: 2024-02    Next: 2024-04 >"));
}

#[test]
fn test_analytics_without_data_shows_empty_month() {
    let db_path = setup_test_db("analytics_empty");
    init_db(&db_path);

    gym()
        .args([
            "--db", &db_path, "analytics", "--user", "bob", "--gym", "gym123", "--month",
            "2024-02", "--no-color",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attendance for FEBRUARY 2024"))
        .stdout(predicate::str::contains("*").not());
}

#[test]
fn test_analytics_invalid_month() {
    let db_path = setup_test_db("analytics_bad_month");
    init_db(&db_path);

    gym()
        .args([
            "--db", &db_path, "analytics", "--user", "alice", "--gym", "gym123", "--month",
            "2024-13",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month key: 2024-13"));
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_visits(&db_path);

    gym()
        .args([
            "--db", &db_path, "export", "--user", "alice", "--gym", "gym123", "--format", "csv",
            "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "user,gym,month,date,weekday");
    assert_eq!(lines.len(), 5);
    assert!(lines.contains(&"alice,gym123,2024-03,2024-03-05,Tue"));
    assert!(lines.contains(&"alice,gym123,2024-04,2024-04-01,Mon"));
}

#[test]
fn test_export_json_single_month() {
    let db_path = setup_test_db("export_json_month");
    let out = temp_out("export_json_month", "json");
    init_db_with_visits(&db_path);

    gym()
        .args([
            "--db", &db_path, "export", "--user", "alice", "--gym", "gym123", "--format",
            "json", "--file", &out, "--month", "2024-04", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json written");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2024-04-01");
    assert_eq!(rows[0]["month"], "2024-04");
}

#[test]
fn test_export_nothing_to_write() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db(&db_path);

    gym()
        .args([
            "--db", &db_path, "export", "--user", "nobody", "--gym", "gym123", "--file", &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No visits found"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_scan_count_alternates() {
    gym()
        .args(["scan", "--user", "alice", "--gym", "gym123", "--count", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Check-in at gym123 as alice"))
        .stdout(predicate::str::contains("logged at").count(3))
        .stdout(predicate::str::contains("Exit"))
        .stdout(predicate::str::contains("Events logged: 3"))
        .stdout(predicate::str::contains("Status: checked in"));
}

#[test]
fn test_scan_interactive_session() {
    gym()
        .args(["scan", "--user", "alice", "--gym", "gym123"])
        .write_stdin("\ns\nl\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Events logged: 2"))
        .stdout(predicate::str::contains("Status: checked out"));
}

#[test]
fn test_scan_guard_ignores_quick_rescans() {
    gym()
        .args([
            "scan",
            "--user",
            "alice",
            "--gym",
            "gym123",
            "--count",
            "2",
            "--min-interval",
            "3600",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan ignored"))
        .stdout(predicate::str::contains("Events logged: 1"));
}

#[test]
fn test_calendar_selects_today() {
    let today = Local::now().date_naive();
    let input = format!("{}\n{}\n{}\n", today.year(), today.month(), today.day());

    gym()
        .arg("calendar")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Selected date: {}",
            today.format("%d %b %Y")
        )));
}

#[test]
fn test_calendar_ignores_future_and_cancels() {
    let today = Local::now().date_naive();
    let input = format!("{}\nq\n", today.year() + 1);

    gym()
        .arg("calendar")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No date selected."));
}

#[test]
fn test_calendar_back_navigation() {
    let input = "2020\n2\nb\n12\n31\n";

    gym()
        .arg("calendar")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected date: 31 Dec 2020"));
}

#[test]
fn test_calendar_end_of_input_dismisses() {
    gym()
        .arg("calendar")
        .write_stdin("2020\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No date selected."));
}

#[test]
fn test_membership_cards_and_details() {
    gym()
        .arg("membership")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trial Membership"))
        .stdout(predicate::str::contains("Permanent Membership"))
        .stdout(predicate::str::contains("₹399"))
        .stdout(predicate::str::contains("₹899"));

    gym()
        .args(["membership", "--tier", "trial"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gyms: up to 6"));

    gym()
        .args(["membership", "--tier", "gold"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid membership tier: gold"));
}

#[test]
fn test_qr_png_output() {
    let out = temp_out("qr_png", "png");

    gym()
        .args(["qr", "gym123", "--size", "250", "--out", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("QR code for 'gym123' written to"))
        .stdout(predicate::str::contains("(250x250)"));

    let bytes = fs::read(&out).expect("png written");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_qr_terminal_output() {
    gym()
        .args(["qr", "gym123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your gym check-in QR code (gym123)"))
        .stdout(predicate::str::contains("██"));
}

#[test]
fn test_qr_rejects_blank_gym() {
    gym()
        .args(["qr", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid gym id"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_visits(&db_path);

    gym()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("migration_applied"))
        .stdout(predicate::str::contains("Visit recorded on 2024-04-01"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_visits(&db_path);

    gym()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("attendance"))
        .stdout(predicate::str::contains("Integrity check passed"));
}

#[test]
fn test_config_print() {
    gym()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("session_minutes"))
        .stdout(predicate::str::contains("qr_margin"));
}

#[test]
fn test_scan_rejects_out_of_range_interval() {
    gym()
        .args([
            "scan",
            "--user",
            "alice",
            "--gym",
            "gym123",
            "--count",
            "1",
            "--min-interval",
            "9223372036854775807",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scan interval"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_qr_rejects_oversized_raster() {
    gym()
        .args(["qr", "gym123", "--size", "70000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("QR encoding error"))
        .stderr(predicate::str::contains("panicked").not());
}
