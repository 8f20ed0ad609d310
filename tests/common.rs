#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gym() -> Command {
    cargo_bin_cmd!("gymcheck")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gymcheck.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gymcheck_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB (test mode, no config file written)
pub fn init_db(db_path: &str) {
    gym()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and record a few visits for alice at gym123
pub fn init_db_with_visits(db_path: &str) {
    init_db(db_path);

    for date in ["2024-03-05", "2024-03-05", "2024-03-12", "2024-04-01"] {
        gym()
            .args([
                "--db", db_path, "visit", "--user", "alice", "--gym", "gym123", date,
            ])
            .assert()
            .success();
    }
}
