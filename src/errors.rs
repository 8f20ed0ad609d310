//! Unified application error type.
//! Storage, config, export and CLI code all return AppError so that
//! `main` has a single place to report failures.
//!
//! The check-in session and the date picker never fail: invalid input is
//! ignored there, so they do not appear in this enum.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Document error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month key: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid membership tier: {0}")]
    InvalidTier(String),

    #[error("Missing username: pass --user or set default_user in the configuration")]
    MissingUser,

    #[error("Invalid gym id: {0}")]
    InvalidGym(String),

    #[error("Invalid scan interval: {0}s (expected 0..={1})")]
    InvalidInterval(i64, i64),

    // ---------------------------
    // QR
    // ---------------------------
    #[error("QR encoding error: {0}")]
    Qr(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
