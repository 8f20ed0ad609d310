pub mod analytics;
pub mod calendar;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod membership;
pub mod qr;
pub mod scan;
pub mod visit;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// Open the configured database with the schema up to date.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn validate_gym(gym: &str) -> AppResult<&str> {
    let trimmed = gym.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidGym(gym.to_string()));
    }
    Ok(trimmed)
}
