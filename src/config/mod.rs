use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::qr::{MAX_MARGIN, MAX_SIZE};
use crate::core::session::MAX_MIN_INTERVAL_SECS;
use crate::errors::{AppError, AppResult};

/// One visit never lasts longer than a day.
const MAX_SESSION_MINUTES: i64 = 24 * 60;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub default_user: Option<String>,
    #[serde(default = "default_session_minutes")]
    pub session_minutes: i64,
    #[serde(default)]
    pub min_scan_interval_secs: i64,
    #[serde(default = "default_qr_size")]
    pub qr_size: u32,
    #[serde(default = "default_qr_margin")]
    pub qr_margin: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// "compact" or "json"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_session_minutes() -> i64 {
    crate::core::analytics::DEFAULT_SESSION_MINUTES
}
fn default_qr_size() -> u32 {
    crate::core::qr::DEFAULT_SIZE
}
fn default_qr_margin() -> u32 {
    crate::core::qr::DEFAULT_MARGIN
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_log_format() -> String {
    "compact".to_string()
}

/// Keys every config file is expected to carry.
pub const CONFIG_KEYS: [&str; 8] = [
    "database",
    "default_user",
    "session_minutes",
    "min_scan_interval_secs",
    "qr_size",
    "qr_margin",
    "log_level",
    "log_format",
];

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_user: None,
            session_minutes: default_session_minutes(),
            min_scan_interval_secs: 0,
            qr_size: default_qr_size(),
            qr_margin: default_qr_margin(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }

    /// Standard configuration directory (`~/.gymcheck`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gymcheck")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gymcheck.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("gymcheck.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_SESSION_MINUTES).contains(&self.session_minutes) {
            return Err(AppError::Config(format!(
                "session_minutes must be in 1..={}, got {}",
                MAX_SESSION_MINUTES, self.session_minutes
            )));
        }
        if !(0..=MAX_MIN_INTERVAL_SECS).contains(&self.min_scan_interval_secs) {
            return Err(AppError::Config(format!(
                "min_scan_interval_secs must be in 0..={}, got {}",
                MAX_MIN_INTERVAL_SECS, self.min_scan_interval_secs
            )));
        }
        if !matches!(self.log_format.as_str(), "compact" | "json") {
            return Err(AppError::Config(format!(
                "log_format must be 'compact' or 'json', got '{}'",
                self.log_format
            )));
        }
        if !(1..=MAX_SIZE).contains(&self.qr_size) {
            return Err(AppError::Config(format!(
                "qr_size must be in 1..={}, got {}",
                MAX_SIZE, self.qr_size
            )));
        }
        if self.qr_margin > MAX_MARGIN {
            return Err(AppError::Config(format!(
                "qr_margin must be at most {}, got {}",
                MAX_MARGIN, self.qr_margin
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Resolve the user for a command: explicit flag first, then config.
    pub fn resolve_user(&self, user: &Option<String>) -> AppResult<String> {
        user.clone()
            .or_else(|| self.default_user.clone())
            .filter(|u| !u.trim().is_empty())
            .ok_or(AppError::MissingUser)
    }

    /// Initialize configuration and database files.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
