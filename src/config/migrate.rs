//! Config file maintenance: detect keys missing from an older file and
//! fill them with defaults without touching the values already there.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use super::{CONFIG_KEYS, Config};
use crate::errors::{AppError, AppResult};

/// Keys of `CONFIG_KEYS` absent from the YAML text.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add defaults for missing keys. Returns the keys that were added.
pub fn fill_missing_keys(content: &str) -> AppResult<(String, Vec<&'static str>)> {
    let missing = missing_keys(content)?;
    let mut yaml: Value = serde_yaml::from_str(content)?;

    let defaults = serde_yaml::to_value(Config::default())?;
    let defaults: &Mapping = defaults
        .as_mapping()
        .ok_or_else(|| AppError::Config("default configuration is not a mapping".into()))?;

    if let Some(map) = yaml.as_mapping_mut() {
        for key in &missing {
            let k = Value::String((*key).to_string());
            if let Some(v) = defaults.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    Ok((serde_yaml::to_string(&yaml)?, missing))
}

/// Migrate the file in place when keys are missing. Ok(true) if it changed.
pub fn migrate_file(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    let (updated, added) = fill_missing_keys(&content)?;
    if added.is_empty() {
        return Ok(false);
    }

    fs::write(path, updated)?;
    Ok(true)
}
