use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys a complete configuration file is expected to carry.
pub const EXPECTED_FIELDS: [&str; 6] = [
    "database",
    "api_base_url",
    "request_timeout_secs",
    "daily_cache_ttl_secs",
    "calendar_cache_ttl_secs",
    "clock_format",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// List expected keys absent from the config file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(EXPECTED_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add missing keys with their default values, keeping every existing value
/// (including unknown keys) untouched.
///   Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(false);
    }

    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("default config is not a mapping".into())),
    };

    for key in &missing {
        let k = Value::String((*key).to_string());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
    success(format!(
        "Configuration migrated: added {}",
        missing.join(", ")
    ));
    Ok(true)
}
