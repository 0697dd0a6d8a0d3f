//! Config file upgrades: add keys introduced after the file was written.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys present in a default config but missing from the mapping.
fn missing_keys(map: &Mapping) -> AppResult<Vec<(String, Value)>> {
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Ok(Vec::new()),
    };

    Ok(defaults
        .into_iter()
        .filter(|(k, _)| !map.contains_key(k))
        .filter_map(|(k, v)| k.as_str().map(|s| (s.to_string(), v)))
        .collect())
}

/// List the keys missing from the config file at `path`.
pub fn check_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;
    Ok(missing_keys(&map)?.into_iter().map(|(k, _)| k).collect())
}

/// Write default values for every missing key back to `path`.
///
/// Existing values are never touched. Returns the keys that were added.
pub fn add_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut map = read_mapping(path)?;
    let missing = missing_keys(&map)?;

    if missing.is_empty() {
        info("Configuration already up to date.");
        return Ok(Vec::new());
    }

    let mut added = Vec::new();
    for (key, value) in missing {
        map.insert(Value::String(key.clone()), value);
        added.push(key);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    success(format!("Added config fields: {}", added.join(", ")));
    Ok(added)
}
