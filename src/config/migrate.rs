//! Keep an existing configuration file in step with the current `Config`.
//!
//! Keys added in newer versions are reported by `missing_keys` and written
//! with their default values by `fill_missing_keys`. Existing values and
//! unknown keys are never touched.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn defaults_as_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default config is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// Walk `defaults` and insert whatever `current` lacks; returns dotted key names.
fn merge_missing(current: &mut Mapping, defaults: &Mapping, prefix: &str) -> Vec<String> {
    let mut added = Vec::new();

    for (key, default_value) in defaults {
        let name = match key.as_str() {
            Some(k) if prefix.is_empty() => k.to_string(),
            Some(k) => format!("{prefix}.{k}"),
            None => continue,
        };

        match current.get_mut(key) {
            None => {
                current.insert(key.clone(), default_value.clone());
                added.push(name);
            }
            Some(Value::Mapping(nested)) => {
                if let Value::Mapping(nested_defaults) = default_value {
                    added.extend(merge_missing(nested, nested_defaults, &name));
                }
            }
            Some(_) => {}
        }
    }

    added
}

pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    Ok(merge_missing(&mut current, &defaults_as_mapping()?, ""))
}

/// Add missing keys to the file. Returns the keys that were written.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let added = merge_missing(&mut current, &defaults_as_mapping()?, "");

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
