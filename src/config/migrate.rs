//! Configuration file checks and upgrades.
//!
//! Older releases wrote config files without the reconciliation keys
//! (`weekend_policy`, `fallback_window_months`, `page_size`). `--check`
//! reports what is missing; `--migrate` fills the gaps in place with the
//! defaults, preserving everything the user already set.

use crate::config::Config;
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Keys every complete config file must carry.
const REQUIRED_KEYS: &[&str] = &[
    "database",
    "weekend_policy",
    "fallback_window_months",
    "page_size",
    "separator_char",
];

/// List the required keys missing from the config file.
/// A missing file reports every key as missing.
pub fn missing_keys(path: &Path) -> io::Result<Vec<String>> {
    if !path.exists() {
        return Ok(REQUIRED_KEYS.iter().map(|k| k.to_string()).collect());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("invalid YAML: {e}")))?;

    let mut missing = Vec::new();

    if let Some(map) = yaml.as_mapping() {
        for key in REQUIRED_KEYS {
            let k = Value::String(key.to_string());
            if map.get(&k).is_none() {
                missing.push(key.to_string());
            }
        }
    } else {
        missing = REQUIRED_KEYS.iter().map(|k| k.to_string()).collect();
    }

    Ok(missing)
}

/// Print a check report for the config file.
pub fn check_config(path: &Path) -> io::Result<()> {
    let missing = missing_keys(path)?;

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        info(format!(
            "Configuration file is missing {} field(s): {}",
            missing.len(),
            missing.join(", ")
        ));
        info("Run 'daylogger config --migrate' to fill them with defaults.");
    }

    Ok(())
}

/// Rewrite the config file with missing fields filled from defaults.
/// Values the user already set are kept as-is (serde defaults only apply
/// to absent keys).
pub fn migrate_config(path: &Path) -> io::Result<bool> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        return Ok(false);
    }

    // Round-trip through Config: absent keys pick up their defaults.
    let cfg: Config = if path.exists() {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| io::Error::other(format!("invalid YAML: {e}")))?
    } else {
        Config::default()
    };

    let yaml =
        serde_yaml::to_string(&cfg).map_err(|e| io::Error::other(e.to_string()))?;
    fs::write(path, yaml)?;

    success(format!(
        "Configuration migrated, added: {}",
        missing.join(", ")
    ));
    Ok(true)
}
