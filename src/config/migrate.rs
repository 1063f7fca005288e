//! Config file upgrades: report and fill in fields added after the file was written.

use super::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Every key a current config file carries.
pub const EXPECTED_FIELDS: &[&str] = &[
    "database",
    "admin_email",
    "seed_defaults",
    "preview_chars",
    "wrap_width",
    "color",
];

/// Keys from `EXPECTED_FIELDS` absent in the YAML text.
/// A document that is not a mapping is missing everything.
pub fn missing_fields(yaml: &str) -> AppResult<Vec<&'static str>> {
    let value: Value = serde_yaml::from_str(yaml)?;
    let Some(map) = value.as_mapping() else {
        return Ok(EXPECTED_FIELDS.to_vec());
    };

    Ok(EXPECTED_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// `config --check`: print missing fields. Returns them for the caller.
pub fn check_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {} (defaults in use). Run `init` to create one.",
            path.display()
        ));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let missing = missing_fields(&content)?;
    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        warning(format!("Missing fields: {}", missing.join(", ")));
        info("Run `config --migrate` to add them with default values.");
    }
    Ok(missing)
}

/// `config --migrate`: rewrite the file with defaults for missing fields.
/// Returns true when the file changed.
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        warning(format!("No configuration file at {}", path.display()));
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    let missing = missing_fields(&content)?;
    if missing.is_empty() {
        info("Configuration already up to date.");
        return Ok(false);
    }

    // serde defaults fill whatever is absent
    let cfg: Config = serde_yaml::from_str(&content)?;
    cfg.save_to(path)?;
    success(format!("Added missing fields: {}", missing.join(", ")));
    Ok(true)
}
