//! Remote machines an editor knows about through its SSH config setting.
//!
//! Each instance's `User/settings.json` may point at an SSH config file via
//! `remote.SSH.configFile`. Every `Host` pattern in that file becomes one
//! [`RemoteMachine`] tagged with the instance. Settings files are JSONC
//! (comments, trailing commas), so they are decoded with `json5`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{RecentsError, Result};
use crate::ssh_config;
use crate::storage::EditorStorage;
use crate::types::{EditorInstance, RemoteMachine};

/// Settings key holding the SSH config path.
pub const SSH_CONFIG_SETTING: &str = "remote.SSH.configFile";

/// Lists remote machines for every instance, in instance order.
///
/// A broken settings file only removes that instance's machines.
pub fn list_machines(instances: &[EditorInstance]) -> Vec<RemoteMachine<'_>> {
    instances.iter().flat_map(machines_for_instance).collect()
}

/// Lists remote machines configured for a single instance.
pub fn machines_for_instance(instance: &EditorInstance) -> Vec<RemoteMachine<'_>> {
    let settings_file = EditorStorage::for_instance(instance).settings_file();
    if !settings_file.is_file() {
        return Vec::new();
    }

    let config_path = match ssh_config_path(&settings_file) {
        Ok(Some(path)) => path,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(
                path = %settings_file.display(),
                error = %e,
                "Failed to read editor settings"
            );
            return Vec::new();
        }
    };

    if !config_path.is_file() {
        tracing::debug!(
            path = %config_path.display(),
            "Configured SSH config file does not exist"
        );
        return Vec::new();
    }

    match ssh_config::parse_file(&config_path) {
        Ok(entries) => entries
            .into_iter()
            .map(|entry| RemoteMachine {
                host: entry.host,
                user: entry.user.unwrap_or_default(),
                host_name: entry.host_name.unwrap_or_default(),
                instance,
            })
            .collect(),
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "Failed to read SSH config"
            );
            Vec::new()
        }
    }
}

/// Reads `remote.SSH.configFile` from a settings file.
///
/// Returns `Ok(None)` when the file is blank or the setting is absent,
/// empty or not a string.
pub fn ssh_config_path(settings_file: &Path) -> Result<Option<PathBuf>> {
    let content = fs_err::read_to_string(settings_file).map_err(|source| RecentsError::Io {
        context: "reading editor settings".to_string(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(None);
    }

    let settings: Value =
        json5::from_str(&content).map_err(|e| RecentsError::SettingsMalformed {
            path: settings_file.to_path_buf(),
            details: e.to_string(),
        })?;

    Ok(settings
        .get(SSH_CONFIG_SETTING)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(expand_home))
}

/// Expands a leading `~` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(path),
    }
}
