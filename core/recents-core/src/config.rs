//! User configuration for editor-recents.
//!
//! Stored as JSON at `<config_dir>/editor-recents/config.json`. Every field
//! has a default, so a missing file or a partial one is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RecentsError, Result};
use crate::types::{EditorInstance, EditorVersion};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentsConfig {
    /// Editor flavour ids (`cursor`, `code`, ...) skipped during discovery.
    pub disabled_editors: Vec<String>,
    /// Installs that are not on `PATH`, e.g. unzipped portable builds.
    pub extra_instances: Vec<ExtraInstance>,
    /// Whether the legacy `workspaces3` list in storage.json is read.
    pub include_legacy_history: bool,
}

impl Default for RecentsConfig {
    fn default() -> Self {
        Self {
            disabled_editors: Vec::new(),
            extra_instances: Vec::new(),
            include_legacy_history: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraInstance {
    pub executable_path: PathBuf,
    pub app_data: PathBuf,
    #[serde(default = "default_version")]
    pub version: EditorVersion,
}

fn default_version() -> EditorVersion {
    EditorVersion::Cursor
}

impl From<&ExtraInstance> for EditorInstance {
    fn from(extra: &ExtraInstance) -> Self {
        EditorInstance::new(&extra.executable_path, &extra.app_data, extra.version)
    }
}

/// Returns the path to the configuration file.
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("editor-recents").join("config.json"))
}

/// Loads the configuration, returning defaults if the file is missing or
/// malformed (malformed files are logged).
pub fn load_config() -> RecentsConfig {
    let Some(path) = get_config_path() else {
        return RecentsConfig::default();
    };
    load_config_or_default(&path)
}

/// Loads from `path`, falling back to defaults like [`load_config`].
pub fn load_config_or_default(path: &Path) -> RecentsConfig {
    if !path.exists() {
        return RecentsConfig::default();
    }

    load_config_from(path).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed configuration");
        RecentsConfig::default()
    })
}

/// Loads the configuration from `path`.
pub fn load_config_from(path: &Path) -> Result<RecentsConfig> {
    let content = fs_err::read_to_string(path).map_err(|source| RecentsError::Io {
        context: "reading configuration".to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|e| RecentsError::ConfigMalformed {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

/// Saves the configuration to `path`, creating the parent directory.
pub fn save_config_to(path: &Path, config: &RecentsConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent).map_err(|source| RecentsError::Io {
            context: "creating configuration directory".to_string(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|source| RecentsError::Json {
        context: "serializing configuration".to_string(),
        source,
    })?;

    fs_err::write(path, content).map_err(|source| RecentsError::Io {
        context: "writing configuration".to_string(),
        source,
    })
}
