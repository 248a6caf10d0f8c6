//! Workspace history sources and the shared entry model.
//! Add new sources in [`default_sources`] so the engine picks them up.

pub mod entries;
pub mod state_db;
pub mod storage_json;

use std::path::{Path, PathBuf};

use crate::config::RecentsConfig;
use crate::storage::EditorStorage;
use crate::types::{EditorInstance, WorkspaceRecord};

/// One place an editor persists its recently opened workspaces.
///
/// Implementors should:
/// - Log failures via `tracing::warn!` and return an empty list
/// - Never touch the file in write mode
pub trait HistorySource: Send + Sync {
    /// Unique identifier (e.g., "storage-json", "state-db")
    fn id(&self) -> &'static str;

    /// The file this source reads for the given editor data layout
    fn history_file(&self, storage: &EditorStorage) -> PathBuf;

    /// Read and resolve all workspaces in `path`
    fn read<'a>(&self, instance: &'a EditorInstance, path: &Path) -> Vec<WorkspaceRecord<'a>>;
}

/// `storage.json` reader.
pub struct StorageJsonSource {
    include_legacy: bool,
}

impl StorageJsonSource {
    pub fn new(include_legacy: bool) -> Self {
        Self { include_legacy }
    }
}

impl Default for StorageJsonSource {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HistorySource for StorageJsonSource {
    fn id(&self) -> &'static str {
        "storage-json"
    }

    fn history_file(&self, storage: &EditorStorage) -> PathBuf {
        storage.storage_file()
    }

    fn read<'a>(&self, instance: &'a EditorInstance, path: &Path) -> Vec<WorkspaceRecord<'a>> {
        storage_json::read_workspaces_with(instance, path, self.include_legacy)
    }
}

/// `User/globalStorage/state.vscdb` reader.
#[derive(Default)]
pub struct StateDbSource;

impl HistorySource for StateDbSource {
    fn id(&self) -> &'static str {
        "state-db"
    }

    fn history_file(&self, storage: &EditorStorage) -> PathBuf {
        storage.state_db_file()
    }

    fn read<'a>(&self, instance: &'a EditorInstance, path: &Path) -> Vec<WorkspaceRecord<'a>> {
        state_db::read_workspaces(instance, path)
    }
}

/// Sources in the order their results are reported: JSON file first.
pub fn default_sources(config: &RecentsConfig) -> Vec<Box<dyn HistorySource>> {
    vec![
        Box::new(StorageJsonSource::new(config.include_legacy_history)),
        Box::new(StateDbSource),
    ]
}
