//! File layout of an editor's user-data directory.
//!
//! All paths the readers touch are derived here, so a layout change in a
//! future editor release is a one-place fix:
//!
//! ```text
//! <app_data>/
//! ├── storage.json                      (history, older releases)
//! └── User/
//!     ├── settings.json                 (remote.SSH.configFile)
//!     └── globalStorage/
//!         └── state.vscdb               (history, ItemTable)
//! ```

use std::path::{Path, PathBuf};

use crate::types::EditorInstance;

/// Paths inside one editor instance's user-data directory.
#[derive(Debug, Clone)]
pub struct EditorStorage {
    root: PathBuf,
}

impl EditorStorage {
    pub fn for_instance(instance: &EditorInstance) -> Self {
        Self::with_root(instance.app_data().to_path_buf())
    }

    /// Used for testing with temp directories.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to storage.json (JSON history, `openedPathsList`).
    pub fn storage_file(&self) -> PathBuf {
        self.root.join("storage.json")
    }

    /// Path to the User/ directory.
    pub fn user_dir(&self) -> PathBuf {
        self.root.join("User")
    }

    /// Path to User/settings.json.
    pub fn settings_file(&self) -> PathBuf {
        self.user_dir().join("settings.json")
    }

    /// Path to User/globalStorage/state.vscdb (SQLite, `ItemTable`).
    pub fn state_db_file(&self) -> PathBuf {
        self.user_dir().join("globalStorage").join("state.vscdb")
    }
}
