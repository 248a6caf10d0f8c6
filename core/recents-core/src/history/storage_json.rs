//! Reader for `storage.json`, the JSON history file of older releases.

use std::path::Path;

use crate::error::{RecentsError, Result};
use crate::types::{EditorInstance, WorkspaceRecord};

use super::entries::{resolve_entries, resolve_legacy, StorageFile};

/// Reads workspaces from a storage.json file, legacy list included.
///
/// Never fails: unreadable or malformed files are logged and yield nothing.
pub fn read_workspaces<'a>(instance: &'a EditorInstance, path: &Path) -> Vec<WorkspaceRecord<'a>> {
    read_workspaces_with(instance, path, true)
}

/// Like [`read_workspaces`], optionally skipping the legacy `workspaces3` list.
pub fn read_workspaces_with<'a>(
    instance: &'a EditorInstance,
    path: &Path,
    include_legacy: bool,
) -> Vec<WorkspaceRecord<'a>> {
    match try_read_workspaces(instance, path, include_legacy) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to read workspace history"
            );
            Vec::new()
        }
    }
}

/// Fallible core of [`read_workspaces_with`].
///
/// Legacy records come first, then structured entries, each in document
/// order. Duplicates between the two lists are kept.
pub fn try_read_workspaces<'a>(
    instance: &'a EditorInstance,
    path: &Path,
    include_legacy: bool,
) -> Result<Vec<WorkspaceRecord<'a>>> {
    let content = fs_err::read_to_string(path).map_err(|source| RecentsError::Io {
        context: "reading storage file".to_string(),
        source,
    })?;

    if content.trim().is_empty() {
        tracing::debug!(path = %path.display(), "Empty storage file");
        return Ok(Vec::new());
    }

    let file: StorageFile = serde_json::from_str(&content).map_err(|source| RecentsError::Json {
        context: path.display().to_string(),
        source,
    })?;

    let Some(opened) = file.opened_paths_list else {
        return Ok(Vec::new());
    };

    let mut records = Vec::new();
    if include_legacy {
        if let Some(workspaces) = &opened.workspaces3 {
            records.extend(resolve_legacy(workspaces, instance));
        }
    }
    if let Some(entries) = &opened.entries {
        records.extend(resolve_entries(entries, instance));
    }

    tracing::debug!(
        path = %path.display(),
        count = records.len(),
        "Read workspaces from storage file"
    );
    Ok(records)
}
