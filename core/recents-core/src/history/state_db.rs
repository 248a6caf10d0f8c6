//! Reader for `state.vscdb`, the SQLite key-value store of newer releases.
//!
//! History lives in a single `ItemTable` row keyed
//! `history.recentlyOpenedPathsList`; its value is `{ "entries": [...] }`.
//! The database is opened read-only and the connection never outlives the
//! call.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::error::{RecentsError, Result};
use crate::types::{EditorInstance, WorkspaceRecord};

use super::entries::{resolve_entries, RecentEntries};

pub const RECENTLY_OPENED_KEY: &str = "history.recentlyOpenedPathsList";

/// Reads workspaces from a state.vscdb file.
///
/// Never fails: a missing key, a missing table, a locked or corrupt
/// database and malformed JSON all yield nothing (errors are logged).
pub fn read_workspaces<'a>(instance: &'a EditorInstance, path: &Path) -> Vec<WorkspaceRecord<'a>> {
    match try_read_workspaces(instance, path) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to retrieve workspaces from state database"
            );
            Vec::new()
        }
    }
}

/// Fallible core of [`read_workspaces`].
pub fn try_read_workspaces<'a>(
    instance: &'a EditorInstance,
    path: &Path,
) -> Result<Vec<WorkspaceRecord<'a>>> {
    let Some(value) = read_item(path, RECENTLY_OPENED_KEY)? else {
        tracing::debug!(path = %path.display(), "No recently opened list in state database");
        return Ok(Vec::new());
    };

    if value.trim().is_empty() {
        return Ok(Vec::new());
    }

    let recent: RecentEntries = serde_json::from_str(&value).map_err(|source| RecentsError::Json {
        context: format!("{} ({})", path.display(), RECENTLY_OPENED_KEY),
        source,
    })?;

    let records = recent
        .entries
        .as_deref()
        .map(|entries| resolve_entries(entries, instance))
        .unwrap_or_default();

    tracing::debug!(
        path = %path.display(),
        count = records.len(),
        "Read workspaces from state database"
    );
    Ok(records)
}

/// Looks up one `ItemTable` value by exact key. Values may be stored as
/// TEXT or BLOB; both are returned as a string.
pub fn read_item(path: &Path, key: &str) -> Result<Option<String>> {
    let store_err = |source| RecentsError::Store {
        path: path.to_path_buf(),
        source,
    };

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(store_err)?;

    let value = conn
        .query_row(
            "SELECT value FROM ItemTable WHERE key = ?1",
            params![key],
            |row| {
                Ok(match row.get_ref(0)? {
                    ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                        Some(String::from_utf8_lossy(bytes).into_owned())
                    }
                    _ => None,
                })
            },
        )
        .optional()
        .map_err(store_err)?;

    Ok(value.flatten())
}
