//! On-disk shapes of the "recently opened" history, shared by both readers.
//!
//! ```json
//! {
//!   "openedPathsList": {
//!     "workspaces3": ["file:///home/u/old-project"],
//!     "entries": [
//!       { "folderUri": "file:///home/u/app" },
//!       { "folderUri": "vscode-remote://ssh-remote%2Bbox/srv", "remoteAuthority": "ssh-remote+box" },
//!       { "workspace": { "id": "4f1c", "configPath": "file:///home/u/team.code-workspace" } }
//!     ]
//!   }
//! }
//! ```
//!
//! `state.vscdb` stores only the inner `{ "entries": [...] }` object.

use serde::Deserialize;
use serde_json::Value;

use crate::types::{EditorInstance, WorkspaceRecord};
use crate::workspace::build_workspace;

/// Top level of storage.json. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct StorageFile {
    #[serde(rename = "openedPathsList", default)]
    pub opened_paths_list: Option<OpenedPathsList>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OpenedPathsList {
    /// Legacy flat list. Items are URI strings; very old releases wrote
    /// `{ "id", "configURIPath" }` objects for workspace files.
    #[serde(default)]
    pub workspaces3: Option<Vec<Value>>,
    #[serde(default)]
    pub entries: Option<Vec<Option<HistoryEntry>>>,
}

/// Value of `history.recentlyOpenedPathsList` in `ItemTable`.
#[derive(Debug, Default, Deserialize)]
pub struct RecentEntries {
    #[serde(default)]
    pub entries: Option<Vec<Option<HistoryEntry>>>,
}

/// One `entries` item. Only the fields that locate a workspace are kept;
/// single-file entries (`fileUri`) deserialize with every field `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default)]
    pub folder_uri: Option<String>,
    #[serde(default)]
    pub remote_authority: Option<String>,
    #[serde(default)]
    pub workspace: Option<WorkspaceRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRef {
    #[serde(default)]
    pub config_path: Option<String>,
}

/// Resolves one structured entry. `workspace.configPath` takes precedence
/// over `folderUri`; entries for single files (`fileUri`) are not
/// workspaces and resolve to `None`.
pub fn resolve_entry<'a>(
    entry: &HistoryEntry,
    instance: &'a EditorInstance,
) -> Option<WorkspaceRecord<'a>> {
    let config_path = entry
        .workspace
        .as_ref()
        .and_then(|w| w.config_path.as_deref());

    let (uri, is_workspace_file) = match config_path {
        Some(config_path) => (config_path, true),
        None => (entry.folder_uri.as_deref()?, false),
    };

    build_workspace(
        uri,
        entry.remote_authority.as_deref(),
        instance,
        is_workspace_file,
    )
}

/// Resolves a list of structured entries in order, skipping nulls and
/// entries that do not resolve.
pub fn resolve_entries<'a>(
    entries: &[Option<HistoryEntry>],
    instance: &'a EditorInstance,
) -> Vec<WorkspaceRecord<'a>> {
    entries
        .iter()
        .flatten()
        .filter_map(|entry| resolve_entry(entry, instance))
        .collect()
}

/// Resolves the legacy `workspaces3` list, in order.
pub fn resolve_legacy<'a>(
    workspaces: &[Value],
    instance: &'a EditorInstance,
) -> Vec<WorkspaceRecord<'a>> {
    workspaces
        .iter()
        .filter_map(|item| match item {
            Value::String(uri) => build_workspace(uri, None, instance, false),
            Value::Object(map) => map
                .get("configURIPath")
                .and_then(Value::as_str)
                .and_then(|uri| build_workspace(uri, None, instance, true)),
            _ => None,
        })
        .collect()
}
