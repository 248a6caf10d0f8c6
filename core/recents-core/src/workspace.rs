//! Turns one stored history URI into a [`WorkspaceRecord`].
//!
//! Shared by both history readers. Every rejection is a `None`, never an
//! error: stale, malformed and unsupported entries are expected in real
//! editor history and are filtered out with `filter_map`.

use std::path::Path;

use crate::authority;
use crate::patterns::RE_URI_DRIVE_PATH;
use crate::types::{EditorInstance, WorkspaceRecord, WorkspaceType};
use crate::uri;

/// Resolves a stored URI into a workspace record.
///
/// `explicit_authority` (the entry's `remoteAuthority` field) wins over the
/// URI's own authority whenever it is present, even if empty. Local entries
/// must exist on disk; remote entries are assumed to exist.
pub fn build_workspace<'a>(
    uri: &str,
    explicit_authority: Option<&str>,
    instance: &'a EditorInstance,
    is_workspace_file: bool,
) -> Option<WorkspaceRecord<'a>> {
    let parsed = match uri::parse(uri) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::trace!(uri, error = %e, "Dropping history entry");
            return None;
        }
    };

    let authority = explicit_authority.unwrap_or(&parsed.authority);
    let (environment, extra_info) = match authority::resolve(authority) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::trace!(uri, error = %e, "Dropping history entry");
            return None;
        }
    };

    let path = if environment.is_local() {
        let path = local_path(&parsed.path);
        if !Path::new(&path).exists() {
            tracing::trace!(uri, path = %path, "Dropping history entry for missing path");
            return None;
        }
        path
    } else {
        parsed.path
    };

    let folder_name = folder_name(&path);
    if folder_name.is_empty() {
        tracing::trace!(uri, "Dropping history entry without a folder name");
        return None;
    }

    Some(WorkspaceRecord {
        uri: uri.to_string(),
        workspace_type: if is_workspace_file {
            WorkspaceType::WorkspaceFile
        } else {
            WorkspaceType::ProjectFolder
        },
        path,
        folder_name,
        extra_info,
        environment,
        instance,
    })
}

/// Converts a `file://` URI path into a native path.
///
/// URIs always carry a leading `/`, even for `C:/...`. It is stripped for
/// drive-letter paths on every platform and for all paths on Windows.
pub fn local_path(uri_path: &str) -> String {
    if RE_URI_DRIVE_PATH.is_match(uri_path) || cfg!(windows) {
        uri_path.strip_prefix('/').unwrap_or(uri_path).to_string()
    } else {
        uri_path.to_string()
    }
}

/// Display name for a workspace path: its final segment, or for roots such
/// as `C:\` the directory name with trailing separators and `:` trimmed.
pub fn folder_name(path: &str) -> String {
    let name = path.rsplit(['/', '\\']).next().unwrap_or_default();
    if !name.is_empty() && !is_drive(name) {
        return name.to_string();
    }

    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim_end_matches(':')
        .to_string()
}

// A bare `X:` segment names a drive root, not a folder.
fn is_drive(segment: &str) -> bool {
    matches!(segment.as_bytes(), [letter, b':'] if letter.is_ascii_alphabetic())
}
