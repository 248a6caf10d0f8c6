//! Classifies a URI authority into a workspace environment and machine label.
//!
//! Rules are tried in order: empty ⇒ local, then `wsl+`, `ssh-remote+` and
//! `dev-container+` prefixes (case-insensitive). Anything else is
//! [`RecentsError::UnrecognizedAuthority`]; callers drop such records.

use crate::error::{RecentsError, Result};
use crate::patterns::{RE_DEV_CONTAINER_AUTHORITY, RE_SSH_REMOTE_AUTHORITY, RE_WSL_AUTHORITY};
use crate::types::WorkspaceEnvironment;

/// Returns the environment and the machine label (empty for local).
pub fn resolve(authority: &str) -> Result<(WorkspaceEnvironment, String)> {
    let authority = authority.trim();

    if authority.is_empty() {
        return Ok((WorkspaceEnvironment::Local, String::new()));
    }

    if let Some(caps) = RE_WSL_AUTHORITY.captures(authority) {
        return Ok((WorkspaceEnvironment::Wsl, caps[1].to_string()));
    }

    if let Some(caps) = RE_SSH_REMOTE_AUTHORITY.captures(authority) {
        return Ok((WorkspaceEnvironment::SshRemote, caps[1].to_string()));
    }

    if let Some(caps) = RE_DEV_CONTAINER_AUTHORITY.captures(authority) {
        return Ok((
            WorkspaceEnvironment::DevContainer,
            dev_container_label(&caps[1]),
        ));
    }

    Err(RecentsError::UnrecognizedAuthority(authority.to_string()))
}

/// Dev-container authorities carry a hex-encoded payload: either a JSON
/// object, or (older editors) the host path itself. JSON payloads name the
/// container by `hostPath`, else by the project owning `configFile`.
/// Falls back to the raw payload when nothing yields a name.
fn dev_container_label(encoded: &str) -> String {
    let Some(decoded) = decode_hex(encoded) else {
        return encoded.to_string();
    };

    let label = match serde_json::from_str::<serde_json::Value>(&decoded) {
        Ok(value) => match value.get("hostPath").and_then(|v| v.as_str()) {
            Some(host_path) => last_segment(host_path).map(str::to_string),
            None => config_file_project(&value),
        },
        Err(_) => last_segment(&decoded).map(str::to_string),
    };

    label.unwrap_or_else(|| encoded.to_string())
}

/// Folder name of the project a `configFile` belongs to.
///
/// `configFile` is a path string or an object with a `path` field. For
/// `<project>/.devcontainer/devcontainer.json` the project is the parent of
/// `.devcontainer`; otherwise it is the folder holding the file.
fn config_file_project(value: &serde_json::Value) -> Option<String> {
    let config_file = value.get("configFile")?;
    let path = config_file
        .as_str()
        .or_else(|| config_file.get("path").and_then(|p| p.as_str()))?;

    let mut parents = path
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .skip(1)
        .filter(|s| !s.is_empty());

    let folder = parents.next()?;
    if folder.eq_ignore_ascii_case(".devcontainer") {
        parents.next().map(str::to_string)
    } else {
        Some(folder.to_string())
    }
}

fn last_segment(path: &str) -> Option<&str> {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
}

fn decode_hex(encoded: &str) -> Option<String> {
    if encoded.is_empty() || encoded.len() % 2 != 0 {
        return None;
    }

    let bytes = (0..encoded.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(encoded.get(i..i + 2)?, 16).ok())
        .collect::<Option<Vec<u8>>>()?;

    String::from_utf8(bytes).ok()
}
