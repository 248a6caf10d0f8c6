//! Core types shared by the readers, the engine and every client.
//!
//! Records derived from an editor install borrow the [`EditorInstance`] they
//! came from; the caller owns the instance list and the records live no
//! longer than it does.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ═══════════════════════════════════════════════════════════════════════════════
// Editor Instances
// ═══════════════════════════════════════════════════════════════════════════════

/// Known VS Code-family editor flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditorVersion {
    #[serde(rename = "cursor")]
    Cursor,
    #[serde(rename = "code")]
    Code,
    #[serde(rename = "code-insiders")]
    CodeInsiders,
    #[serde(rename = "vscodium")]
    VsCodium,
}

impl EditorVersion {
    pub const ALL: [EditorVersion; 4] = [
        EditorVersion::Cursor,
        EditorVersion::Code,
        EditorVersion::CodeInsiders,
        EditorVersion::VsCodium,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::Code => "code",
            Self::CodeInsiders => "code-insiders",
            Self::VsCodium => "vscodium",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cursor => "Cursor",
            Self::Code => "Visual Studio Code",
            Self::CodeInsiders => "Visual Studio Code - Insiders",
            Self::VsCodium => "VSCodium",
        }
    }

    /// File name of the CLI launcher placed on `PATH` by the installer.
    pub fn launcher_name(&self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::Code => "code",
            Self::CodeInsiders => "code-insiders",
            Self::VsCodium => "codium",
        }
    }

    /// Folder under the platform config dir that holds user data.
    pub fn app_data_folder(&self) -> &'static str {
        match self {
            Self::Cursor => "Cursor",
            Self::Code => "Code",
            Self::CodeInsiders => "Code - Insiders",
            Self::VsCodium => "VSCodium",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id().eq_ignore_ascii_case(id))
    }
}

impl std::fmt::Display for EditorVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// One installed editor: its launcher and its user-data root.
///
/// Immutable once constructed. Workspace records and remote machines hold a
/// reference back to the instance they were read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorInstance {
    executable_path: PathBuf,
    app_data: PathBuf,
    version: EditorVersion,
}

impl EditorInstance {
    pub fn new(
        executable_path: impl Into<PathBuf>,
        app_data: impl Into<PathBuf>,
        version: EditorVersion,
    ) -> Self {
        Self {
            executable_path: executable_path.into(),
            app_data: app_data.into(),
            version,
        }
    }

    pub fn executable_path(&self) -> &Path {
        &self.executable_path
    }

    pub fn app_data(&self) -> &Path {
        &self.app_data
    }

    pub fn version(&self) -> EditorVersion {
        self.version
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Workspaces
// ═══════════════════════════════════════════════════════════════════════════════

/// Where a workspace lives, derived from the URI authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum WorkspaceEnvironment {
    Local,
    Wsl,
    SshRemote,
    DevContainer,
    Unknown,
}

impl WorkspaceEnvironment {
    /// Only local paths can be checked against the filesystem.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Wsl => "wsl",
            Self::SshRemote => "ssh-remote",
            Self::DevContainer => "dev-container",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for WorkspaceEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkspaceType {
    ProjectFolder,
    WorkspaceFile,
}

/// A URI split into its scheme, authority and (unescaped) path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUri {
    pub scheme: String,
    pub authority: String,
    pub path: String,
}

/// One recently opened folder or `.code-workspace` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceRecord<'a> {
    /// The URI exactly as stored by the editor.
    pub uri: String,
    pub workspace_type: WorkspaceType,
    /// Filesystem path for local entries, remote path otherwise.
    pub path: String,
    /// Never empty.
    pub folder_name: String,
    /// Machine or distro name for remote entries, empty for local ones.
    pub extra_info: String,
    pub environment: WorkspaceEnvironment,
    pub instance: &'a EditorInstance,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Remote Machines
// ═══════════════════════════════════════════════════════════════════════════════

/// One `Host` pattern from an SSH config file, with the directives that
/// applied to its block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SshHostEntry {
    pub host: String,
    pub host_name: Option<String>,
    pub user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteMachine<'a> {
    pub host: String,
    pub user: String,
    pub host_name: String,
    pub instance: &'a EditorInstance,
}
