//! RecentsEngine - the main entry point for launcher clients.
//!
//! The engine owns the discovered editor instances; every record it returns
//! borrows from them. It is:
//! - **Synchronous**: No async runtime required
//! - **Stateless per call**: each listing re-reads the history files
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use recents_core::RecentsEngine;
//!
//! let engine = RecentsEngine::new();
//! for workspace in engine.list_workspaces() {
//!     println!("{} ({})", workspace.folder_name, workspace.environment);
//! }
//! ```

use crate::config::{load_config, RecentsConfig};
use crate::discovery::discover_instances;
use crate::history::{default_sources, HistorySource};
use crate::remote;
use crate::storage::EditorStorage;
use crate::types::{EditorInstance, RemoteMachine, WorkspaceRecord};

/// Reads workspace history for every instance, in instance order, then
/// source order, then entry order. Nothing is deduplicated.
pub fn list_workspaces<'a>(
    instances: &'a [EditorInstance],
    sources: &[Box<dyn HistorySource>],
) -> Vec<WorkspaceRecord<'a>> {
    instances
        .iter()
        .flat_map(|instance| {
            let storage = EditorStorage::for_instance(instance);
            sources
                .iter()
                .filter_map(move |source| {
                    let file = source.history_file(&storage);
                    file.is_file().then(|| source.read(instance, &file))
                })
                .flatten()
                .collect::<Vec<_>>()
        })
        .collect()
}

pub struct RecentsEngine {
    instances: Vec<EditorInstance>,
    sources: Vec<Box<dyn HistorySource>>,
}

impl RecentsEngine {
    /// Loads the user configuration and discovers instances from `PATH`.
    pub fn new() -> Self {
        let config = load_config();
        let instances = discover_instances(&config.disabled_editors);
        Self::with_instances(instances, &config)
    }

    /// Builds an engine over a caller-supplied instance list. Extra
    /// instances from `config` are appended unless already present.
    pub fn with_instances(mut instances: Vec<EditorInstance>, config: &RecentsConfig) -> Self {
        for extra in &config.extra_instances {
            let instance = EditorInstance::from(extra);
            if !instances.contains(&instance) {
                instances.push(instance);
            }
        }

        Self {
            instances,
            sources: default_sources(config),
        }
    }

    pub fn instances(&self) -> &[EditorInstance] {
        &self.instances
    }

    /// All resolvable workspaces across every instance.
    pub fn list_workspaces(&self) -> Vec<WorkspaceRecord<'_>> {
        list_workspaces(&self.instances, &self.sources)
    }

    /// All SSH remote machines across every instance.
    pub fn list_machines(&self) -> Vec<RemoteMachine<'_>> {
        remote::list_machines(&self.instances)
    }
}

impl Default for RecentsEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtraInstance;
    use crate::types::{EditorVersion, WorkspaceEnvironment};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_storage(app_data: &Path, folders: &[&str]) {
        std::fs::create_dir_all(app_data).unwrap();
        let entries: Vec<_> = folders
            .iter()
            .map(|uri| serde_json::json!({ "folderUri": uri }))
            .collect();
        let doc = serde_json::json!({ "openedPathsList": { "entries": entries } });
        std::fs::write(app_data.join("storage.json"), doc.to_string()).unwrap();
    }

    #[test]
    fn test_list_workspaces_preserves_instance_order() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        write_storage(&first, &["vscode-remote://ssh-remote%2Ba/srv/one"]);
        write_storage(
            &second,
            &[
                "vscode-remote://ssh-remote%2Bb/srv/two",
                "vscode-remote://ssh-remote%2Bb/srv/two",
            ],
        );

        let instances = vec![
            EditorInstance::new("/bin/cursor", &first, EditorVersion::Cursor),
            EditorInstance::new("/bin/code", &second, EditorVersion::Code),
        ];
        let engine = RecentsEngine::with_instances(instances, &RecentsConfig::default());

        let records = engine.list_workspaces();
        let names: Vec<_> = records.iter().map(|r| r.folder_name.as_str()).collect();
        assert_eq!(names, vec!["one", "two", "two"]);
        assert_eq!(records[0].instance.version(), EditorVersion::Cursor);
        assert_eq!(records[2].instance.version(), EditorVersion::Code);
        assert!(records
            .iter()
            .all(|r| r.environment == WorkspaceEnvironment::SshRemote));
    }

    #[test]
    fn test_instance_without_history_files_contributes_nothing() {
        let temp = TempDir::new().unwrap();
        let instances = vec![EditorInstance::new(
            "/bin/cursor",
            temp.path().join("empty"),
            EditorVersion::Cursor,
        )];

        let sources = default_sources(&RecentsConfig::default());
        assert!(list_workspaces(&instances, &sources).is_empty());
    }

    #[test]
    fn test_extra_instances_are_appended_once() {
        let extra = ExtraInstance {
            executable_path: PathBuf::from("/opt/cursor/bin/cursor"),
            app_data: PathBuf::from("/opt/cursor/data/user-data"),
            version: EditorVersion::Cursor,
        };
        let config = RecentsConfig {
            extra_instances: vec![extra.clone()],
            ..Default::default()
        };
        let existing = vec![EditorInstance::from(&extra)];

        let engine = RecentsEngine::with_instances(existing, &config);
        assert_eq!(engine.instances().len(), 1);

        let engine = RecentsEngine::with_instances(Vec::new(), &config);
        assert_eq!(engine.instances().len(), 1);
    }
}
