//! End-to-end listing over temp-dir editor installs.

use recents_core::history::state_db::RECENTLY_OPENED_KEY;
use recents_core::{
    EditorInstance, EditorStorage, EditorVersion, RecentsConfig, RecentsEngine,
    WorkspaceEnvironment, WorkspaceType,
};
use rusqlite::{params, Connection};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

fn file_uri(path: &Path) -> String {
    let path = path.display().to_string().replace('\\', "/");
    if path.starts_with('/') {
        format!("file://{}", path)
    } else {
        format!("file:///{}", path)
    }
}

fn write_storage_json(app_data: &Path, doc: serde_json::Value) {
    std::fs::create_dir_all(app_data).unwrap();
    std::fs::write(
        EditorStorage::with_root(app_data.to_path_buf()).storage_file(),
        doc.to_string(),
    )
    .unwrap();
}

fn write_state_db(app_data: &Path, value: Option<serde_json::Value>) {
    let db_path = EditorStorage::with_root(app_data.to_path_buf()).state_db_file();
    std::fs::create_dir_all(db_path.parent().unwrap()).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    conn.execute(
        "CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
        params!["workbench.panel.lastUsed", "terminal"],
    )
    .unwrap();
    if let Some(value) = value {
        conn.execute(
            "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
            params![RECENTLY_OPENED_KEY, value.to_string()],
        )
        .unwrap();
    }
}

fn engine(instances: Vec<EditorInstance>) -> RecentsEngine {
    RecentsEngine::with_instances(instances, &RecentsConfig::default())
}

// ─────────────────────────────────────────────────────────────────────────────
// storage.json
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_legacy_local_folder() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("a");
    std::fs::create_dir_all(&project).unwrap();
    let app_data = temp.path().join("Cursor");
    write_storage_json(
        &app_data,
        json!({ "openedPathsList": { "workspaces3": [file_uri(&project)] } }),
    );

    let engine = engine(vec![EditorInstance::new(
        "/usr/bin/cursor",
        &app_data,
        EditorVersion::Cursor,
    )]);
    let records = engine.list_workspaces();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].folder_name, "a");
    assert_eq!(records[0].workspace_type, WorkspaceType::ProjectFolder);
    assert_eq!(records[0].environment, WorkspaceEnvironment::Local);
    assert_eq!(records[0].extra_info, "");
    assert!(Path::new(&records[0].path).is_dir());
}

#[test]
fn test_missing_local_folder_is_dropped() {
    let temp = TempDir::new().unwrap();
    let kept = temp.path().join("kept");
    std::fs::create_dir_all(&kept).unwrap();
    let app_data = temp.path().join("Code");
    write_storage_json(
        &app_data,
        json!({ "openedPathsList": { "entries": [
            { "folderUri": file_uri(&temp.path().join("deleted")) },
            { "folderUri": file_uri(&kept) },
        ] } }),
    );

    let engine = engine(vec![EditorInstance::new(
        "/usr/bin/code",
        &app_data,
        EditorVersion::Code,
    )]);
    let names: Vec<_> = engine
        .list_workspaces()
        .into_iter()
        .map(|r| r.folder_name)
        .collect();

    assert_eq!(names, vec!["kept".to_string()]);
}

#[test]
fn test_workspace_config_path_takes_precedence() {
    let temp = TempDir::new().unwrap();
    let app_data = temp.path().join("Cursor");
    write_storage_json(
        &app_data,
        json!({ "openedPathsList": { "entries": [{
            "folderUri": "vscode-remote://ssh-remote%2Bhost/srv/folder",
            "workspace": {
                "id": "1f2e",
                "configPath": "vscode-remote://ssh-remote%2Bhost/srv/team.code-workspace"
            }
        }] } }),
    );

    let engine = engine(vec![EditorInstance::new(
        "/usr/bin/cursor",
        &app_data,
        EditorVersion::Cursor,
    )]);
    let records = engine.list_workspaces();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].folder_name, "team.code-workspace");
    assert_eq!(records[0].workspace_type, WorkspaceType::WorkspaceFile);
    assert_eq!(records[0].extra_info, "host");
}

// ─────────────────────────────────────────────────────────────────────────────
// state.vscdb
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_state_db_entries() {
    let temp = TempDir::new().unwrap();
    let app_data = temp.path().join("Cursor");
    write_state_db(
        &app_data,
        Some(json!({ "entries": [
            { "folderUri": "vscode-remote://dev-container%2Bweb/workspaces/web" },
            { "folderUri": "vscode-remote://wsl%2BDebian/home/me/api", "remoteAuthority": "wsl+Debian" },
            { "fileUri": "vscode-remote://wsl%2BDebian/home/me/notes.md" },
        ] })),
    );

    let engine = engine(vec![EditorInstance::new(
        "/usr/bin/cursor",
        &app_data,
        EditorVersion::Cursor,
    )]);
    let records = engine.list_workspaces();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].environment, WorkspaceEnvironment::DevContainer);
    assert_eq!(records[0].folder_name, "web");
    assert_eq!(records[1].environment, WorkspaceEnvironment::Wsl);
    assert_eq!(records[1].extra_info, "Debian");
}

#[test]
fn test_state_db_without_history_key_is_empty() {
    let temp = TempDir::new().unwrap();
    let app_data = temp.path().join("Cursor");
    write_state_db(&app_data, None);

    let engine = engine(vec![EditorInstance::new(
        "/usr/bin/cursor",
        &app_data,
        EditorVersion::Cursor,
    )]);

    assert!(engine.list_workspaces().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Ordering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_json_before_db_and_instances_in_order() {
    let temp = TempDir::new().unwrap();
    let cursor = temp.path().join("Cursor");
    let codium = temp.path().join("VSCodium");

    write_storage_json(
        &cursor,
        json!({ "openedPathsList": { "entries": [
            { "folderUri": "vscode-remote://ssh-remote%2Bbox/srv/from-json" }
        ] } }),
    );
    write_state_db(
        &cursor,
        Some(json!({ "entries": [
            { "folderUri": "vscode-remote://ssh-remote%2Bbox/srv/from-db" }
        ] })),
    );
    write_state_db(
        &codium,
        Some(json!({ "entries": [
            { "folderUri": "vscode-remote://ssh-remote%2Bbox/srv/from-codium" },
            { "folderUri": "vscode-remote://ssh-remote%2Bbox/srv/from-db" }
        ] })),
    );

    let engine = engine(vec![
        EditorInstance::new("/usr/bin/cursor", &cursor, EditorVersion::Cursor),
        EditorInstance::new("/usr/bin/codium", &codium, EditorVersion::VsCodium),
    ]);
    let records = engine.list_workspaces();

    let summary: Vec<_> = records
        .iter()
        .map(|r| (r.folder_name.as_str(), r.instance.version()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("from-json", EditorVersion::Cursor),
            ("from-db", EditorVersion::Cursor),
            ("from-codium", EditorVersion::VsCodium),
            ("from-db", EditorVersion::VsCodium),
        ]
    );
}
