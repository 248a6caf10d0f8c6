use recents_core::{list_machines, EditorInstance, EditorStorage, EditorVersion};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn ssh_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ssh/config")
}

fn write_settings(app_data: &Path, content: &str) {
    let settings = EditorStorage::with_root(app_data.to_path_buf()).settings_file();
    std::fs::create_dir_all(settings.parent().unwrap()).unwrap();
    std::fs::write(settings, content).unwrap();
}

fn json_string(path: &Path) -> String {
    serde_json::to_string(&path.display().to_string()).unwrap()
}

#[test]
fn test_machines_from_fixture_config() {
    let temp = TempDir::new().unwrap();
    let app_data = temp.path().join("Cursor");
    write_settings(
        &app_data,
        &format!(
            "{{\n  // remote hosts\n  \"remote.SSH.configFile\": {},\n}}\n",
            json_string(&ssh_fixture())
        ),
    );
    let instances = vec![EditorInstance::new(
        "/usr/bin/cursor",
        &app_data,
        EditorVersion::Cursor,
    )];

    let machines = list_machines(&instances);
    let hosts: Vec<_> = machines.iter().map(|m| m.host.as_str()).collect();
    assert_eq!(hosts, vec!["*", "a", "b", "c"]);

    assert_eq!(machines[0].host_name, "");
    assert_eq!(machines[0].user, "");
    assert_eq!(machines[1].host_name, "a.example.com");
    assert_eq!(machines[1].user, "alice");
    assert_eq!(machines[2].host_name, "shared.example.com");
    assert_eq!(machines[3].host_name, "shared.example.com");
    assert_eq!(machines[3].user, "bob");
    assert!(machines
        .iter()
        .all(|m| m.instance.version() == EditorVersion::Cursor));
}

#[test]
fn test_malformed_settings_does_not_block_other_instances() {
    let temp = TempDir::new().unwrap();
    let broken = temp.path().join("Code");
    let healthy = temp.path().join("Cursor");
    write_settings(&broken, "{ \"remote.SSH.configFile\": ");
    write_settings(
        &healthy,
        &format!("{{ \"remote.SSH.configFile\": {} }}", json_string(&ssh_fixture())),
    );

    let instances = vec![
        EditorInstance::new("/usr/bin/code", &broken, EditorVersion::Code),
        EditorInstance::new("/usr/bin/cursor", &healthy, EditorVersion::Cursor),
    ];

    let machines = list_machines(&instances);
    assert_eq!(machines.len(), 4);
    assert!(machines
        .iter()
        .all(|m| m.instance.version() == EditorVersion::Cursor));
}

#[test]
fn test_instances_without_ssh_setting_contribute_nothing() {
    let temp = TempDir::new().unwrap();
    let no_settings = temp.path().join("Insiders");
    let no_key = temp.path().join("VSCodium");
    let missing_config = temp.path().join("Cursor");
    write_settings(&no_key, r#"{ "editor.fontSize": 14 }"#);
    write_settings(
        &missing_config,
        &format!(
            "{{ \"remote.SSH.configFile\": {} }}",
            json_string(&temp.path().join("nope").join("config"))
        ),
    );

    let instances = vec![
        EditorInstance::new("/usr/bin/code-insiders", &no_settings, EditorVersion::CodeInsiders),
        EditorInstance::new("/usr/bin/codium", &no_key, EditorVersion::VsCodium),
        EditorInstance::new("/usr/bin/cursor", &missing_config, EditorVersion::Cursor),
    ];

    assert!(list_machines(&instances).is_empty());
}
