//! Text and JSON rendering for listings.
//!
//! Text mode prints one tab-separated line per item so results can be piped
//! into `cut`, `fzf` and friends.

use recents_core::{EditorInstance, RemoteMachine, WorkspaceRecord};
use serde::Serialize;

pub fn instance_line(instance: &EditorInstance) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        instance.version(),
        instance.version().display_name(),
        instance.executable_path().display(),
        instance.app_data().display()
    )
}

pub fn workspace_line(record: &WorkspaceRecord<'_>) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        record.folder_name, record.environment, record.extra_info, record.path
    )
}

pub fn machine_line(machine: &RemoteMachine<'_>) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        machine.host,
        machine.user,
        machine.host_name,
        machine.instance.version()
    )
}

/// Renders `items` either as a pretty JSON array or line by line.
pub fn render<T: Serialize>(
    items: &[T],
    json: bool,
    line: impl Fn(&T) -> String,
) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(items);
    }

    Ok(items.iter().map(line).collect::<Vec<_>>().join("\n"))
}
