//! Finds installed editors by their CLI launchers on `PATH`.
//!
//! Installers put a launcher (`cursor`, `code`, ...) in `<install>/bin` and
//! add that directory to `PATH`. The user-data directory is
//! `<install>/data/user-data` for portable installs (a `data` folder next to
//! `bin`), otherwise `<config_dir>/<AppDataFolder>`.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::types::{EditorInstance, EditorVersion};

#[cfg(windows)]
const LAUNCHER_EXTENSIONS: &[&str] = &[".cmd", ""];
#[cfg(not(windows))]
const LAUNCHER_EXTENSIONS: &[&str] = &[""];

/// Discovers editor instances from the process `PATH`, skipping the flavour
/// ids in `disabled`.
pub fn discover_instances(disabled: &[String]) -> Vec<EditorInstance> {
    let Some(config_dir) = dirs::config_dir() else {
        tracing::warn!("Could not determine the user config directory");
        return Vec::new();
    };
    let path_var = std::env::var_os("PATH").unwrap_or_default();

    discover_in(&path_var, &config_dir, disabled)
}

/// Discovery against an explicit `PATH` value and config directory.
///
/// Directories are visited in `PATH` order, each once. Instances are
/// unique by launcher path.
pub fn discover_in(path_var: &OsStr, config_dir: &Path, disabled: &[String]) -> Vec<EditorInstance> {
    let mut seen_dirs = HashSet::new();
    let mut seen_launchers = HashSet::new();
    let mut instances = Vec::new();

    for dir in std::env::split_paths(path_var) {
        if dir.as_os_str().is_empty() || !seen_dirs.insert(dir.clone()) || !dir.is_dir() {
            continue;
        }

        for version in EditorVersion::ALL {
            if disabled.iter().any(|id| id.eq_ignore_ascii_case(version.id())) {
                continue;
            }

            let Some(launcher) = find_launcher(&dir, version) else {
                continue;
            };
            if !seen_launchers.insert(launcher.clone()) {
                continue;
            }

            let app_data = app_data_dir(&launcher, config_dir, version);
            tracing::debug!(
                editor = %version,
                launcher = %launcher.display(),
                app_data = %app_data.display(),
                "Discovered editor instance"
            );
            instances.push(EditorInstance::new(launcher, app_data, version));
        }
    }

    instances
}

fn find_launcher(dir: &Path, version: EditorVersion) -> Option<PathBuf> {
    LAUNCHER_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}{}", version.launcher_name(), ext)))
        .find(|candidate| candidate.is_file())
}

/// Resolves the user-data directory for a launcher.
///
/// Symlinked launchers (`/usr/bin/code`) are resolved first so portable
/// detection looks next to the real install.
pub fn app_data_dir(launcher: &Path, config_dir: &Path, version: EditorVersion) -> PathBuf {
    let real = std::fs::canonicalize(launcher).unwrap_or_else(|_| launcher.to_path_buf());

    let portable = real
        .parent()
        .and_then(Path::parent)
        .map(|install| install.join("data"))
        .filter(|data| data.is_dir());

    match portable {
        Some(data) => data.join("user-data"),
        None => config_dir.join(version.app_data_folder()),
    }
}
