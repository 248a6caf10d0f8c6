//! recents: lists recently opened editor workspaces and SSH remote hosts.
//!
//! Thin front end over `recents-core`, meant to feed launchers and shell
//! pickers.
//!
//! ## Subcommands
//!
//! - `instances`: Editor installs found on `PATH` (plus configured extras)
//! - `workspaces`: Recently opened folders and `.code-workspace` files
//! - `machines`: Hosts from each editor's configured SSH config file

mod logging;
mod output;

use clap::{Parser, Subcommand};
use recents_core::config::load_config_or_default;
use recents_core::{discover_instances, load_config, EditorInstance, EditorVersion, RecentsEngine};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recents")]
#[command(about = "Recently opened workspaces for VS Code-family editors")]
#[command(version)]
struct Cli {
    /// Emit JSON instead of tab-separated text
    #[arg(long, global = true)]
    json: bool,

    /// Read this user-data directory instead of discovering installs
    #[arg(long, global = true, value_name = "DIR", requires = "executable")]
    app_data: Option<PathBuf>,

    /// Launcher of the editor owning --app-data
    #[arg(long, global = true, value_name = "PATH", requires = "app_data")]
    executable: Option<PathBuf>,

    /// Editor flavour of --app-data (cursor, code, code-insiders, vscodium)
    #[arg(long, global = true, value_name = "ID", default_value = "cursor", value_parser = parse_editor)]
    editor: EditorVersion,

    /// Alternate configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List editor instances
    Instances,

    /// List recently opened workspaces
    Workspaces,

    /// List SSH remote machines
    Machines,
}

fn parse_editor(value: &str) -> Result<EditorVersion, String> {
    EditorVersion::from_id(value).ok_or_else(|| format!("unknown editor '{}'", value))
}

fn build_engine(cli: &Cli) -> RecentsEngine {
    let config = match &cli.config {
        Some(path) => load_config_or_default(path),
        None => load_config(),
    };

    let instances = match (&cli.app_data, &cli.executable) {
        (Some(app_data), Some(executable)) => {
            vec![EditorInstance::new(executable, app_data, cli.editor)]
        }
        _ => discover_instances(&config.disabled_editors),
    };

    RecentsEngine::with_instances(instances, &config)
}

fn run(cli: &Cli) -> Result<String, serde_json::Error> {
    let engine = build_engine(cli);

    match cli.command {
        Commands::Instances => output::render(engine.instances(), cli.json, output::instance_line),
        Commands::Workspaces => {
            let records = engine.list_workspaces();
            tracing::debug!(count = records.len(), "Listed workspaces");
            output::render(&records, cli.json, output::workspace_line)
        }
        Commands::Machines => {
            let machines = engine.list_machines();
            tracing::debug!(count = machines.len(), "Listed remote machines");
            output::render(&machines, cli.json, output::machine_line)
        }
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(out) if out.is_empty() => {}
        Ok(out) => println!("{}", out),
        Err(e) => {
            tracing::error!(error = %e, "recents failed to serialize output");
            eprintln!("recents: {}", e);
            std::process::exit(1);
        }
    }
}
