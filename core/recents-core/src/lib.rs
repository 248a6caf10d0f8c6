//! # recents-core
//!
//! Core library for editor-recents: finds installed VS Code-family editors
//! (Cursor, VS Code, VS Code Insiders, VSCodium), reads their "recently
//! opened" history and SSH remote hosts, and returns one normalized list of
//! workspaces for launcher clients.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency. Clients can wrap with async if needed.
//! - **Read-only**: Editor state and settings are never written.
//! - **Graceful degradation**: Missing, locked or malformed files yield fewer
//!   results, not errors. Failures are reported through `tracing`.
//! - **Borrowed back-references**: Workspace records and remote machines
//!   borrow the [`EditorInstance`] they came from.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use recents_core::RecentsEngine;
//!
//! let engine = RecentsEngine::new();
//! let workspaces = engine.list_workspaces();
//! let machines = engine.list_machines();
//! ```

// Public modules
pub mod authority;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod history;
pub mod patterns;
pub mod remote;
pub mod ssh_config;
pub mod storage;
pub mod types;
pub mod uri;
pub mod workspace;

// Re-export commonly used items at crate root
pub use config::{load_config, ExtraInstance, RecentsConfig};
pub use discovery::discover_instances;
pub use engine::{list_workspaces, RecentsEngine};
pub use error::{RecentsError, Result};
pub use history::{HistorySource, StateDbSource, StorageJsonSource};
pub use remote::list_machines;
pub use storage::EditorStorage;
pub use types::*;
pub use workspace::build_workspace;
