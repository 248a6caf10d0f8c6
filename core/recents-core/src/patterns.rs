//! Compiled regex patterns for classifying remote authorities.
//!
//! These are compiled once on first use. Update them when an editor adds a
//! new remote kind or changes the authority prefix it writes.

use once_cell::sync::Lazy;
use regex::Regex;

// ═══════════════════════════════════════════════════════════════════════════════
// Remote Authority Regexes
// ═══════════════════════════════════════════════════════════════════════════════

pub static RE_WSL_AUTHORITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^wsl\+(.+)$").unwrap());
pub static RE_SSH_REMOTE_AUTHORITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^ssh-remote\+(.+)$").unwrap());
pub static RE_DEV_CONTAINER_AUTHORITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^dev-container\+(.+)$").unwrap());

// ═══════════════════════════════════════════════════════════════════════════════
// Path Regexes
// ═══════════════════════════════════════════════════════════════════════════════

/// `/C:/...` as produced for Windows drive paths inside `file://` URIs.
pub static RE_URI_DRIVE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/[A-Za-z]:([/\\]|$)").unwrap());
