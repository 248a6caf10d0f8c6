//! Verbatim transcription of OpenSSH config `Host` blocks.
//!
//! Only `Host`, `HostName` and `User` are read. A `Host` line with several
//! patterns yields one entry per pattern, all sharing the directives of that
//! block. Patterns are kept as written: `*` and `?` are not expanded and no
//! matching against concrete host names is attempted.
//!
//! Like OpenSSH, the first value of a directive inside a block wins, and
//! `Key=Value` is accepted alongside `Key Value`.

use std::path::Path;

use crate::error::{RecentsError, Result};
use crate::types::SshHostEntry;

/// Reads and parses an SSH config file.
pub fn parse_file(path: &Path) -> Result<Vec<SshHostEntry>> {
    let content = fs_err::read_to_string(path).map_err(|source| RecentsError::Io {
        context: "reading SSH config".to_string(),
        source,
    })?;
    Ok(parse_str(&content))
}

/// Parses SSH config text. Never fails; unrecognized lines are ignored.
pub fn parse_str(content: &str) -> Vec<SshHostEntry> {
    let mut hosts: Vec<SshHostEntry> = Vec::new();
    // Index of the first entry of the open `Host` block, if any.
    let mut block_start: Option<usize> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((directive, value)) = split_directive(line) else {
            continue;
        };

        if directive.eq_ignore_ascii_case("host") {
            block_start = Some(hosts.len());
            hosts.extend(split_patterns(value).into_iter().map(|host| SshHostEntry {
                host,
                ..Default::default()
            }));
            continue;
        }

        if directive.eq_ignore_ascii_case("match") {
            block_start = None;
            continue;
        }

        let Some(start) = block_start else {
            continue;
        };

        let value = unquote(value);
        if directive.eq_ignore_ascii_case("hostname") {
            for entry in &mut hosts[start..] {
                entry.host_name.get_or_insert_with(|| value.to_string());
            }
        } else if directive.eq_ignore_ascii_case("user") {
            for entry in &mut hosts[start..] {
                entry.user.get_or_insert_with(|| value.to_string());
            }
        }
    }

    hosts
}

/// Splits `Key Value`, `Key=Value` or `Key = Value`.
fn split_directive(line: &str) -> Option<(&str, &str)> {
    let end = line.find(|c: char| c.is_whitespace() || c == '=')?;
    let (key, rest) = line.split_at(end);
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('=').unwrap_or(rest).trim();

    if key.is_empty() || rest.is_empty() {
        None
    } else {
        Some((key, rest))
    }
}

/// Splits a `Host` value on whitespace, keeping double-quoted patterns whole.
fn split_patterns(value: &str) -> Vec<String> {
    let mut patterns = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in value.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    patterns.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        patterns.push(current);
    }

    patterns
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
