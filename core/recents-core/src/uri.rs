//! Minimal RFC 3986 splitter for the URIs VS Code-family editors persist.
//!
//! Only `scheme ":" ["//" authority] path` is recognised. Query and fragment
//! terminate the path and are discarded. The whole input is percent-decoded
//! exactly once before splitting, so no component ever contains an escape.

use crate::error::{RecentsError, Result};
use crate::types::ParsedUri;

/// Percent-decodes `raw` in a single pass.
///
/// A `%` that is not followed by two hex digits is kept as-is, and byte
/// sequences that do not form UTF-8 are replaced lossily.
pub fn percent_decode(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

/// Splits a (possibly escaped) URI into scheme, authority and path.
pub fn parse(raw: &str) -> Result<ParsedUri> {
    let decoded = percent_decode(raw);

    let (scheme, rest) = decoded
        .split_once(':')
        .filter(|(scheme, _)| is_valid_scheme(scheme))
        .ok_or_else(|| RecentsError::MalformedUri {
            uri: raw.to_string(),
        })?;

    let (authority, remainder) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            after.split_at(end)
        }
        None => ("", rest),
    };

    let path_end = remainder.find(['?', '#']).unwrap_or(remainder.len());

    Ok(ParsedUri {
        scheme: scheme.to_string(),
        authority: authority.to_string(),
        path: remainder[..path_end].to_string(),
    })
}

// ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
