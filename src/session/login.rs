// file: src/session/login.rs
// description: detects the signed-in user marker in the wordbook page document
// reference: https://docs.rs/regex

use crate::error::{ExportError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

lazy_static! {
    /// Comments and raw-text elements whose contents are never rendered as tags.
    pub static ref HIDDEN_MARKUP: Regex = Regex::new(
        r"(?is)<!--.*?(?:-->|\z)|<(script|style|template)\b[^>]*>.*?(?:</(?:script|style|template)\s*>|\z)"
    ).expect("HIDDEN_MARKUP regex is valid");

    pub static ref START_TAG: Regex = Regex::new(
        r"<[A-Za-z][A-Za-z0-9-]*(?:\s[^>]*)?>"
    ).expect("START_TAG regex is valid");

    pub static ref TAG_ATTRIBUTE: Regex = Regex::new(
        r#"\s([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#
    ).expect("TAG_ATTRIBUTE regex is valid");
}

/// True when some element carries `marker` as a class token or as its role.
pub fn has_login_marker(document: &str, marker: &str) -> bool {
    let marker = marker.trim();
    if marker.is_empty() {
        return false;
    }

    let visible = HIDDEN_MARKUP.replace_all(document, "");
    START_TAG.find_iter(&visible).any(|tag| {
        TAG_ATTRIBUTE.captures_iter(tag.as_str()).any(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str())
                .unwrap_or_default();

            match caps[1].to_ascii_lowercase().as_str() {
                "class" => value.split_whitespace().any(|token| token == marker),
                "role" => value.trim() == marker,
                _ => false,
            }
        })
    })
}

/// Fails with the log-in notice when the page shows no signed-in user.
pub fn ensure_logged_in(document: &str, marker: &str) -> Result<()> {
    if has_login_marker(document, marker) {
        debug!("Login marker '{}' found", marker);
        Ok(())
    } else {
        warn!("No account detected: login marker '{}' missing", marker);
        Err(ExportError::NotLoggedIn)
    }
}
