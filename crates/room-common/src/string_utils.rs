//! Escape-sequence stripping for plain-text output.

use std::sync::OnceLock;

use regex::Regex;

#[allow(clippy::expect_used)]
fn escape_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)?",
            r"|\x1b\[[0-?]*[ -/]*[@-~]",
            r"|\x1b[@-Z\\-_]?",
        ))
        .expect("Invalid escape sequence regex")
    })
}

/// Strip ANSI escape codes from a string.
///
/// Handles SGR and other CSI sequences (`\x1b[...m`, cursor movement) and OSC
/// sequences terminated by BEL or ST. A lone ESC is dropped.
pub fn strip_ansi_codes(s: &str) -> String {
    escape_regex().replace_all(s, "").into_owned()
}
