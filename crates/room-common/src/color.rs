//! Terminal color switch and CLI message styles.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::colorize::colorize;
use crate::registry::codes;
use crate::string_utils::strip_ansi_codes;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

/// Decides once per process whether colored output is allowed.
///
/// Color is off when asked for, when `NO_COLOR` is set, or when stdout is not
/// a terminal, unless `force` is set.
pub fn init(no_color_flag: bool, force: bool) {
    let _ = NO_COLOR.set(
        !force
            && (no_color_flag
                || std::env::var_os("NO_COLOR").is_some()
                || !std::io::stdout().is_terminal()),
    );
}

pub fn is_disabled() -> bool {
    NO_COLOR.get().copied().unwrap_or(false)
}

pub struct Colors;

fn paint(text: &str, prefixes: &[&str]) -> String {
    if is_disabled() {
        return text.to_string();
    }
    let prefix_len: usize = prefixes.iter().map(|prefix| prefix.len()).sum();
    let mut out = String::with_capacity(prefix_len + text.len() + codes::RESET.len());
    for prefix in prefixes {
        out.push_str(prefix);
    }
    out.push_str(text);
    out.push_str(codes::RESET);
    out
}

impl Colors {
    pub fn success(text: &str) -> String {
        paint(text, &[codes::GREEN])
    }

    pub fn error(text: &str) -> String {
        paint(text, &[codes::RED])
    }

    /// Resolves `[[NAME]]` markers, or strips the resulting codes when color
    /// is disabled.
    pub fn markup(text: &str) -> String {
        let colored = colorize(text);
        if is_disabled() {
            strip_ansi_codes(&colored)
        } else {
            colored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_disabled() {
        let _ = NO_COLOR.set(true);
        assert_eq!(Colors::success("test"), "test");
        assert_eq!(Colors::error("test"), "test");
        assert_eq!(Colors::markup("[[RED]]test[[NOPE]]"), "test[[NOPE]]");
    }
}
