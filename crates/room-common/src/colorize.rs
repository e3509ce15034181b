//! `[[NAME]]` marker substitution.
//!
//! Markers are replaced by the control code registered under the uppercased
//! name. Unknown markers and stray brackets pass through untouched, and every
//! call ends the output with the registry's reset code.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::registry::ColorRegistry;
use crate::registry::ColorSource;

#[allow(clippy::expect_used)]
fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[([A-Za-z0-9_]+)\]\]").expect("Invalid marker regex"))
}

/// Colorizes `source` with the builtin color table.
pub fn colorize(source: &str) -> String {
    colorize_with(ColorRegistry::builtin(), source)
}

/// Colorizes `source` with whatever table `colors` discovers.
///
/// If discovery fails the input comes back unchanged, without a reset code.
pub fn colorize_with<S>(colors: &S, source: &str) -> String
where
    S: ColorSource + ?Sized,
{
    let registry = match colors.discover() {
        Ok(registry) => registry,
        Err(err) => {
            warn!(error = %err, "color table unavailable, leaving text uncolored");
            return source.to_string();
        }
    };
    let reset = registry.reset();
    let mut out = String::with_capacity(source.len() + reset.len());
    let mut copied_up_to = 0;

    for caps in marker_regex().captures_iter(source) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(code) = registry.lookup(&name.as_str().to_ascii_uppercase()) else {
            continue;
        };
        out.push_str(&source[copied_up_to..whole.start()]);
        out.push_str(code);
        copied_up_to = whole.end();
    }

    out.push_str(&source[copied_up_to..]);
    out.push_str(reset);
    out
}
