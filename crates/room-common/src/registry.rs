//! Named ANSI control codes.
//!
//! The builtin table is the text-authoring surface for `[[NAME]]` markers, so
//! its names are versioned: renaming or removing an entry is a breaking change
//! and must bump [`REGISTRY_VERSION`].

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::RegistryError;

pub const REGISTRY_VERSION: u32 = 1;

pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const UNDERLINE: &str = "\x1b[4m";

    pub const BLACK: &str = "\x1b[30m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const PURPLE: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";

    pub const BRIGHT_BLACK: &str = "\x1b[90m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_PURPLE: &str = "\x1b[95m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_WHITE: &str = "\x1b[97m";

    pub const BG_BLACK: &str = "\x1b[40m";
    pub const BG_RED: &str = "\x1b[41m";
    pub const BG_GREEN: &str = "\x1b[42m";
    pub const BG_YELLOW: &str = "\x1b[43m";
    pub const BG_BLUE: &str = "\x1b[44m";
    pub const BG_PURPLE: &str = "\x1b[45m";
    pub const BG_CYAN: &str = "\x1b[46m";
    pub const BG_WHITE: &str = "\x1b[47m";

    pub const BG_BRIGHT_BLACK: &str = "\x1b[100m";
    pub const BG_BRIGHT_RED: &str = "\x1b[101m";
    pub const BG_BRIGHT_GREEN: &str = "\x1b[102m";
    pub const BG_BRIGHT_YELLOW: &str = "\x1b[103m";
    pub const BG_BRIGHT_BLUE: &str = "\x1b[104m";
    pub const BG_BRIGHT_PURPLE: &str = "\x1b[105m";
    pub const BG_BRIGHT_CYAN: &str = "\x1b[106m";
    pub const BG_BRIGHT_WHITE: &str = "\x1b[107m";
}

pub const ANSI_COLORS: &[(&str, &str)] = &[
    ("RESET", codes::RESET),
    ("BOLD", codes::BOLD),
    ("UNDERLINE", codes::UNDERLINE),
    ("BLACK", codes::BLACK),
    ("RED", codes::RED),
    ("GREEN", codes::GREEN),
    ("YELLOW", codes::YELLOW),
    ("BLUE", codes::BLUE),
    ("PURPLE", codes::PURPLE),
    ("CYAN", codes::CYAN),
    ("WHITE", codes::WHITE),
    ("BRIGHT_BLACK", codes::BRIGHT_BLACK),
    ("BRIGHT_RED", codes::BRIGHT_RED),
    ("BRIGHT_GREEN", codes::BRIGHT_GREEN),
    ("BRIGHT_YELLOW", codes::BRIGHT_YELLOW),
    ("BRIGHT_BLUE", codes::BRIGHT_BLUE),
    ("BRIGHT_PURPLE", codes::BRIGHT_PURPLE),
    ("BRIGHT_CYAN", codes::BRIGHT_CYAN),
    ("BRIGHT_WHITE", codes::BRIGHT_WHITE),
    ("BG_BLACK", codes::BG_BLACK),
    ("BG_RED", codes::BG_RED),
    ("BG_GREEN", codes::BG_GREEN),
    ("BG_YELLOW", codes::BG_YELLOW),
    ("BG_BLUE", codes::BG_BLUE),
    ("BG_PURPLE", codes::BG_PURPLE),
    ("BG_CYAN", codes::BG_CYAN),
    ("BG_WHITE", codes::BG_WHITE),
    ("BG_BRIGHT_BLACK", codes::BG_BRIGHT_BLACK),
    ("BG_BRIGHT_RED", codes::BG_BRIGHT_RED),
    ("BG_BRIGHT_GREEN", codes::BG_BRIGHT_GREEN),
    ("BG_BRIGHT_YELLOW", codes::BG_BRIGHT_YELLOW),
    ("BG_BRIGHT_BLUE", codes::BG_BRIGHT_BLUE),
    ("BG_BRIGHT_PURPLE", codes::BG_BRIGHT_PURPLE),
    ("BG_BRIGHT_CYAN", codes::BG_BRIGHT_CYAN),
    ("BG_BRIGHT_WHITE", codes::BG_BRIGHT_WHITE),
];

static BUILTIN: LazyLock<ColorRegistry> = LazyLock::new(|| ColorRegistry {
    codes: ANSI_COLORS
        .iter()
        .map(|(name, code)| ((*name).to_string(), (*code).to_string()))
        .collect(),
});

/// Read-only mapping from uppercase color names to control codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRegistry {
    codes: HashMap<String, String>,
}

impl ColorRegistry {
    /// The process-wide table built from [`ANSI_COLORS`].
    pub fn builtin() -> &'static ColorRegistry {
        &BUILTIN
    }

    /// Builds a registry from caller-supplied pairs.
    ///
    /// Names are stored uppercased. Every name must be made of word
    /// characters, every code must be non-empty and a `RESET` entry must be
    /// present.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut codes = HashMap::new();
        for (name, code) in pairs {
            let name = name.as_ref();
            if !is_color_name(name) {
                return Err(RegistryError::InvalidName {
                    name: name.to_string(),
                });
            }
            let code = code.into();
            if code.is_empty() {
                return Err(RegistryError::EmptyCode {
                    name: name.to_string(),
                });
            }
            let key = name.to_ascii_uppercase();
            if codes.contains_key(&key) {
                return Err(RegistryError::Duplicate { name: key });
            }
            codes.insert(key, code);
        }

        if !codes.contains_key("RESET") {
            return Err(RegistryError::MissingReset);
        }

        Ok(Self { codes })
    }

    /// Exact, case-sensitive lookup. Callers uppercase the name first.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.codes.get(name).map(String::as_str)
    }

    pub fn reset(&self) -> &str {
        self.lookup("RESET").unwrap_or(codes::RESET)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.codes.keys().map(String::as_str)
    }
}

pub(crate) fn is_color_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Where the marker engine gets its color table from.
///
/// Discovery may fail for pluggable tables; the engine then leaves its input
/// untouched.
pub trait ColorSource {
    fn discover(&self) -> Result<&ColorRegistry, RegistryError>;
}

impl ColorSource for ColorRegistry {
    fn discover(&self) -> Result<&ColorRegistry, RegistryError> {
        Ok(self)
    }
}

impl ColorSource for Result<ColorRegistry, RegistryError> {
    fn discover(&self) -> Result<&ColorRegistry, RegistryError> {
        self.as_ref().map_err(RegistryError::clone)
    }
}
