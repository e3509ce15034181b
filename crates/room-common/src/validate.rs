//! Account input checks.

use std::sync::OnceLock;

use regex::Regex;

const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_ADDRESS_LEN: usize = 254;

/// Passwords rejected outright as too easy to guess.
pub const WEAK_PASSWORDS: &[&str] = &[
    "123456",
    "1234567",
    "12345678",
    "123456789",
    "1234567890",
    "234567",
    "2345678",
    "23456789",
    "24567890",
    "345678",
    "3456789",
    "34567890",
    "456789",
    "4567890",
    "567890",
    "monkey",
    "654321",
    "0987654321",
    "987654321",
    "87654321",
    "7654321",
    "qwerty",
    "qwertyuiop",
    "zxcvbn",
    "zxcvbnm",
    "asdfghjkl",
    "password",
    "111111",
    "sunshine",
    "iloveyou",
    "princess",
    "admin",
    "welcome",
    "666666",
    "abc123",
    "football",
    "123123",
    "!@#$%^&*",
];

#[allow(clippy::expect_used)]
fn mailbox_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let atext = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+";
        let quoted = r#""(?:[^"\\\r\n]|\\.)+""#;
        let label = r"[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?";
        let domain = format!(r"(?:{label}(?:\.{label})*|\[[^\[\]\\\s@]+\])");
        let local = format!(r"(?:{atext}(?:\.{atext})*|{quoted})");
        let phrase = format!(r"(?:(?:{atext}|{quoted}|\.)[ \t]*)+");
        let pattern = format!(
            r"^(?:(?P<bare>{local}@{domain})|(?:{phrase})?<(?P<angle>{local}@{domain})>)$"
        );
        Regex::new(&pattern).expect("Invalid email regex")
    })
}

/// Checks that `email` is a single, syntactically valid mailbox.
///
/// Accepts a bare address (`david@example.com`) or a display name followed
/// by an address in angle brackets (`David <david@example.com>`). Surrounding
/// whitespace is ignored. The local part is a dot-atom or a quoted string;
/// the domain is either dot-separated letter/digit/hyphen labels (a single
/// label such as `localhost` is fine) or a bracketed literal like
/// `[127.0.0.1]`.
pub fn is_valid_email_address(email: &str) -> bool {
    let Some(caps) = mailbox_regex().captures(email.trim()) else {
        return false;
    };
    let Some(address) = caps.name("bare").or_else(|| caps.name("angle")) else {
        return false;
    };
    let address = address.as_str();
    if address.len() > MAX_ADDRESS_LEN {
        return false;
    }
    address
        .rsplit_once('@')
        .is_some_and(|(local, _)| local.len() <= MAX_LOCAL_PART_LEN)
}

/// True if `password` is on the [`WEAK_PASSWORDS`] list. Matching is exact.
pub fn is_password_too_weak(password: &str) -> bool {
    WEAK_PASSWORDS.contains(&password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for email in [
            "david@example.com",
            "first.last@sub.example.org",
            "user+tag@example.co",
            "o'brien@example.ie",
            "root@localhost",
            "admin@[127.0.0.1]",
            "x@a-b.example",
            "\"john doe\"@example.com",
        ] {
            assert!(is_valid_email_address(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@exa mple.com",
            "\"unterminated@example.com",
            "\"\"@example.com",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user@example-.com",
            "user@example..com",
            "user@.example.com",
            "David <david@example.com",
            "David david@example.com",
            "<>",
            "a@example.com, b@example.com",
        ] {
            assert!(!is_valid_email_address(email), "{email:?} should be invalid");
        }
    }

    #[test]
    fn test_mailbox_forms() {
        for email in [
            "David <david@example.com>",
            "<david@example.com>",
            "\"Doe, John\" <john@example.com>",
            "J. Smith <j.smith@example.org>",
            " user@example.com ",
            "\tDavid <david@example.com>\n",
        ] {
            assert!(is_valid_email_address(email), "{email:?} should be valid");
        }
    }

    #[test]
    fn test_address_length_limits() {
        let local = "a".repeat(MAX_LOCAL_PART_LEN);
        assert!(is_valid_email_address(&format!("{local}@example.com")));
        assert!(!is_valid_email_address(&format!("{local}a@example.com")));
        assert!(!is_valid_email_address(&format!("Someone <{local}a@example.com>")));

        let labels: Vec<String> = std::iter::repeat_n("b".repeat(60), 5).collect();
        let domain = format!("{}.com", labels.join("."));
        assert!(!is_valid_email_address(&format!("a@{domain}")));
    }

    #[test]
    fn test_weak_passwords() {
        assert!(is_password_too_weak("123456"));
        assert!(is_password_too_weak("qwerty"));
        assert!(is_password_too_weak("!@#$%^&*"));
        assert!(is_password_too_weak("654321"));
    }

    #[test]
    fn test_strong_or_near_miss_passwords() {
        assert!(!is_password_too_weak("correct horse battery staple"));
        assert!(!is_password_too_weak("Password"));
        assert!(!is_password_too_weak("123456 "));
        assert!(!is_password_too_weak(""));
    }

    #[test]
    fn test_weak_list_has_no_duplicates() {
        let mut sorted = WEAK_PASSWORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), WEAK_PASSWORDS.len());
    }
}
