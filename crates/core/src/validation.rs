//! Shared field-format checks used by registration and nameplate submission.

use std::sync::OnceLock;

use regex::Regex;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex is valid"))
}

fn mobile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{10,15}$").expect("mobile regex is valid"))
}

/// Basic email shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Mobile numbers are 10 to 15 digits, no separators.
pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile_regex().is_match(mobile)
}
