// File: src/format.rs
// Purpose: Lexical format predicates backed by lazily compiled patterns

use once_cell::sync::Lazy;
use regex::Regex;

// RFC 5322-derived, same shape browsers use for type="email"
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .unwrap()
});

// Optional scheme, then a dotted domain with TLD or an IPv4 address,
// optional port, path, query and fragment
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(https?://)?(([a-z0-9]([a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}|(\d{1,3}\.){3}\d{1,3})(:\d+)?(/[-a-z0-9%_.~+]*)*(\?[;&a-z0-9%_.~+=-]*)?(\#[-a-z0-9_]*)?$",
    )
    .unwrap()
});

// Optional sign, digits, optional fraction, optional exponent
static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?\d+(\.\d+)?([eE][-+]?\d+)?$").unwrap());

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").unwrap());

static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

static ALPHANUM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+$").unwrap());

/// Validate email format
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validate URL format
pub fn is_valid_url(value: &str) -> bool {
    URL_REGEX.is_match(value)
}

/// Check the floating-point lexical grammar
pub fn is_number(value: &str) -> bool {
    NUMBER_REGEX.is_match(value)
}

/// Check for a signed integer literal
pub fn is_integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value)
}

/// Check for an unsigned integer literal
pub fn is_digits(value: &str) -> bool {
    DIGITS_REGEX.is_match(value)
}

/// Check for word characters only
pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUM_REGEX.is_match(value)
}
