use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// optional leading +, then at least ten ASCII digits, spaces or dashes
static PHONE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+?[0-9\s-]{10,}$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// True for `None` and for strings that are empty once trimmed.
pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, |value| value.trim().is_empty())
}
