use regex::Regex;
use std::sync::LazyLock;

static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://[^\s/$.?#][^\s]*$").expect("http url pattern compiles")
});

/// `true` for an absolute `http://` or `https://` URL.
pub fn looks_like_url(value: &str) -> bool {
    HTTP_URL.is_match(value.trim())
}

/// A scheme-less host like `bob.dev` or `youtube.com/@chan`.
///
/// The host part must contain a dot and no `@`, which keeps email
/// addresses out.
pub fn looks_like_domain(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.contains("://") || value.chars().any(char::is_whitespace) {
        return false;
    }

    let host = value.split('/').next().unwrap_or_default();
    host.contains('.') && !host.contains('@') && !host.starts_with('.') && !host.ends_with('.')
}

/// Digits plus a leading `+`, e.g. `+1 (555) 555-5555` -> `+15555555555`.
pub fn digits_only_phone(value: &str) -> String {
    let value = value.trim();
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return digits;
    }
    if value.starts_with('+') {
        format!("+{digits}")
    } else {
        digits
    }
}

/// Percent-encodes one path or query component.
pub fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
