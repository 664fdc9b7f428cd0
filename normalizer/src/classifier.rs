use crate::patterns::{looks_like_domain, looks_like_url};
use shared_types::ActionType;

/// Exact storage tags, after lower-casing and dropping `_`, `-` and spaces.
const EXACT_TAGS: &[(&str, ActionType)] = &[
    ("phone", ActionType::Phone),
    ("email", ActionType::Email),
    ("venmo", ActionType::Venmo),
    ("cashapp", ActionType::Cashapp),
    ("cash", ActionType::Cashapp),
    ("paypal", ActionType::Paypal),
    ("instagram", ActionType::Instagram),
    ("tiktok", ActionType::Tiktok),
    ("youtube", ActionType::Youtube),
    ("youtu.be", ActionType::Youtube),
    ("x", ActionType::X),
    ("twitter", ActionType::X),
    ("website", ActionType::Website),
    ("other", ActionType::Other),
    ("custom", ActionType::Other),
];

/// Substrings searched in `tag label value`, in priority order.
///
/// A bare `x` is only meaningful as an exact tag; `x.com` links are caught
/// by host instead, so `dropbox.com` stays a website.
const SEARCH_TOKENS: &[(&str, ActionType)] = &[
    ("phone", ActionType::Phone),
    ("email", ActionType::Email),
    ("venmo", ActionType::Venmo),
    ("cashapp", ActionType::Cashapp),
    ("cash.app", ActionType::Cashapp),
    ("cash app", ActionType::Cashapp),
    ("cash", ActionType::Cashapp),
    ("paypal", ActionType::Paypal),
    ("instagram", ActionType::Instagram),
    ("tiktok", ActionType::Tiktok),
    ("youtube", ActionType::Youtube),
    ("youtu.be", ActionType::Youtube),
    ("twitter", ActionType::X),
    ("website", ActionType::Website),
];

/// Infers the [`ActionType`] of an entry from its stored tag, label and value.
///
/// A recognized tag is authoritative, including an explicit `other`/`custom`.
/// Text sniffing only happens when the tag is missing or unknown. Never fails;
/// [`ActionType::Other`] is the floor.
pub fn classify(raw_type: Option<&str>, label: Option<&str>, value: Option<&str>) -> ActionType {
    if let Some(tag) = raw_type.and_then(exact_tag) {
        return tag;
    }

    let search = [raw_type, label, value]
        .iter()
        .flatten()
        .map(|part| part.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    if let Some((_, action_type)) = SEARCH_TOKENS
        .iter()
        .find(|(token, _)| search.contains(token))
    {
        return *action_type;
    }

    // `x` never matches as a substring, only as the whole label
    if label.and_then(exact_tag) == Some(ActionType::X) {
        return ActionType::X;
    }

    let value = value.unwrap_or_default();
    if host_is_x(value) {
        return ActionType::X;
    }
    if looks_like_url(value) || looks_like_domain(value) {
        return ActionType::Website;
    }

    ActionType::Other
}

fn exact_tag(raw_type: &str) -> Option<ActionType> {
    let tag: String = raw_type
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .collect();

    EXACT_TAGS
        .iter()
        .find(|(token, _)| *token == tag)
        .map(|(_, action_type)| *action_type)
}

fn host_is_x(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value.as_str());
    let host = rest.split('/').next().unwrap_or_default();
    host == "x.com" || host == "www.x.com"
}
