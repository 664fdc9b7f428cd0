use crate::patterns::{looks_like_domain, looks_like_url};
use shared_types::ActionType;

/// Canonicalizes the handle text of one entry for its type.
///
/// Idempotent for every type: decoration is stripped until none is left, so
/// a second pass never changes the result.
pub fn normalize_value(action_type: ActionType, raw: &str) -> String {
    let value = raw.trim();
    match action_type {
        ActionType::Venmo | ActionType::Instagram | ActionType::Tiktok | ActionType::X => {
            strip_handle(value, '@')
        }
        ActionType::Cashapp => strip_handle(value, '$'),
        ActionType::Paypal => {
            let undecorated = value.trim_start_matches(|c: char| c == '@' || c.is_whitespace());
            if is_paypal_link(undecorated) {
                undecorated.to_string()
            } else {
                strip_handle(value, '@')
            }
        }
        ActionType::Phone
        | ActionType::Email
        | ActionType::Youtube
        | ActionType::Website
        | ActionType::Other => value.to_string(),
    }
}

/// `paypal.me/...` paths, full URLs and bare domains are kept as entered.
pub fn is_paypal_link(value: &str) -> bool {
    looks_like_url(value)
        || looks_like_domain(value)
        || value.to_lowercase().contains("paypal.me/")
}

/// Handles never contain whitespace; leading decoration (`@`, `$`) goes too.
fn strip_handle(value: &str, prefix: char) -> String {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    compact.trim_start_matches(prefix).to_string()
}
