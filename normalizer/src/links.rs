use crate::normalize::{is_paypal_link, normalize_value};
use crate::patterns::{digits_only_phone, encode_component, looks_like_domain, looks_like_url};
use shared_types::{ActionItem, ActionType, SynthesizedLink};

/// Builds the href(s) a visitor's tap should open for one item.
///
/// Rules, in order: email is copy-only, an explicit `url` wins, a value that
/// already is an `http(s)` URL is used verbatim, then per-type synthesis.
/// Anything that cannot become a link degrades to copy-only.
///
/// When `fallback_href` is set, `open_href` is an app scheme; the caller
/// tries it first and navigates to the fallback if no app switch happened
/// after a short delay.
pub fn synthesize(item: &ActionItem) -> SynthesizedLink {
    let value = normalize_value(item.action_type, &item.value);
    let url = item
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty());
    let copy_text = if value.is_empty() {
        url.unwrap_or_default().to_string()
    } else {
        value.clone()
    };

    if item.action_type == ActionType::Email {
        return SynthesizedLink::copy_only(copy_text);
    }
    if let Some(url) = url {
        return SynthesizedLink::open(url, copy_text);
    }
    if value.is_empty() {
        return SynthesizedLink::copy_only(copy_text);
    }
    if looks_like_url(&value) {
        return SynthesizedLink::open(value.as_str(), copy_text);
    }

    let handle = encode_component(&value);
    match item.action_type {
        ActionType::Venmo => SynthesizedLink::open(
            format!("venmo://paycharge?txn=pay&recipients={handle}"),
            copy_text,
        )
        .with_fallback(format!("https://venmo.com/{handle}")),
        ActionType::Cashapp => {
            SynthesizedLink::open(format!("https://cash.app/{handle}"), copy_text)
        }
        ActionType::Paypal if is_paypal_link(&value) => {
            SynthesizedLink::open(format!("https://{value}"), copy_text)
        }
        ActionType::Paypal => {
            SynthesizedLink::open(format!("https://www.paypal.me/{handle}"), copy_text)
        }
        ActionType::Instagram => {
            SynthesizedLink::open(format!("https://instagram.com/{handle}"), copy_text)
        }
        ActionType::Tiktok => {
            SynthesizedLink::open(format!("https://www.tiktok.com/@{handle}"), copy_text)
        }
        ActionType::X => SynthesizedLink::open(format!("https://x.com/{handle}"), copy_text),
        ActionType::Youtube => match value.strip_prefix('@') {
            Some(channel) if !channel.is_empty() => SynthesizedLink::open(
                format!("https://www.youtube.com/@{}", encode_component(channel)),
                copy_text,
            ),
            _ => web_link(&value, copy_text),
        },
        ActionType::Website | ActionType::Other => web_link(&value, copy_text),
        ActionType::Phone => {
            let phone = digits_only_phone(&value);
            if phone.is_empty() {
                SynthesizedLink::copy_only(copy_text)
            } else {
                SynthesizedLink::open(format!("sms:{phone}"), copy_text)
            }
        }
        ActionType::Email => SynthesizedLink::copy_only(copy_text),
    }
}

/// `https://` for bare domains; copy-only for anything not URL-like.
fn web_link(value: &str, copy_text: String) -> SynthesizedLink {
    if !looks_like_domain(value) {
        return SynthesizedLink::copy_only(copy_text);
    }

    let candidate = format!("https://{value}");
    match url::Url::parse(&candidate) {
        Ok(parsed) if parsed.host_str().is_some_and(|host| host.contains('.')) => {
            SynthesizedLink::open(candidate, copy_text)
        }
        _ => SynthesizedLink::copy_only(copy_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(action_type: ActionType, value: &str) -> ActionItem {
        ActionItem {
            id: "t".to_string(),
            action_type,
            label: None,
            value: value.to_string(),
            url: None,
        }
    }

    #[test]
    fn test_venmo_deep_link_with_fallback() {
        let link = synthesize(&item(ActionType::Venmo, "@alice"));
        assert_eq!(link.open_href, "venmo://paycharge?txn=pay&recipients=alice");
        assert_eq!(link.fallback_href.as_deref(), Some("https://venmo.com/alice"));
        assert!(!link.copy_only);
        assert_eq!(link.copy_text, "alice");
    }

    #[test]
    fn test_explicit_url_wins() {
        let mut venmo = item(ActionType::Venmo, "alice");
        venmo.url = Some(" https://example.com/pay-alice ".to_string());
        let link = synthesize(&venmo);
        assert_eq!(link.open_href, "https://example.com/pay-alice");
        assert_eq!(link.fallback_href, None);
        assert!(!link.copy_only);
    }

    #[test]
    fn test_value_url_used_verbatim() {
        let link = synthesize(&item(ActionType::Venmo, "https://venmo.com/u/alice"));
        assert_eq!(link.open_href, "https://venmo.com/u/alice");
        assert_eq!(link.fallback_href, None);
    }

    #[test]
    fn test_web_providers() {
        assert_eq!(
            synthesize(&item(ActionType::Cashapp, "$alice99")).open_href,
            "https://cash.app/alice99"
        );
        assert_eq!(
            synthesize(&item(ActionType::Instagram, "@bob")).open_href,
            "https://instagram.com/bob"
        );
        assert_eq!(
            synthesize(&item(ActionType::Tiktok, "@bob")).open_href,
            "https://www.tiktok.com/@bob"
        );
        assert_eq!(synthesize(&item(ActionType::X, "@bob")).open_href, "https://x.com/bob");
    }

    #[test]
    fn test_paypal_no_double_prefix() {
        assert_eq!(
            synthesize(&item(ActionType::Paypal, "paypal.me/bob")).open_href,
            "https://paypal.me/bob"
        );
        assert_eq!(
            synthesize(&item(ActionType::Paypal, "https://paypal.me/bob")).open_href,
            "https://paypal.me/bob"
        );
        assert_eq!(
            synthesize(&item(ActionType::Paypal, "@paypal.me/bob")).open_href,
            "https://paypal.me/bob"
        );
        assert_eq!(
            synthesize(&item(ActionType::Paypal, "paypal.com/paypalme/bob")).open_href,
            "https://paypal.com/paypalme/bob"
        );
        assert_eq!(
            synthesize(&item(ActionType::Paypal, "@bob")).open_href,
            "https://www.paypal.me/bob"
        );
    }

    #[test]
    fn test_untagged_x_label_links_to_profile() {
        let record = crate::schema::adapt(&serde_json::json!([
            {"label": "X", "value": "@bob"}
        ]));
        assert_eq!(record.links[0].action_type, ActionType::X);

        let link = synthesize(&record.links[0]);
        assert_eq!(link.open_href, "https://x.com/bob");
        assert!(!link.copy_only);
    }

    #[test]
    fn test_adapted_paypal_path_opens_without_userinfo() {
        let record = crate::schema::adapt(&serde_json::json!({
            "links": [{"type": "paypal", "value": "@paypal.me/bob"}]
        }));
        assert_eq!(record.links[0].value, "paypal.me/bob");

        let link = synthesize(&record.links[0]);
        assert_eq!(link.open_href, "https://paypal.me/bob");
        assert!(!link.copy_only);
    }

    #[test]
    fn test_youtube() {
        assert_eq!(
            synthesize(&item(ActionType::Youtube, "@chan")).open_href,
            "https://www.youtube.com/@chan"
        );
        assert_eq!(
            synthesize(&item(ActionType::Youtube, "youtube.com/@chan")).open_href,
            "https://youtube.com/@chan"
        );
        assert!(synthesize(&item(ActionType::Youtube, "my channel")).copy_only);
        assert!(synthesize(&item(ActionType::Youtube, "@")).copy_only);
    }

    #[test]
    fn test_website_and_other() {
        let mut portfolio = item(ActionType::Other, "bob.dev");
        portfolio.label = Some("Portfolio".to_string());
        let link = synthesize(&portfolio);
        assert_eq!(link.open_href, "https://bob.dev");
        assert!(!link.copy_only);

        let link = synthesize(&item(ActionType::Other, "Ask for Bob at the desk"));
        assert!(link.copy_only);
        assert_eq!(link.open_href, "");
        assert_eq!(link.copy_text, "Ask for Bob at the desk");

        assert!(synthesize(&item(ActionType::Website, "bob@example.com")).copy_only);
    }

    #[test]
    fn test_phone_is_sms() {
        let link = synthesize(&item(ActionType::Phone, "+1 (555) 555-5555"));
        assert_eq!(link.open_href, "sms:+15555555555");
        assert!(synthesize(&item(ActionType::Phone, "ask me")).copy_only);
    }

    #[test]
    fn test_email_is_always_copy_only() {
        for value in ["bob@example.com", "https://mail.example.com", "mailto:bob@example.com"] {
            let mut email = item(ActionType::Email, value);
            let link = synthesize(&email);
            assert!(link.copy_only);
            assert_eq!(link.open_href, "");
            assert_eq!(link.copy_text, value);

            email.url = Some("https://example.com".to_string());
            assert!(synthesize(&email).copy_only);
        }
    }

    #[test]
    fn test_empty_value_is_copy_only() {
        let link = synthesize(&item(ActionType::Venmo, "   "));
        assert!(link.copy_only);
        assert_eq!(link.copy_text, "");
    }
}
