//! Schema adapter for stored `payments_json` values.
//!
//! Four layouts have been written over time:
//!
//! - **Current**: `{ phone, email, links: [{ id, type, label, value, url }] }`
//! - **Array-only**: `[{ type, label, value, url }]`
//! - **Legacy flat**: `{ venmo: "@alice", cashapp: "$alice", phone: "555..." }`
//! - anything else, which adapts to the empty record
//!
//! Every layout is reduced to [`RawEntry`] values and fed through one
//! [`CanonicalBuilder`], so classification, normalization and phone/email
//! extraction behave the same no matter where an entry came from.

use crate::classifier::classify;
use crate::normalize::normalize_value;
use serde_json::{Map, Value};
use shared_types::{ActionItem, ActionType, CardPaymentsRecord};
use std::collections::HashSet;

/// Detected layout of a raw `payments_json` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentsShape<'a> {
    Current {
        phone: Option<&'a Value>,
        email: Option<&'a Value>,
        links: &'a [Value],
    },
    ArrayOnly(&'a [Value]),
    LegacyFlat(&'a Map<String, Value>),
    Malformed,
}

impl<'a> PaymentsShape<'a> {
    pub fn detect(raw: &'a Value) -> Self {
        match raw {
            Value::Array(entries) => PaymentsShape::ArrayOnly(entries),
            Value::Object(map) => match map.get("links") {
                None => PaymentsShape::LegacyFlat(map),
                Some(Value::Array(links)) => PaymentsShape::Current {
                    phone: map.get("phone"),
                    email: map.get("email"),
                    links,
                },
                Some(Value::Null) => PaymentsShape::Current {
                    phone: map.get("phone"),
                    email: map.get("email"),
                    links: &[],
                },
                Some(_) => PaymentsShape::Malformed,
            },
            _ => PaymentsShape::Malformed,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaymentsShape::Current { .. } => "current",
            PaymentsShape::ArrayOnly(_) => "array-only",
            PaymentsShape::LegacyFlat(_) => "legacy-flat",
            PaymentsShape::Malformed => "malformed",
        }
    }
}

/// One entry before classification, as found in any layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub id: Option<String>,
    pub tag: Option<String>,
    pub label: Option<String>,
    pub value: String,
    pub url: Option<String>,
}

impl RawEntry {
    /// Reads an entry object; `None` when it is explicitly disabled.
    fn from_object(obj: &Map<String, Value>) -> Option<Self> {
        if obj.get("is_enabled") == Some(&Value::Bool(false)) {
            return None;
        }

        Some(Self {
            id: text_field(obj, "id"),
            tag: text_field(obj, "type").or_else(|| text_field(obj, "provider")),
            label: text_field(obj, "label"),
            value: text_field(obj, "value").unwrap_or_default(),
            url: text_field(obj, "url"),
        })
    }
}

impl From<&ActionItem> for RawEntry {
    fn from(item: &ActionItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            tag: Some(item.action_type.as_str().to_string()),
            label: item.label.clone(),
            value: item.value.clone(),
            url: item.url.clone(),
        }
    }
}

/// Accumulates entries into a [`CardPaymentsRecord`], enforcing its invariants:
/// phone and email go to the rails (first one wins), ids are unique, empty
/// entries are dropped and input order is kept.
#[derive(Debug, Default)]
pub struct CanonicalBuilder {
    record: CardPaymentsRecord,
    seen_ids: HashSet<String>,
}

impl CanonicalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_phone(&mut self, phone: Option<&str>) {
        self.set_rail(ActionType::Phone, phone.unwrap_or_default());
    }

    pub fn set_email(&mut self, email: Option<&str>) {
        self.set_rail(ActionType::Email, email.unwrap_or_default());
    }

    pub fn push(&mut self, entry: RawEntry) {
        let action_type = classify(
            entry.tag.as_deref(),
            entry.label.as_deref(),
            Some(entry.value.as_str()),
        );
        let value = normalize_value(action_type, &entry.value);
        let url = non_empty(entry.url.as_deref());

        if value.is_empty() && url.is_none() {
            tracing::debug!(tag = ?entry.tag, "dropping entry with empty value and url");
            return;
        }

        if action_type.is_contact_rail() {
            self.set_rail(action_type, &value);
            return;
        }

        let id = match non_empty(entry.id.as_deref()) {
            Some(id) if !self.seen_ids.contains(&id) => id,
            Some(id) => {
                tracing::debug!(%id, "duplicate link id, assigning a fresh one");
                new_item_id()
            }
            None => new_item_id(),
        };
        self.seen_ids.insert(id.clone());

        let label = non_empty(entry.label.as_deref())
            .filter(|label| label.as_str() != action_type.pretty_name());

        self.record.links.push(ActionItem {
            id,
            action_type,
            label,
            value,
            url,
        });
    }

    pub fn finish(self) -> CardPaymentsRecord {
        self.record
    }

    fn set_rail(&mut self, rail: ActionType, raw: &str) {
        let value = normalize_value(rail, raw);
        if value.is_empty() {
            return;
        }

        let slot = match rail {
            ActionType::Phone => &mut self.record.phone,
            _ => &mut self.record.email,
        };
        if slot.is_some() {
            tracing::debug!(%rail, "card already has this contact rail, dropping duplicate");
            return;
        }
        *slot = Some(value);
    }
}

/// Adapts any stored `payments_json` value into the canonical record.
///
/// Total: structurally unexpected input degrades to the empty record, and
/// entries that are not objects are skipped one by one.
pub fn adapt(raw: &Value) -> CardPaymentsRecord {
    let shape = PaymentsShape::detect(raw);
    let mut builder = CanonicalBuilder::new();

    match shape {
        PaymentsShape::Current {
            phone,
            email,
            links,
        } => {
            builder.set_phone(phone.and_then(scalar_text).as_deref());
            builder.set_email(email.and_then(scalar_text).as_deref());
            push_entries(&mut builder, links);
        }
        PaymentsShape::ArrayOnly(entries) => push_entries(&mut builder, entries),
        PaymentsShape::LegacyFlat(map) => push_legacy(&mut builder, map),
        PaymentsShape::Malformed => {
            if !raw.is_null() {
                tracing::debug!(shape = shape.name(), "unrecognized payments layout");
            }
        }
    }

    builder.finish()
}

/// Like [`adapt`], for the JSON text stored by the persistence layer.
pub fn adapt_str(raw: &str) -> CardPaymentsRecord {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => adapt(&value),
        Err(e) => {
            tracing::debug!(error = %e, "payments_json is not valid JSON");
            CardPaymentsRecord::default()
        }
    }
}

/// Builds the canonical record from edit-form state, keeping existing ids.
pub fn canonicalize(phone: &str, email: &str, links: &[ActionItem]) -> CardPaymentsRecord {
    let mut builder = CanonicalBuilder::new();
    builder.set_phone(Some(phone));
    builder.set_email(Some(email));
    for item in links {
        builder.push(RawEntry::from(item));
    }
    builder.finish()
}

/// Pretty label for a legacy provider key.
pub fn pretty_label(key: &str) -> String {
    let known = match key.to_lowercase().as_str() {
        "venmo" => Some("Venmo"),
        "cashapp" | "cash_app" => Some("Cash App"),
        "paypal" => Some("PayPal"),
        "zelle" => Some("Zelle"),
        "applepay" | "apple_pay" | "applepay_phone" | "apple_pay_phone" => Some("Apple Pay"),
        "email" => Some("Email"),
        "phone" => Some("Phone"),
        _ => None,
    };
    if let Some(label) = known {
        return label.to_string();
    }

    key.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_entries(builder: &mut CanonicalBuilder, entries: &[Value]) {
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            Value::Object(obj) => {
                if let Some(raw) = RawEntry::from_object(obj) {
                    builder.push(raw);
                }
            }
            _ => tracing::debug!(index, "skipping non-object payments entry"),
        }
    }
}

fn push_legacy(builder: &mut CanonicalBuilder, map: &Map<String, Value>) {
    for (key, value) in map {
        let entry = match value {
            Value::String(_) | Value::Number(_) => RawEntry {
                tag: Some(key.clone()),
                label: Some(pretty_label(key)),
                value: scalar_text(value).unwrap_or_default(),
                ..RawEntry::default()
            },
            Value::Object(obj) => match RawEntry::from_object(obj) {
                Some(mut entry) => {
                    entry.tag.get_or_insert_with(|| key.clone());
                    entry.label.get_or_insert_with(|| pretty_label(key));
                    entry
                }
                None => continue,
            },
            _ => {
                tracing::debug!(%key, "skipping legacy key without a usable value");
                continue;
            }
        };
        builder.push(entry);
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(scalar_text)
}

/// Strings as-is, numbers rendered (phone numbers were sometimes stored as such).
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn new_item_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn types(record: &CardPaymentsRecord) -> Vec<ActionType> {
        record.links.iter().map(|l| l.action_type).collect()
    }

    fn values(record: &CardPaymentsRecord) -> Vec<&str> {
        record.links.iter().map(|l| l.value.as_str()).collect()
    }

    #[test]
    fn test_detect_shapes() {
        assert_eq!(PaymentsShape::detect(&json!([])).name(), "array-only");
        assert_eq!(PaymentsShape::detect(&json!({})).name(), "legacy-flat");
        assert_eq!(PaymentsShape::detect(&json!({"links": []})).name(), "current");
        assert_eq!(PaymentsShape::detect(&json!({"links": null})).name(), "current");
        assert_eq!(PaymentsShape::detect(&json!({"links": "x"})).name(), "malformed");
        assert_eq!(PaymentsShape::detect(&json!(42)).name(), "malformed");
        assert_eq!(PaymentsShape::detect(&Value::Null).name(), "malformed");
    }

    #[test]
    fn test_legacy_flat_object() {
        let record = adapt(&json!({
            "venmo": "@alice",
            "cashapp": "$alice99",
            "phone": "5551234567"
        }));

        assert_eq!(record.phone.as_deref(), Some("5551234567"));
        assert_eq!(record.email, None);
        assert_eq!(types(&record), vec![ActionType::Venmo, ActionType::Cashapp]);
        assert_eq!(values(&record), vec!["alice", "alice99"]);
        assert!(record.links.iter().all(|l| l.label.is_none()));
    }

    #[test]
    fn test_legacy_unknown_keys_keep_pretty_label() {
        let record = adapt(&json!({
            "zelle": "bob@example.com",
            "cash_app": "$bob",
            "applepay_phone": "+1 555 000 1111",
            "my_site": "bob.dev",
            "paypal": {"value": "", "url": "https://paypal.me/bob"},
            "flag": true
        }));

        assert_eq!(record.phone.as_deref(), Some("+1 555 000 1111"));
        assert_eq!(
            types(&record),
            vec![
                ActionType::Other,
                ActionType::Cashapp,
                ActionType::Website,
                ActionType::Paypal
            ]
        );
        assert_eq!(record.links[0].label.as_deref(), Some("Zelle"));
        assert_eq!(record.links[1].label, None);
        assert_eq!(record.links[2].label.as_deref(), Some("My Site"));
        assert_eq!(record.links[3].url.as_deref(), Some("https://paypal.me/bob"));
    }

    #[test]
    fn test_array_only() {
        let record = adapt(&json!([
            {"type": "venmo", "value": "@alice"},
            "not an object",
            {"label": "Instagram", "value": "@alice.pics"},
            {"provider": "paypal", "value": "alice", "is_enabled": false},
            {"type": "email", "value": "alice@example.com"},
            {"type": "other", "label": "Portfolio", "value": "alice.dev"}
        ]));

        assert_eq!(record.phone, None);
        assert_eq!(record.email.as_deref(), Some("alice@example.com"));
        assert_eq!(
            types(&record),
            vec![ActionType::Venmo, ActionType::Instagram, ActionType::Other]
        );
        assert_eq!(values(&record), vec!["alice", "alice.pics", "alice.dev"]);
        assert_eq!(record.links[2].label.as_deref(), Some("Portfolio"));
    }

    #[test]
    fn test_current_shape_extracts_rails_from_links() {
        let record = adapt(&json!({
            "phone": "",
            "email": null,
            "links": [
                {"id": "a", "type": "phone", "value": "555 1234"},
                {"id": "b", "type": "tiktok", "value": "@bob"},
                {"id": "c", "type": "phone", "value": "555 9999"},
                {"id": "d", "type": "venmo", "value": "  "},
                {"id": "e", "type": "website", "value": "", "url": "https://bob.dev"}
            ]
        }));

        assert_eq!(record.phone.as_deref(), Some("555 1234"));
        assert_eq!(record.email, None);
        let ids: Vec<&str> = record.links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "e"]);
    }

    #[test]
    fn test_top_level_rail_wins_over_link_entry() {
        let record = adapt(&json!({
            "phone": 5551234567u64,
            "links": [{"type": "phone", "value": "000"}]
        }));
        assert_eq!(record.phone.as_deref(), Some("5551234567"));
        assert!(record.links.is_empty());
    }

    #[test]
    fn test_ids_are_kept_assigned_and_unique() {
        let record = adapt(&json!({
            "links": [
                {"id": "keep", "type": "venmo", "value": "a"},
                {"id": "keep", "type": "cashapp", "value": "b"},
                {"type": "paypal", "value": "c"}
            ]
        }));

        assert_eq!(record.links[0].id, "keep");
        assert_ne!(record.links[1].id, "keep");
        assert!(!record.links[2].id.is_empty());
        assert_ne!(record.links[1].id, record.links[2].id);
    }

    #[test]
    fn test_adapt_is_total() {
        let inputs = [
            Value::Null,
            json!(42),
            json!("a string"),
            json!(true),
            json!([]),
            json!({}),
            json!({"links": 7}),
            json!({"links": [null, 1, [], {"value": {"deep": [1, 2]}}]}),
            json!([{"type": {"nested": true}, "value": null, "url": [3]}]),
            json!({"venmo": [], "cashapp": null, "paypal": {}}),
        ];

        for input in inputs {
            let record = adapt(&input);
            assert!(record.is_empty(), "{input}");
        }
    }

    #[test]
    fn test_empty_object_is_empty_record() {
        assert_eq!(adapt(&json!({})), CardPaymentsRecord::default());
    }

    #[test]
    fn test_adapt_str() {
        assert!(adapt_str("not json").is_empty());
        let record = adapt_str(r#"{"venmo":"@alice"}"#);
        assert_eq!(values(&record), vec!["alice"]);
    }

    #[test]
    fn test_canonicalize_keeps_ids_and_hoists_rails() {
        let links = vec![
            ActionItem {
                id: "x1".into(),
                action_type: ActionType::Venmo,
                label: Some("Venmo".into()),
                value: "@alice".into(),
                url: None,
            },
            ActionItem {
                id: "x2".into(),
                action_type: ActionType::Email,
                label: None,
                value: "alice@example.com".into(),
                url: None,
            },
        ];

        let record = canonicalize(" 555 ", "", &links);
        assert_eq!(record.phone.as_deref(), Some("555"));
        assert_eq!(record.email.as_deref(), Some("alice@example.com"));
        assert_eq!(record.links.len(), 1);
        assert_eq!(record.links[0].id, "x1");
        assert_eq!(record.links[0].value, "alice");
        assert_eq!(record.links[0].label, None);
    }

    #[test]
    fn test_pretty_label() {
        assert_eq!(pretty_label("cash_app"), "Cash App");
        assert_eq!(pretty_label("APPLEPAY"), "Apple Pay");
        assert_eq!(pretty_label("my-site_link"), "My Site Link");
    }
}
