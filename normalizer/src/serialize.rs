use serde_json::{Map, Value};
use shared_types::{ActionType, CardPaymentsRecord};

/// Provider keys older readers look up directly on `payments_json`.
const LEGACY_MIRROR: [ActionType; 3] = [ActionType::Venmo, ActionType::Cashapp, ActionType::Paypal];

/// Serializes a canonical record into the `payments_json` value to persist.
///
/// Writes the current `{ phone, email, links }` layout and mirrors the first
/// venmo/cashapp/paypal value at its legacy top-level key. Adapting the
/// output yields the same record again.
pub fn serialize_payments(record: &CardPaymentsRecord) -> Value {
    let mut out = Map::new();

    if let Some(phone) = &record.phone {
        out.insert("phone".to_string(), Value::String(phone.clone()));
    }
    if let Some(email) = &record.email {
        out.insert("email".to_string(), Value::String(email.clone()));
    }

    let links = record
        .links
        .iter()
        .map(|item| serde_json::to_value(item).unwrap_or(Value::Null))
        .collect();
    out.insert("links".to_string(), Value::Array(links));

    for provider in LEGACY_MIRROR {
        let mirrored = record
            .links
            .iter()
            .find(|item| item.action_type == provider && !item.value.is_empty());
        if let Some(item) = mirrored {
            out.insert(provider.as_str().to_string(), Value::String(item.value.clone()));
        }
    }

    Value::Object(out)
}
