use crate::links::synthesize;
use crate::partition::partition;
use crate::schema::adapt;
use shared_types::{
    ActionItem, ActionType, CardEditState, CardRow, ContactRail, PartitionedActions,
    PublicCardView, ResolvedAction,
};

/// Resolves a stored card row into what its public page renders.
///
/// Phone and email are separate rails gated by `show_phone`/`show_email`;
/// the link list is split into payments and external groups.
pub fn present_card(row: &CardRow) -> PublicCardView {
    let record = adapt(&row.payments_json);
    let PartitionedActions { payments, external } = partition(&record.links);

    let phone = record
        .phone
        .as_deref()
        .filter(|_| row.show_phone.unwrap_or(true))
        .map(|value| contact_rail(ActionType::Phone, value));
    let email = record
        .email
        .as_deref()
        .filter(|_| row.show_email.unwrap_or(true))
        .map(|value| contact_rail(ActionType::Email, value));

    PublicCardView {
        card_id: row.id.clone(),
        display_name: trimmed(row.display_name.as_deref()),
        bio: trimmed(row.bio.as_deref()),
        photo_url: trimmed(row.photo_url.as_deref()),
        pay_label: trimmed(row.pay_label.as_deref()),
        phone,
        email,
        show_save_contact: row.show_save_contact.unwrap_or(true),
        payments: payments.into_iter().map(resolve).collect(),
        external: external.into_iter().map(resolve).collect(),
    }
}

/// Hydrates the owner's edit form from a stored row.
pub fn edit_state(row: &CardRow) -> CardEditState {
    CardEditState {
        card_id: row.id.clone(),
        display_name: row.display_name.clone().unwrap_or_default(),
        bio: row.bio.clone().unwrap_or_default(),
        photo_url: row.photo_url.clone().unwrap_or_default(),
        pay_label: row.pay_label.clone().unwrap_or_default(),
        show_phone: row.show_phone.unwrap_or(true),
        show_email: row.show_email.unwrap_or(true),
        show_save_contact: row.show_save_contact.unwrap_or(true),
        payments: adapt(&row.payments_json),
    }
}

pub fn resolve(item: ActionItem) -> ResolvedAction {
    ResolvedAction {
        display_label: item.display_label(),
        link: synthesize(&item),
        item,
    }
}

fn contact_rail(rail_type: ActionType, value: &str) -> ContactRail {
    let item = ActionItem {
        id: rail_type.as_str().to_string(),
        action_type: rail_type,
        label: None,
        value: value.to_string(),
        url: None,
    };
    ContactRail {
        rail_type,
        value: value.to_string(),
        link: synthesize(&item),
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(payments_json: serde_json::Value) -> CardRow {
        CardRow {
            id: "VIA001".to_string(),
            owner_user_id: Some("user-1".to_string()),
            display_name: Some(" Alex ".to_string()),
            bio: Some("".to_string()),
            payments_json,
            ..CardRow::default()
        }
    }

    #[test]
    fn test_present_card() {
        let view = present_card(&row(json!({
            "phone": "+1 555 123 4567",
            "email": "alex@example.com",
            "links": [
                {"id": "1", "type": "instagram", "value": "@alex"},
                {"id": "2", "type": "venmo", "value": "@alex"},
                {"id": "3", "type": "other", "label": "Portfolio", "value": "alex.dev"},
                {"id": "4", "type": "cashapp", "value": "$alex"}
            ]
        })));

        assert_eq!(view.display_name.as_deref(), Some("Alex"));
        assert_eq!(view.bio, None);
        assert!(view.show_save_contact);

        let phone = view.phone.expect("phone rail");
        assert_eq!(phone.link.open_href, "sms:+15551234567");
        let email = view.email.expect("email rail");
        assert!(email.link.copy_only);

        let payment_ids: Vec<&str> = view.payments.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(payment_ids, vec!["2", "4"]);
        assert_eq!(view.payments[1].display_label, "Cash App");
        assert_eq!(
            view.payments[0].link.fallback_href.as_deref(),
            Some("https://venmo.com/alex")
        );

        let external_labels: Vec<&str> =
            view.external.iter().map(|r| r.display_label.as_str()).collect();
        assert_eq!(external_labels, vec!["Instagram", "Portfolio"]);
        assert_eq!(view.external[1].link.open_href, "https://alex.dev");
    }

    #[test]
    fn test_visibility_toggles_hide_rails() {
        let mut card = row(json!({"phone": "555", "email": "a@b.co", "links": []}));
        card.show_phone = Some(false);
        card.show_email = Some(false);
        card.show_save_contact = Some(false);

        let view = present_card(&card);
        assert!(view.phone.is_none());
        assert!(view.email.is_none());
        assert!(!view.show_save_contact);
    }

    #[test]
    fn test_edit_state_defaults() {
        let state = edit_state(&row(json!({"venmo": "@alex"})));
        assert_eq!(state.display_name, " Alex ");
        assert_eq!(state.photo_url, "");
        assert!(state.show_phone && state.show_email && state.show_save_contact);
        assert_eq!(state.payments.links.len(), 1);
        assert_eq!(state.payments.links[0].value, "alex");
    }
}
