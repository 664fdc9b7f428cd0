use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Semantic kind of one contact/payment entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Phone,
    Email,
    Venmo,
    Cashapp,
    Paypal,
    Instagram,
    Tiktok,
    Youtube,
    X,
    Website,
    Other,
}

impl ActionType {
    pub const ALL: [ActionType; 11] = [
        ActionType::Phone,
        ActionType::Email,
        ActionType::Venmo,
        ActionType::Cashapp,
        ActionType::Paypal,
        ActionType::Instagram,
        ActionType::Tiktok,
        ActionType::Youtube,
        ActionType::X,
        ActionType::Website,
        ActionType::Other,
    ];

    /// Storage tag, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Phone => "phone",
            ActionType::Email => "email",
            ActionType::Venmo => "venmo",
            ActionType::Cashapp => "cashapp",
            ActionType::Paypal => "paypal",
            ActionType::Instagram => "instagram",
            ActionType::Tiktok => "tiktok",
            ActionType::Youtube => "youtube",
            ActionType::X => "x",
            ActionType::Website => "website",
            ActionType::Other => "other",
        }
    }

    /// Label shown when the owner did not provide one.
    pub fn pretty_name(&self) -> &'static str {
        match self {
            ActionType::Phone => "Phone",
            ActionType::Email => "Email",
            ActionType::Venmo => "Venmo",
            ActionType::Cashapp => "Cash App",
            ActionType::Paypal => "PayPal",
            ActionType::Instagram => "Instagram",
            ActionType::Tiktok => "TikTok",
            ActionType::Youtube => "YouTube",
            ActionType::X => "X",
            ActionType::Website => "Website",
            ActionType::Other => "Link",
        }
    }

    /// Money-moving providers, grouped together on the public page.
    pub fn is_payment(&self) -> bool {
        matches!(
            self,
            ActionType::Venmo | ActionType::Cashapp | ActionType::Paypal
        )
    }

    /// Phone and email live on the card's contact rails, never in `links`.
    pub fn is_contact_rail(&self) -> bool {
        matches!(self, ActionType::Phone | ActionType::Email)
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One canonical entry of a card's ordered `links` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionItem {
    /// Blank on items the client has not saved yet; a fresh id is assigned on save.
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub label: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub url: Option<String>,
}

impl ActionItem {
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) if !label.trim().is_empty() => label.trim().to_string(),
            _ => self.action_type.pretty_name().to_string(),
        }
    }
}

/// Result of turning an [`ActionItem`] into something a visitor can tap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedLink {
    /// Empty when `copy_only` is set.
    pub open_href: String,
    /// Web URL to navigate to when an app-scheme `open_href` did not switch apps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fallback_href: Option<String>,
    pub copy_only: bool,
    pub copy_text: String,
}

impl SynthesizedLink {
    pub fn copy_only(copy_text: impl Into<String>) -> Self {
        Self {
            open_href: String::new(),
            fallback_href: None,
            copy_only: true,
            copy_text: copy_text.into(),
        }
    }

    pub fn open(open_href: impl Into<String>, copy_text: impl Into<String>) -> Self {
        Self {
            open_href: open_href.into(),
            fallback_href: None,
            copy_only: false,
            copy_text: copy_text.into(),
        }
    }

    pub fn with_fallback(mut self, fallback_href: impl Into<String>) -> Self {
        self.fallback_href = Some(fallback_href.into());
        self
    }
}

/// Stable split of a card's links into payment providers and everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartitionedActions {
    pub payments: Vec<ActionItem>,
    pub external: Vec<ActionItem>,
}
