use crate::action::{ActionItem, ActionType, SynthesizedLink};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Canonical whole-card container for contact rails and ordered links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardPaymentsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email: Option<String>,
    #[serde(default)]
    pub links: Vec<ActionItem>,
}

impl CardPaymentsRecord {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none() && self.links.is_empty()
    }
}

/// One row of the `cards` table as the persistence layer hands it over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardRow {
    pub id: String,
    pub owner_user_id: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub pay_label: Option<String>,
    /// Stored as-is; any historical schema may show up here.
    pub payments_json: serde_json::Value,
    pub show_phone: Option<bool>,
    pub show_email: Option<bool>,
    pub show_save_contact: Option<bool>,
    pub claimed_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl CardRow {
    pub fn is_claimed(&self) -> bool {
        self.owner_user_id.is_some()
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_user_id.as_deref() == Some(user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAction {
    pub item: ActionItem,
    pub display_label: String,
    pub link: SynthesizedLink,
}

/// Phone or email shown outside of the link groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactRail {
    pub rail_type: ActionType,
    pub value: String,
    pub link: SynthesizedLink,
}

/// Everything a visitor of a claimed card gets to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PublicCardView {
    pub card_id: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub pay_label: Option<String>,
    pub phone: Option<ContactRail>,
    pub email: Option<ContactRail>,
    pub show_save_contact: bool,
    pub payments: Vec<ResolvedAction>,
    pub external: Vec<ResolvedAction>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardStatusResponse {
    pub is_claimed: bool,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardOwnerResponse {
    pub signed_in: bool,
    pub is_owner: bool,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub ok: bool,
    pub card_id: String,
    pub owner_user_id: String,
}

/// Owner's edit form, hydrated from the stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardEditState {
    pub card_id: String,
    pub display_name: String,
    pub bio: String,
    pub photo_url: String,
    pub pay_label: String,
    pub show_phone: bool,
    pub show_email: bool,
    pub show_save_contact: bool,
    pub payments: CardPaymentsRecord,
}

/// Form state submitted by the owner on save.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaveCardRequest {
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub pay_label: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub links: Vec<ActionItem>,
    #[serde(default)]
    #[ts(optional)]
    pub show_phone: Option<bool>,
    #[serde(default)]
    #[ts(optional)]
    pub show_email: Option<bool>,
    #[serde(default)]
    #[ts(optional)]
    pub show_save_contact: Option<bool>,
}
