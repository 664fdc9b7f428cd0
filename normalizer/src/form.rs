use crate::schema::{canonicalize, new_item_id};
use crate::serialize::serialize_payments;
use serde_json::Value;
use shared_types::{ActionItem, ActionType, CardPaymentsRecord, SaveCardRequest};

/// Owner-side edit state for a card's payments.
///
/// The `links` vector is the display order. Reordering is done with explicit
/// splices and never touches ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentsForm {
    pub phone: String,
    pub email: String,
    pub links: Vec<ActionItem>,
}

impl PaymentsForm {
    pub fn from_record(record: &CardPaymentsRecord) -> Self {
        Self {
            phone: record.phone.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            links: record.links.clone(),
        }
    }

    pub fn from_request(request: &SaveCardRequest) -> Self {
        Self {
            phone: request.phone.clone(),
            email: request.email.clone(),
            links: request.links.clone(),
        }
    }

    /// Appends a new item and returns its id.
    pub fn add(
        &mut self,
        action_type: ActionType,
        label: Option<String>,
        value: impl Into<String>,
        url: Option<String>,
    ) -> String {
        let id = new_item_id();
        self.links.push(ActionItem {
            id: id.clone(),
            action_type,
            label,
            value: value.into(),
            url,
        });
        id
    }

    /// Applies `edit` to the item with `id`; the id itself cannot be changed.
    pub fn update(&mut self, id: &str, edit: impl FnOnce(&mut ActionItem)) -> bool {
        let Some(item) = self.links.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        edit(item);
        item.id = id.to_string();
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<ActionItem> {
        let index = self.position(id)?;
        Some(self.links.remove(index))
    }

    pub fn move_up(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                self.links.swap(index, index - 1);
                true
            }
            _ => false,
        }
    }

    pub fn move_down(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.links.len() => {
                self.links.swap(index, index + 1);
                true
            }
            _ => false,
        }
    }

    /// Moves the item to `target`, clamped to the end of the list.
    pub fn move_to(&mut self, id: &str, target: usize) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let item = self.links.remove(index);
        let target = target.min(self.links.len());
        self.links.insert(target, item);
        true
    }

    pub fn to_record(&self) -> CardPaymentsRecord {
        canonicalize(&self.phone, &self.email, &self.links)
    }

    /// The `payments_json` value the save path persists.
    pub fn to_payments_json(&self) -> Value {
        serialize_payments(&self.to_record())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.links.iter().position(|item| item.id == id)
    }
}
