use serde::{Deserialize, Serialize};

pub mod action;
pub mod card;
pub mod validation;

pub use action::{ActionItem, ActionType, PartitionedActions, SynthesizedLink};
pub use card::{
    CardEditState, CardOwnerResponse, CardPaymentsRecord, CardRow, CardStatusResponse,
    ClaimRequest, ClaimResponse, ContactRail, PublicCardView, ResolvedAction, SaveCardRequest,
};
pub use validation::CardValidationError;

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
