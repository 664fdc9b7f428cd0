/// Save-time form validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardValidationError {
    #[error("Invalid card id: {0}")]
    InvalidCardId(String),

    #[error("Display name is required.")]
    MissingDisplayName,

    #[error("Display name must be at most {max} characters")]
    DisplayNameTooLong { max: usize },

    #[error("Too many links: {count} (max {max})")]
    TooManyLinks { count: usize, max: usize },

    #[error("Label for link {index} must be at most {max} characters")]
    LabelTooLong { index: usize, max: usize },

    #[error("Value for link {index} must be at most {max} characters")]
    ValueTooLong { index: usize, max: usize },
}
