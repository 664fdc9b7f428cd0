use regex::Regex;
use shared_types::{CardValidationError, SaveCardRequest};
use std::sync::LazyLock;

pub const MAX_DISPLAY_NAME_CHARS: usize = 40;
pub const MAX_LABEL_CHARS: usize = 30;
pub const MAX_VALUE_CHARS: usize = 120;
pub const MAX_LINKS: usize = 20;

static CARD_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{2,32}$").expect("card id pattern compiles"));

pub fn validate_card_id(card_id: &str) -> Result<(), CardValidationError> {
    if CARD_ID.is_match(card_id) {
        Ok(())
    } else {
        Err(CardValidationError::InvalidCardId(card_id.to_string()))
    }
}

/// Checks the owner's form before anything is canonicalized or persisted.
///
/// Entries with neither value nor url are ignored here; normalization drops
/// them anyway.
pub fn validate_save_request(request: &SaveCardRequest) -> Result<(), CardValidationError> {
    let display_name = request.display_name.trim();
    if display_name.is_empty() {
        return Err(CardValidationError::MissingDisplayName);
    }
    if display_name.chars().count() > MAX_DISPLAY_NAME_CHARS {
        return Err(CardValidationError::DisplayNameTooLong {
            max: MAX_DISPLAY_NAME_CHARS,
        });
    }

    let filled: Vec<_> = request
        .links
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            !item.value.trim().is_empty()
                || item.url.as_deref().is_some_and(|url| !url.trim().is_empty())
        })
        .collect();

    if filled.len() > MAX_LINKS {
        return Err(CardValidationError::TooManyLinks {
            count: filled.len(),
            max: MAX_LINKS,
        });
    }

    for (index, item) in filled {
        let label_chars = item.label.as_deref().map_or(0, |l| l.trim().chars().count());
        if label_chars > MAX_LABEL_CHARS {
            return Err(CardValidationError::LabelTooLong {
                index,
                max: MAX_LABEL_CHARS,
            });
        }
        if item.value.trim().chars().count() > MAX_VALUE_CHARS {
            return Err(CardValidationError::ValueTooLong {
                index,
                max: MAX_VALUE_CHARS,
            });
        }
    }

    Ok(())
}
