use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::CardRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed,
    AlreadyClaimed,
    NotFound,
}

/// Owner-editable columns written by the save path.
#[derive(Debug, Clone)]
pub struct CardUpdate {
    pub display_name: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub pay_label: Option<String>,
    pub payments_json: serde_json::Value,
    pub show_phone: bool,
    pub show_email: bool,
    pub show_save_contact: bool,
}

/// Provision an unclaimed card. Returns `false` if the id already exists.
pub async fn insert_card(conn: AsyncDbConnection, card_id: &str) -> Result<bool> {
    let conn = conn.lock().await?;
    let now = chrono::Utc::now().timestamp();

    let inserted = conn.execute(
        "INSERT OR IGNORE INTO cards (id, payments_json, created_at) VALUES (?, '{}', ?)",
        rusqlite::params![card_id, now],
    )?;

    Ok(inserted == 1)
}

pub async fn get_card(conn: AsyncDbConnection, card_id: &str) -> Result<Option<CardRow>> {
    let conn = conn.lock().await?;

    let card = conn
        .query_row(
            "SELECT id, owner_user_id, display_name, bio, photo_url, pay_label, payments_json,
                    show_phone, show_email, show_save_contact, claimed_at, updated_at
             FROM cards
             WHERE id = ?",
            [card_id],
            |row| {
                let payments_json: Option<String> = row.get(6)?;
                Ok(CardRow {
                    id: row.get(0)?,
                    owner_user_id: row.get(1)?,
                    display_name: row.get(2)?,
                    bio: row.get(3)?,
                    photo_url: row.get(4)?,
                    pay_label: row.get(5)?,
                    payments_json: parse_payments_json(payments_json.as_deref()),
                    show_phone: row.get(7)?,
                    show_email: row.get(8)?,
                    show_save_contact: row.get(9)?,
                    claimed_at: row.get(10)?,
                    updated_at: row.get(11)?,
                })
            },
        )
        .optional()
        .map_err(|e| anyhow::anyhow!("Failed to get card {}: {}", card_id, e))?;

    Ok(card)
}

/// Assigns the card to `user_id` only if nobody owns it yet.
///
/// The conditional UPDATE is the whole race guard: two concurrent claims can
/// never both see a changed row.
pub async fn claim_card(
    conn: AsyncDbConnection,
    card_id: &str,
    user_id: &str,
) -> Result<ClaimOutcome> {
    let conn = conn.lock().await?;
    let now = chrono::Utc::now().timestamp();

    let changed = conn.execute(
        "UPDATE cards SET owner_user_id = ?, claimed_at = ?, updated_at = ?
         WHERE id = ? AND owner_user_id IS NULL",
        rusqlite::params![user_id, now, now, card_id],
    )?;

    if changed == 1 {
        return Ok(ClaimOutcome::Claimed);
    }

    let exists: Option<String> = conn
        .query_row("SELECT id FROM cards WHERE id = ?", [card_id], |row| row.get(0))
        .optional()?;

    Ok(match exists {
        Some(_) => ClaimOutcome::AlreadyClaimed,
        None => ClaimOutcome::NotFound,
    })
}

/// Writes the owner's edits. Returns `false` when `owner_user_id` does not own the card.
pub async fn update_card(
    conn: AsyncDbConnection,
    card_id: &str,
    owner_user_id: &str,
    update: &CardUpdate,
) -> Result<bool> {
    let conn = conn.lock().await?;
    let now = chrono::Utc::now().timestamp();
    let payments_json = serde_json::to_string(&update.payments_json)?;

    let changed = conn.execute(
        "UPDATE cards
         SET display_name = ?, bio = ?, photo_url = ?, pay_label = ?, payments_json = ?,
             show_phone = ?, show_email = ?, show_save_contact = ?, updated_at = ?
         WHERE id = ? AND owner_user_id = ?",
        rusqlite::params![
            &update.display_name,
            update.bio.as_ref(),
            update.photo_url.as_ref(),
            update.pay_label.as_ref(),
            &payments_json,
            update.show_phone,
            update.show_email,
            update.show_save_contact,
            now,
            card_id,
            owner_user_id
        ],
    )?;

    Ok(changed == 1)
}

fn parse_payments_json(raw: Option<&str>) -> serde_json::Value {
    match raw {
        Some(text) => serde_json::from_str(text).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "stored payments_json is not valid JSON");
            serde_json::Value::Null
        }),
        None => serde_json::Value::Null,
    }
}
