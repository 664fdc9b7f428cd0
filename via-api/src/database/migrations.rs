use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    // One row per physical card; owner_user_id stays NULL until claimed
    conn.execute(
        "CREATE TABLE IF NOT EXISTS cards (
            id VARCHAR PRIMARY KEY,
            owner_user_id VARCHAR,
            display_name VARCHAR,
            bio VARCHAR,
            photo_url VARCHAR,
            pay_label VARCHAR,
            payments_json VARCHAR,
            show_phone BOOLEAN,
            show_email BOOLEAN,
            show_save_contact BOOLEAN,
            created_at BIGINT NOT NULL,
            claimed_at BIGINT,
            updated_at BIGINT
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_cards_owner
            ON cards(owner_user_id)",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'cards'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }
}
