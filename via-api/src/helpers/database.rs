use std::path::{Path, PathBuf};

/// Returns the default path of the cards database
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/via/cards.sqlite3`
/// - **Linux**: `~/.local/share/via/cards.sqlite3`
/// - **Windows**: `%LOCALAPPDATA%\via\cards.sqlite3`
pub fn get_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("via").join("cards.sqlite3"))
}

/// Initialize the database, creating parent directories as needed
pub fn initialize_database(
    path: Option<&Path>,
) -> anyhow::Result<std::sync::Arc<crate::database::Database>> {
    let db_path = match path {
        Some(path) => path.to_path_buf(),
        None => get_db_path()?,
    };

    tracing::info!("Opening card database at {}", db_path.display());
    let db = crate::database::Database::new(&db_path)?;
    Ok(std::sync::Arc::new(db))
}
