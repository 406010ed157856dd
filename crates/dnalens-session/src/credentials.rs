use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Result as SqlResult};
use thiserror::Error;

/// Fixed settings key the API credential lives under
pub const API_KEY_NAME: &str = "gemini_api_key";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("API key must not be empty")]
    Empty,
    #[error("Credential storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// Where the single API credential string is kept between runs
pub trait CredentialStore {
    fn get(&self) -> Result<Option<String>, CredentialError>;
    fn set(&mut self, key: &str) -> Result<(), CredentialError>;
    /// Returns true if a stored key was removed
    fn clear(&mut self) -> Result<bool, CredentialError>;
}

/// Create the settings table if it does not exist.
pub fn init_db(conn: &Connection) -> SqlResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS settings (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )
}

pub fn get_setting(conn: &Connection, key: &str) -> SqlResult<Option<String>> {
    conn.query_row(
        "SELECT value FROM settings WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

/// Insert or overwrite a setting.
pub fn put_setting(conn: &Connection, key: &str, value: &str) -> SqlResult<()> {
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

/// Returns true if a row was deleted.
pub fn delete_setting(conn: &Connection, key: &str) -> SqlResult<bool> {
    let changed = conn.execute("DELETE FROM settings WHERE key = ?1", params![key])?;
    Ok(changed > 0)
}

fn normalized_key(key: &str) -> Result<&str, CredentialError> {
    let key = key.trim();
    if key.is_empty() {
        Err(CredentialError::Empty)
    } else {
        Ok(key)
    }
}

/// SQLite-backed key/value store. No encryption, no expiry.
pub struct SqliteCredentialStore {
    conn: Connection,
}

impl SqliteCredentialStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let conn = Connection::open(path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, CredentialError> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}

impl CredentialStore for SqliteCredentialStore {
    fn get(&self) -> Result<Option<String>, CredentialError> {
        Ok(get_setting(&self.conn, API_KEY_NAME)?)
    }

    fn set(&mut self, key: &str) -> Result<(), CredentialError> {
        put_setting(&self.conn, API_KEY_NAME, normalized_key(key)?)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<bool, CredentialError> {
        Ok(delete_setting(&self.conn, API_KEY_NAME)?)
    }
}

/// Process-lifetime store, for tests and ephemeral sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryCredentialStore {
    key: Option<String>,
}

impl MemoryCredentialStore {
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Result<Option<String>, CredentialError> {
        Ok(self.key.clone())
    }

    fn set(&mut self, key: &str) -> Result<(), CredentialError> {
        self.key = Some(normalized_key(key)?.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<bool, CredentialError> {
        Ok(self.key.take().is_some())
    }
}

/// Show only the last four characters of a key
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}
