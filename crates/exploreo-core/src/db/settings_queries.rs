//! Key/value preference rows.

use rusqlite::params;

use crate::error::{DatabaseResultExt, Result};

const SELECT_SETTINGS_SQL: &str = "SELECT key, value FROM settings";
const UPSERT_SETTING_SQL: &str = "INSERT INTO settings (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";

impl super::Database {
    /// All stored preference pairs.
    pub fn load_settings(&self) -> Result<Vec<(String, String)>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SETTINGS_SQL)
            .db_context("Failed to prepare settings query")?;

        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .db_context("Failed to query settings")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read settings row")?;

        Ok(rows)
    }

    /// Writes one preference value.
    pub fn put_setting(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_SETTING_SQL, params![key, value])
            .db_context("Failed to store setting")?;
        Ok(())
    }
}
