//! User profile document queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::UserProfile,
};

const UPSERT_PROFILE_SQL: &str = "INSERT INTO users (uid, display_name, email, preferred_language) VALUES (?1, ?2, ?3, ?4) ON CONFLICT(uid) DO UPDATE SET display_name = excluded.display_name, email = excluded.email, preferred_language = excluded.preferred_language";
const SELECT_PROFILE_SQL: &str =
    "SELECT uid, display_name, email, preferred_language FROM users WHERE uid = ?1";

impl super::Database {
    /// Creates or replaces a profile document.
    pub fn upsert_profile(&mut self, profile: &UserProfile) -> Result<()> {
        self.connection
            .execute(
                UPSERT_PROFILE_SQL,
                params![
                    profile.id,
                    profile.display_name,
                    profile.email,
                    profile.preferred_language,
                ],
            )
            .db_context("Failed to upsert profile")?;
        Ok(())
    }

    /// Fetches a profile by identity id.
    pub fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>> {
        self.connection
            .query_row(SELECT_PROFILE_SQL, params![uid], |row| {
                Ok(UserProfile {
                    id: row.get(0)?,
                    display_name: row.get(1)?,
                    email: row.get(2)?,
                    preferred_language: row.get(3)?,
                })
            })
            .optional()
            .db_context("Failed to load profile")
    }
}
