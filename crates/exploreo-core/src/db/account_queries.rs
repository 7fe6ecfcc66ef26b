//! Local identity records and the signed-in session slot.

use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const INSERT_ACCOUNT_SQL: &str = "INSERT INTO accounts (uid, email, password_salt, password_hash, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const CHECK_EMAIL_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = ?1)";
const SELECT_ACCOUNT_BY_EMAIL_SQL: &str =
    "SELECT uid, email, password_salt, password_hash FROM accounts WHERE email = ?1";
const UPSERT_SESSION_SQL: &str = "INSERT INTO auth_session (slot, uid) VALUES (1, ?1) ON CONFLICT(slot) DO UPDATE SET uid = excluded.uid";
const SELECT_SESSION_SQL: &str = "SELECT uid FROM auth_session WHERE slot = 1";
const DELETE_SESSION_SQL: &str = "DELETE FROM auth_session";

/// Stored credentials for one identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub uid: String,
    pub email: String,
    pub password_salt: String,
    pub password_hash: String,
}

impl super::Database {
    /// Inserts a new account. Returns `false` without writing when the email
    /// (compared case-insensitively) is already registered.
    pub fn create_account(&mut self, record: &AccountRecord, created_at_ms: i64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_EMAIL_EXISTS_SQL, params![record.email], |row| {
                row.get(0)
            })
            .db_context("Failed to check account existence")?;

        if exists {
            return Ok(false);
        }

        tx.execute(
            INSERT_ACCOUNT_SQL,
            params![
                record.uid,
                record.email,
                record.password_salt,
                record.password_hash,
                created_at_ms,
            ],
        )
        .db_context("Failed to insert account")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(true)
    }

    /// Looks up an account by email, ignoring case.
    pub fn find_account_by_email(&self, email: &str) -> Result<Option<AccountRecord>> {
        self.connection
            .query_row(SELECT_ACCOUNT_BY_EMAIL_SQL, params![email], |row| {
                Ok(AccountRecord {
                    uid: row.get(0)?,
                    email: row.get(1)?,
                    password_salt: row.get(2)?,
                    password_hash: row.get(3)?,
                })
            })
            .optional()
            .db_context("Failed to load account")
    }

    /// Marks `uid` as the signed-in identity.
    pub fn set_session(&mut self, uid: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_SESSION_SQL, params![uid])
            .db_context("Failed to store session")?;
        Ok(())
    }

    /// The signed-in identity, if any.
    pub fn current_session(&self) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SESSION_SQL, [], |row| row.get(0))
            .optional()
            .db_context("Failed to load session")
    }

    /// Signs out.
    pub fn clear_session(&mut self) -> Result<()> {
        self.connection
            .execute(DELETE_SESSION_SQL, [])
            .db_context("Failed to clear session")?;
        Ok(())
    }
}
