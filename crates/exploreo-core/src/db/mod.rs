//! SQLite persistence for the local document store.
//!
//! This module owns the SQLite connection, schema management, and one query
//! module per collection. It is synchronous; the async store facade in
//! [`crate::documents`] runs these calls on blocking worker threads.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod account_queries;
pub mod bookmark_queries;
pub mod itinerary_queries;
pub mod migrations;
pub mod profile_queries;
pub mod settings_queries;

pub use account_queries::AccountRecord;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
