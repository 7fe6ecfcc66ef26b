//! Itinerary document queries.
//!
//! Items are stored as a JSON array in a single column, keeping each
//! itinerary one document as in the remote collection.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Itinerary,
};

const INSERT_ITINERARY_SQL: &str =
    "INSERT INTO itineraries (id, owner_id, items, created_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_LATEST_ITINERARY_SQL: &str = "SELECT id, owner_id, items, created_at FROM itineraries WHERE owner_id = ?1 ORDER BY created_at DESC, seq DESC LIMIT 1";
const SELECT_ITINERARIES_SQL: &str = "SELECT id, owner_id, items, created_at FROM itineraries WHERE owner_id = ?1 ORDER BY created_at DESC, seq DESC";

impl super::Database {
    fn build_itinerary_from_row(row: &rusqlite::Row) -> rusqlite::Result<Itinerary> {
        let items_json: String = row.get(2)?;
        let items = serde_json::from_str(&items_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

        let created_ms: i64 = row.get(3)?;
        let created_at = Timestamp::from_millisecond(created_ms)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e)))?;

        Ok(Itinerary {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            items,
            created_at,
        })
    }

    /// Writes a new itinerary document.
    pub fn insert_itinerary(&mut self, itinerary: &Itinerary) -> Result<()> {
        let items = serde_json::to_string(&itinerary.items)?;

        self.connection
            .execute(
                INSERT_ITINERARY_SQL,
                params![
                    itinerary.id,
                    itinerary.owner_id,
                    items,
                    itinerary.created_at.as_millisecond(),
                ],
            )
            .db_context("Failed to insert itinerary")?;
        Ok(())
    }

    /// The owner's newest itinerary; equal timestamps resolve to the later
    /// insert.
    pub fn latest_itinerary(&self, owner_id: &str) -> Result<Option<Itinerary>> {
        self.connection
            .query_row(
                SELECT_LATEST_ITINERARY_SQL,
                params![owner_id],
                Self::build_itinerary_from_row,
            )
            .optional()
            .db_context("Failed to load latest itinerary")
    }

    /// All of an owner's itineraries, newest first.
    pub fn list_itineraries(&self, owner_id: &str) -> Result<Vec<Itinerary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ITINERARIES_SQL)
            .db_context("Failed to prepare itinerary query")?;

        let itineraries = stmt
            .query_map(params![owner_id], Self::build_itinerary_from_row)
            .db_context("Failed to query itineraries")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read itinerary row")?;

        Ok(itineraries)
    }
}
