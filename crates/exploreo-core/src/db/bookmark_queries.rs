//! Bookmark document queries.

use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Bookmark,
};

const INSERT_BOOKMARK_SQL: &str = "INSERT INTO bookmarks (id, owner_id, place_name, lat, lon, categories) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_BOOKMARKS_SQL: &str = "SELECT id, owner_id, place_name, lat, lon, categories FROM bookmarks WHERE owner_id = ?1 ORDER BY seq";
const SELECT_BOOKMARK_SQL: &str = "SELECT id, owner_id, place_name, lat, lon, categories FROM bookmarks WHERE owner_id = ?1 AND id = ?2";
const DELETE_BOOKMARK_SQL: &str = "DELETE FROM bookmarks WHERE owner_id = ?1 AND id = ?2";

impl super::Database {
    fn build_bookmark_from_row(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        let categories_json: String = row.get(5)?;
        let categories = serde_json::from_str(&categories_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

        Ok(Bookmark {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            place_name: row.get(2)?,
            latitude: row.get(3)?,
            longitude: row.get(4)?,
            categories,
        })
    }

    /// Writes a new bookmark document. The id must already be assigned.
    pub fn insert_bookmark(&mut self, bookmark: &Bookmark) -> Result<()> {
        let categories = serde_json::to_string(&bookmark.categories)?;

        self.connection
            .execute(
                INSERT_BOOKMARK_SQL,
                params![
                    bookmark.id,
                    bookmark.owner_id,
                    bookmark.place_name,
                    bookmark.latitude,
                    bookmark.longitude,
                    categories,
                ],
            )
            .db_context("Failed to insert bookmark")?;
        Ok(())
    }

    /// Lists an owner's bookmarks in creation order.
    pub fn list_bookmarks(&self, owner_id: &str) -> Result<Vec<Bookmark>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_BOOKMARKS_SQL)
            .db_context("Failed to prepare bookmark query")?;

        let bookmarks = stmt
            .query_map(params![owner_id], Self::build_bookmark_from_row)
            .db_context("Failed to query bookmarks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read bookmark row")?;

        Ok(bookmarks)
    }

    /// Fetches one bookmark of an owner.
    pub fn get_bookmark(&self, owner_id: &str, id: &str) -> Result<Option<Bookmark>> {
        self.connection
            .query_row(
                SELECT_BOOKMARK_SQL,
                params![owner_id, id],
                Self::build_bookmark_from_row,
            )
            .optional()
            .db_context("Failed to load bookmark")
    }

    /// Deletes a bookmark. Returns whether a row was removed.
    pub fn delete_bookmark(&mut self, owner_id: &str, id: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_BOOKMARK_SQL, params![owner_id, id])
            .db_context("Failed to delete bookmark")?;
        Ok(deleted > 0)
    }
}
