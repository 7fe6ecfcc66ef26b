//! Bookmark collection operations for the DocumentStore.

use async_trait::async_trait;
use log::debug;

use super::{new_document_id, DocumentStore};
use crate::{
    error::{ExploreoError, Result},
    models::{Bookmark, Place},
    store::BookmarkStore,
};

#[async_trait]
impl BookmarkStore for DocumentStore {
    async fn list(&self, owner_id: &str) -> Result<Vec<Bookmark>> {
        if owner_id.is_empty() {
            return Ok(Vec::new());
        }
        let owner_id = owner_id.to_string();
        self.with_db(move |db| db.list_bookmarks(&owner_id)).await
    }

    async fn add(&self, owner_id: &str, place: &Place) -> Result<Bookmark> {
        if owner_id.is_empty() {
            return Err(ExploreoError::Unauthenticated);
        }
        let bookmark = Bookmark::from_place(new_document_id(), owner_id, place);
        debug!("Adding bookmark {} for {owner_id}", bookmark.id);

        let stored = bookmark.clone();
        self.with_db(move |db| db.insert_bookmark(&stored)).await?;
        Ok(bookmark)
    }

    async fn remove(&self, owner_id: &str, id: &str) -> Result<()> {
        if owner_id.is_empty() {
            return Ok(());
        }
        let owner_id = owner_id.to_string();
        let id = id.to_string();
        let removed = self
            .with_db(move |db| db.delete_bookmark(&owner_id, &id))
            .await?;
        debug!("Bookmark removal affected a row: {removed}");
        Ok(())
    }

    async fn get(&self, owner_id: &str, id: &str) -> Result<Option<Bookmark>> {
        if owner_id.is_empty() || id.trim().is_empty() {
            return Ok(None);
        }
        let owner_id = owner_id.to_string();
        let id = id.to_string();
        self.with_db(move |db| db.get_bookmark(&owner_id, &id)).await
    }
}
