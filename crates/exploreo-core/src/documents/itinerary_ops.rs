//! Itinerary collection operations for the DocumentStore.

use async_trait::async_trait;
use jiff::Timestamp;
use log::debug;

use super::{new_document_id, DocumentStore};
use crate::{
    error::{ExploreoError, Result},
    models::{Itinerary, ItineraryItem},
    store::ItineraryStore,
};

#[async_trait]
impl ItineraryStore for DocumentStore {
    async fn create(&self, owner_id: &str, items: &[ItineraryItem]) -> Result<String> {
        if owner_id.is_empty() {
            return Err(ExploreoError::Unauthenticated);
        }
        let itinerary = Itinerary {
            id: new_document_id(),
            owner_id: owner_id.to_string(),
            items: items.to_vec(),
            created_at: Timestamp::now(),
        };
        let id = itinerary.id.clone();
        debug!("Creating itinerary {id} with {} items", itinerary.items.len());

        self.with_db(move |db| db.insert_itinerary(&itinerary)).await?;
        Ok(id)
    }

    async fn latest(&self, owner_id: &str) -> Result<Option<Itinerary>> {
        if owner_id.is_empty() {
            return Ok(None);
        }
        let owner_id = owner_id.to_string();
        self.with_db(move |db| db.latest_itinerary(&owner_id)).await
    }

    async fn list_all(&self, owner_id: &str) -> Result<Vec<Itinerary>> {
        if owner_id.is_empty() {
            return Ok(Vec::new());
        }
        let owner_id = owner_id.to_string();
        self.with_db(move |db| db.list_itineraries(&owner_id)).await
    }
}
