//! Profile collection operations for the DocumentStore.

use async_trait::async_trait;

use super::DocumentStore;
use crate::{
    error::{ExploreoError, Result},
    models::UserProfile,
    store::ProfileStore,
};

#[async_trait]
impl ProfileStore for DocumentStore {
    async fn upsert(&self, profile: &UserProfile) -> Result<()> {
        if profile.id.is_empty() {
            return Err(ExploreoError::Unauthenticated);
        }
        let profile = profile.clone();
        self.with_db(move |db| db.upsert_profile(&profile)).await
    }

    async fn get(&self, owner_id: &str) -> Result<Option<UserProfile>> {
        if owner_id.is_empty() {
            return Ok(None);
        }
        let owner_id = owner_id.to_string();
        self.with_db(move |db| db.get_profile(&owner_id)).await
    }
}
