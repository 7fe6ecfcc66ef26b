//! Itinerary session state.
//!
//! [`ItinerarySession`] owns the working list of itinerary items being
//! edited. It is driven by one caller at a time and holds no locks; the
//! store and auth collaborators are injected at construction.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use exploreo_core::{
//!     auth::LocalAuth, models::ItineraryItem, session::ItinerarySession,
//!     DocumentStoreBuilder,
//! };
//!
//! # async fn example() -> exploreo_core::Result<()> {
//! let store = DocumentStoreBuilder::new().build().await?;
//! let auth = Arc::new(LocalAuth::open(store.clone()).await?);
//! let mut session = ItinerarySession::new(Arc::new(store), auth);
//!
//! session.add_item(ItineraryItem::new("Beach").with_time("10:00"));
//! let outcome = session.save().await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::tz::TimeZone;
use log::{debug, info};

use crate::{
    auth::AuthGate,
    display::ItineraryShareText,
    error::{ExploreoError, Result},
    models::ItineraryItem,
    store::ItineraryStore,
};

/// Result of [`ItinerarySession::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Stored under a new id.
    Saved(String),
    /// The working list was already stored under this id.
    AlreadySaved(String),
    /// The working list is empty; the store was not contacted.
    NothingToSave,
    Unauthenticated,
}

/// Result of [`ItinerarySession::load_latest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The working list now holds this many items.
    Loaded(usize),
    /// No itinerary saved yet; the working list is unchanged.
    NoneSaved,
    Unauthenticated,
}

/// Ordered, mutable working list of itinerary items.
pub struct ItinerarySession {
    store: Arc<dyn ItineraryStore>,
    auth: Arc<dyn AuthGate>,
    items: Vec<ItineraryItem>,
    time_zone: TimeZone,
    /// Owner and id of the last save of the unchanged list.
    last_saved: Option<(String, String)>,
}

impl ItinerarySession {
    /// Creates an empty session that formats dates in the system time zone.
    pub fn new(store: Arc<dyn ItineraryStore>, auth: Arc<dyn AuthGate>) -> Self {
        Self {
            store,
            auth,
            items: Vec::new(),
            time_zone: TimeZone::system(),
            last_saved: None,
        }
    }

    /// Time zone used to render item dates in the share text.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn items(&self) -> &[ItineraryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item to the end of the list.
    pub fn add_item(&mut self, item: ItineraryItem) {
        self.items.push(item);
        self.last_saved = None;
    }

    /// Removes and returns the item at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns `ExploreoError::ItemNotFound` when `index` is out of range;
    /// the list is left untouched.
    pub fn remove_item(&mut self, index: usize) -> Result<ItineraryItem> {
        if index >= self.items.len() {
            return Err(ExploreoError::ItemNotFound {
                index,
                len: self.items.len(),
            });
        }
        self.last_saved = None;
        Ok(self.items.remove(index))
    }

    /// Replaces the working list with the user's most recently saved
    /// itinerary.
    pub async fn load_latest(&mut self) -> Result<LoadOutcome> {
        let Some(owner_id) = self.owner_id() else {
            return Ok(LoadOutcome::Unauthenticated);
        };

        match self.store.latest(&owner_id).await? {
            Some(itinerary) => {
                debug!("Loaded itinerary {}", itinerary.id);
                self.items = itinerary.items;
                self.last_saved = None;
                Ok(LoadOutcome::Loaded(self.items.len()))
            }
            None => Ok(LoadOutcome::NoneSaved),
        }
    }

    /// Saves a snapshot of the working list as a new itinerary.
    ///
    /// Saving an unchanged list twice as the same user returns the first id
    /// without a second store call. A different signed-in user gets a fresh
    /// save of their own.
    pub async fn save(&mut self) -> Result<SaveOutcome> {
        if self.items.is_empty() {
            return Ok(SaveOutcome::NothingToSave);
        }
        let Some(owner_id) = self.owner_id() else {
            return Ok(SaveOutcome::Unauthenticated);
        };
        if let Some((_, id)) = self
            .last_saved
            .as_ref()
            .filter(|(saved_by, _)| *saved_by == owner_id)
        {
            debug!("Itinerary already saved as {id}");
            return Ok(SaveOutcome::AlreadySaved(id.clone()));
        }

        match self.store.create(&owner_id, &self.items).await {
            Ok(id) => {
                info!("Saved itinerary {id} ({} items)", self.items.len());
                self.last_saved = Some((owner_id, id.clone()));
                Ok(SaveOutcome::Saved(id))
            }
            Err(ExploreoError::Unauthenticated) => Ok(SaveOutcome::Unauthenticated),
            Err(e) => Err(e),
        }
    }

    /// Share text of the working list, header included.
    pub fn share_text(&self) -> ItineraryShareText<'_> {
        ItineraryShareText::new(&self.items, &self.time_zone)
    }

    pub fn render_share_text(&self) -> String {
        self.share_text().to_string()
    }

    fn owner_id(&self) -> Option<String> {
        self.auth.current_user_id().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    use async_trait::async_trait;
    use jiff::Timestamp;

    use super::*;
    use crate::{
        models::Itinerary,
        params::{SignIn, SignUp},
    };

    #[derive(Default)]
    struct CountingStore {
        creates: AtomicUsize,
        saved: Mutex<Vec<Itinerary>>,
    }

    #[async_trait]
    impl ItineraryStore for CountingStore {
        async fn create(&self, owner_id: &str, items: &[ItineraryItem]) -> Result<String> {
            let n = self.creates.fetch_add(1, Ordering::SeqCst) + 1;
            let id = format!("it-{n}");
            self.saved.lock().unwrap().push(Itinerary {
                id: id.clone(),
                owner_id: owner_id.to_string(),
                items: items.to_vec(),
                created_at: Timestamp::now(),
            });
            Ok(id)
        }

        async fn latest(&self, owner_id: &str) -> Result<Option<Itinerary>> {
            Ok(self
                .saved
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|it| it.owner_id == owner_id)
                .cloned())
        }

        async fn list_all(&self, owner_id: &str) -> Result<Vec<Itinerary>> {
            Ok(self
                .saved
                .lock()
                .unwrap()
                .iter()
                .rev()
                .filter(|it| it.owner_id == owner_id)
                .cloned()
                .collect())
        }
    }

    struct FixedAuth(Mutex<Option<String>>);

    impl FixedAuth {
        fn new(user: Option<&str>) -> Self {
            Self(Mutex::new(user.map(str::to_string)))
        }

        fn switch_to(&self, user: Option<&str>) {
            *self.0.lock().unwrap() = user.map(str::to_string);
        }
    }

    #[async_trait]
    impl AuthGate for FixedAuth {
        fn current_user_id(&self) -> Option<String> {
            self.0.lock().unwrap().clone()
        }

        async fn sign_in(&self, _params: &SignIn) -> Result<String> {
            Err(ExploreoError::remote("not supported"))
        }

        async fn sign_up(&self, _params: &SignUp) -> Result<String> {
            Err(ExploreoError::remote("not supported"))
        }

        async fn sign_out(&self) -> Result<()> {
            Ok(())
        }
    }

    fn session_for(user: Option<&str>) -> (Arc<CountingStore>, ItinerarySession) {
        let (store, _auth, session) = session_with_auth(user);
        (store, session)
    }

    fn session_with_auth(
        user: Option<&str>,
    ) -> (Arc<CountingStore>, Arc<FixedAuth>, ItinerarySession) {
        let store = Arc::new(CountingStore::default());
        let auth = Arc::new(FixedAuth::new(user));
        let session =
            ItinerarySession::new(store.clone(), auth.clone()).with_time_zone(TimeZone::UTC);
        (store, auth, session)
    }

    fn titles(session: &ItinerarySession) -> Vec<&str> {
        session.items().iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let (_store, mut session) = session_for(Some("u1"));
        for title in ["A", "B", "A", "C"] {
            session.add_item(ItineraryItem::new(title));
        }
        assert_eq!(session.len(), 4);
        assert_eq!(titles(&session), vec!["A", "B", "A", "C"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let (_store, mut session) = session_for(Some("u1"));
        for title in ["A", "B", "C", "D"] {
            session.add_item(ItineraryItem::new(title));
        }

        let removed = session.remove_item(1).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(titles(&session), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_remove_out_of_range_is_not_found() {
        let (_store, mut session) = session_for(Some("u1"));
        session.add_item(ItineraryItem::new("A"));

        let err = session.remove_item(3).unwrap_err();
        assert!(matches!(err, ExploreoError::ItemNotFound { index: 3, len: 1 }));
        assert_eq!(session.len(), 1);
    }

    #[tokio::test]
    async fn test_save_empty_never_contacts_store() {
        let (store, mut session) = session_for(Some("u1"));
        assert_eq!(session.save().await.unwrap(), SaveOutcome::NothingToSave);
        assert_eq!(store.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_save_unauthenticated() {
        let (store, mut session) = session_for(None);
        session.add_item(ItineraryItem::new("Beach"));

        assert_eq!(session.save().await.unwrap(), SaveOutcome::Unauthenticated);
        assert_eq!(store.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_save_twice_is_idempotent() {
        let (store, mut session) = session_for(Some("u1"));
        session.add_item(ItineraryItem::new("Beach"));

        let first = session.save().await.unwrap();
        assert_eq!(first, SaveOutcome::Saved("it-1".to_string()));
        let second = session.save().await.unwrap();
        assert_eq!(second, SaveOutcome::AlreadySaved("it-1".to_string()));
        assert_eq!(store.creates.load(Ordering::SeqCst), 1);

        session.add_item(ItineraryItem::new("Market"));
        let third = session.save().await.unwrap();
        assert_eq!(third, SaveOutcome::Saved("it-2".to_string()));
    }

    #[tokio::test]
    async fn test_save_guard_follows_signed_in_user() {
        let (store, auth, mut session) = session_with_auth(Some("alice"));
        session.add_item(ItineraryItem::new("Beach"));
        assert_eq!(
            session.save().await.unwrap(),
            SaveOutcome::Saved("it-1".to_string())
        );

        auth.switch_to(None);
        assert_eq!(session.save().await.unwrap(), SaveOutcome::Unauthenticated);

        auth.switch_to(Some("bob"));
        assert_eq!(
            session.save().await.unwrap(),
            SaveOutcome::Saved("it-2".to_string())
        );
        assert_eq!(store.list_all("bob").await.unwrap().len(), 1);
        assert_eq!(store.list_all("alice").await.unwrap().len(), 1);

        auth.switch_to(Some("alice"));
        assert_eq!(
            session.save().await.unwrap(),
            SaveOutcome::Saved("it-3".to_string())
        );
        assert_eq!(store.creates.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_load_latest_replaces_list() {
        let (_store, mut session) = session_for(Some("u1"));
        session.add_item(ItineraryItem::new("Old"));
        session.save().await.unwrap();
        session.remove_item(0).unwrap();
        session.add_item(ItineraryItem::new("New 1"));
        session.add_item(ItineraryItem::new("New 2"));
        session.save().await.unwrap();
        session.add_item(ItineraryItem::new("Unsaved"));

        assert_eq!(session.load_latest().await.unwrap(), LoadOutcome::Loaded(2));
        assert_eq!(titles(&session), vec!["New 1", "New 2"]);
    }

    #[tokio::test]
    async fn test_load_latest_without_saves_leaves_list() {
        let (_store, mut session) = session_for(Some("u1"));
        session.add_item(ItineraryItem::new("Draft"));

        assert_eq!(session.load_latest().await.unwrap(), LoadOutcome::NoneSaved);
        assert_eq!(titles(&session), vec!["Draft"]);
    }

    #[tokio::test]
    async fn test_load_latest_unauthenticated() {
        let (_store, mut session) = session_for(None);
        assert_eq!(
            session.load_latest().await.unwrap(),
            LoadOutcome::Unauthenticated
        );
    }

    #[test]
    fn test_render_share_text() {
        let (_store, mut session) = session_for(Some("u1"));
        session.add_item(ItineraryItem::new("Beach").with_time("10:00"));
        session.add_item(ItineraryItem::new("Market").with_note("buy gifts"));

        assert_eq!(
            session.share_text().body(),
            "1. Beach (10:00)\n2. Market: buy gifts\n"
        );
        assert_eq!(
            session.render_share_text(),
            "My Exploreo itinerary:\n1. Beach (10:00)\n2. Market: buy gifts\n"
        );
    }
}
