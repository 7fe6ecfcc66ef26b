//! Async document store backed by the local SQLite database.
//!
//! [`DocumentStore`] implements the [`crate::store`] contracts. Every call
//! opens its own connection on a blocking worker thread, so calls never block
//! the async runtime and unrelated calls never wait on each other.
//!
//! ```rust,no_run
//! use exploreo_core::{DocumentStoreBuilder, store::BookmarkStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DocumentStoreBuilder::new()
//!     .with_database_path(Some("exploreo.db"))
//!     .build()
//!     .await?;
//! let bookmarks = store.list("some-user-id").await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;
use uuid::Uuid;

use crate::{
    db::Database,
    error::{ExploreoError, Result},
};

pub mod bookmark_ops;
pub mod builder;
pub mod itinerary_ops;
pub mod profile_ops;

pub use builder::DocumentStoreBuilder;

/// Handle to the local document store.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pub(crate) db_path: PathBuf,
}

impl DocumentStore {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on a blocking thread.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(ExploreoError::join)?
    }
}

/// Mints a new random document id.
pub(crate) fn new_document_id() -> String {
    Uuid::new_v4().simple().to_string()
}
