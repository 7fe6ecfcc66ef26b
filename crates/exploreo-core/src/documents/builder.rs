//! Builder for creating and configuring DocumentStore instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::DocumentStore;
use crate::{
    db::Database,
    error::{ExploreoError, Result},
};

/// Builder for creating and configuring DocumentStore instances.
#[derive(Debug, Clone, Default)]
pub struct DocumentStoreBuilder {
    database_path: Option<PathBuf>,
}

impl DocumentStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/exploreo/exploreo.db` or
    /// `~/.local/share/exploreo/exploreo.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `ExploreoError::FileSystem` if the parent directory cannot be
    /// created, `ExploreoError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<DocumentStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ExploreoError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ExploreoError>(())
        })
        .await
        .map_err(ExploreoError::join)??;

        log::debug!("Document store ready at {}", db_path.display());
        Ok(DocumentStore::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    pub fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("exploreo")
            .place_data_file("exploreo.db")
            .map_err(|e| ExploreoError::XdgDirectory(e.to_string()))
    }
}
