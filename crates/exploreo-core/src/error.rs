//! Error types for the Exploreo core library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all Exploreo operations.
#[derive(Error, Debug)]
pub enum ExploreoError {
    /// No signed-in identity is available for an operation that needs one
    #[error("Not signed in")]
    Unauthenticated,
    /// Client-side input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Backend or network failure, surfaced as a human-readable message
    #[error("{message}")]
    Remote { message: String },
    /// Itinerary item index outside the working list
    #[error("No itinerary item at position {index} (list has {len} items)")]
    ItemNotFound { index: usize, len: usize },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ExploreoError {
        ExploreoError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ExploreoError {
        ExploreoError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ExploreoError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Creates a remote failure carrying a user-facing message.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Maps a blocking task join failure.
    pub(crate) fn join(err: tokio::task::JoinError) -> Self {
        Self::configuration(format!("Task join error: {err}"))
    }
}

impl From<reqwest::Error> for ExploreoError {
    fn from(err: reqwest::Error) -> Self {
        Self::remote(err.to_string())
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ExploreoError::database(message).with_source(e))
    }
}

/// Result type alias for Exploreo operations
pub type Result<T> = std::result::Result<T, ExploreoError>;
