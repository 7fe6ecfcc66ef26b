//! Core library for the Exploreo travel companion.
//!
//! This crate holds everything below the presentation layer: the itinerary
//! session, the duplicate-bookmark policy, the per-user document store
//! contracts and their local SQLite implementation, authentication,
//! observable preferences, the curated place catalog, remote place search,
//! and map link builders.
//!
//! # Collaborators
//!
//! Stateful components receive their collaborators explicitly:
//!
//! - [`store::BookmarkStore`], [`store::ItineraryStore`] and
//!   [`store::ProfileStore`] model the per-user collections. [`DocumentStore`]
//!   implements all three.
//! - [`auth::AuthGate`] reports the signed-in identity. [`auth::LocalAuth`]
//!   implements it on the same database.
//! - [`search::PlaceSearch`] finds places remotely. [`search::GeoapifyClient`]
//!   implements it over HTTP.
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] as markdown; the wrappers in
//! [`display`] format collections and outcomes. The itinerary share text in
//! [`display::share`] is plain text and stable.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use exploreo_core::{
//!     auth::LocalAuth, bookmarks::BookmarkService, catalog, DocumentStoreBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DocumentStoreBuilder::new()
//!     .with_database_path(Some("exploreo.db"))
//!     .build()
//!     .await?;
//! let auth = Arc::new(LocalAuth::open(store.clone()).await?);
//! let bookmarks = BookmarkService::new(Arc::new(store), auth);
//!
//! if let Some(attraction) = catalog::find("Table Mountain, Cape Town") {
//!     let outcome = bookmarks.add_place(&attraction.to_place()).await?;
//!     println!("{outcome}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod bookmarks;
pub mod catalog;
pub mod config;
pub mod db;
pub mod dedup;
pub mod display;
pub mod documents;
pub mod error;
pub mod links;
pub mod models;
pub mod params;
pub mod search;
pub mod session;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use bookmarks::{BookmarkOutcome, BookmarkService};
pub use config::{Config, ConfigBuilder};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus};
pub use documents::{DocumentStore, DocumentStoreBuilder};
pub use error::{ExploreoError, Result};
pub use models::{Bookmark, Itinerary, ItineraryItem, Place, Settings, UserProfile};
pub use params::{NewItineraryItem, SearchPlaces, SignIn, SignUp};
pub use session::{ItinerarySession, LoadOutcome, SaveOutcome};
pub use settings::{SettingKey, SettingsStore};
