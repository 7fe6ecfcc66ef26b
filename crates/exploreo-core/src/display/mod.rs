//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] as markdown (see
//! [`models`]); newtype wrappers format collections and operation outcomes.
//! The CLI renders the markdown through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Bookmark, ...) │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The one format that is part of the product rather than presentation is
//! the itinerary share text in [`share`], which must stay byte-for-byte
//! reproducible.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Bookmarks, Itineraries, Places, Regions)
//! - [`results`]: Operation outcome formatting
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`share`]: Plain-text itinerary sharing
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod share;
pub mod status;

pub use collections::{Bookmarks, Itineraries, Places, Regions};
pub use datetime::{LocalDateTime, ShortDate};
pub use results::{BookmarkLinks, CreateResult, DeleteResult, StopLinks};
pub use share::{ItineraryShareText, SHARE_HEADER};
pub use status::{OperationStatus, StatusKind};
