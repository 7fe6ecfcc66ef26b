//! Data models for places, bookmarks, itineraries, profiles and settings.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping the data structures free of
//! presentation logic.
//!
//! # Ownership
//!
//! Every persisted model ([`Bookmark`], [`Itinerary`], [`UserProfile`]) is
//! scoped to exactly one owner id. [`Place`] and [`ItineraryItem`] are never
//! stored on their own: a place becomes a bookmark, an item only lives inside
//! an itinerary or the in-memory session list.
//!
//! # Examples
//!
//! ```rust
//! use exploreo_core::models::{ItineraryItem, Place};
//!
//! let place = Place::named("Table Mountain, Cape Town", -33.9628, 18.4098);
//! assert_eq!(place.latitude, Some(-33.9628));
//!
//! let item = ItineraryItem::new("Cable car").with_time("09:30");
//! assert_eq!(item.time_label.as_deref(), Some("09:30"));
//! ```

pub mod bookmark;
pub mod itinerary;
pub mod place;
pub mod profile;
pub mod settings;


pub use bookmark::Bookmark;
pub use itinerary::{Itinerary, ItineraryItem};
pub use place::Place;
pub use profile::UserProfile;
pub use settings::{ImageQuality, MapDisplayMode, Settings};
