//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints a fixed message for empty collections so callers never
//! emit blank output.

use std::{fmt, ops::Index};

use crate::{
    catalog::Region,
    models::{Bookmark, Itinerary, Place},
};

/// Newtype wrapper for displaying a user's bookmarks.
///
/// # Examples
///
/// ```rust
/// use exploreo_core::{display::Bookmarks, models::{Bookmark, Place}};
///
/// let place = Place::named("Knysna Heads", -34.0809, 23.0606);
/// let bookmarks = Bookmarks(vec![Bookmark::from_place("b1", "u1", &place)]);
/// assert!(bookmarks.to_string().contains("Knysna Heads"));
/// assert_eq!(Bookmarks(vec![]).to_string(), "No bookmarks yet.\n");
/// ```
pub struct Bookmarks(pub Vec<Bookmark>);

impl Bookmarks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.0.iter()
    }
}

impl Index<usize> for Bookmarks {
    type Output = Bookmark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Bookmarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No bookmarks yet.");
        }
        for bookmark in &self.0 {
            write!(f, "{bookmark}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying saved itineraries.
pub struct Itineraries(pub Vec<Itinerary>);

impl Itineraries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Itineraries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No saved itineraries.");
        }
        for itinerary in &self.0 {
            write!(f, "{itinerary}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying place search results.
pub struct Places(pub Vec<Place>);

impl fmt::Display for Places {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No places found.");
        }
        for place in &self.0 {
            write!(f, "{place}")?;
        }
        Ok(())
    }
}

/// Wrapper for displaying catalog regions.
pub struct Regions<'a>(pub &'a [Region]);

impl<'a> fmt::Display for Regions<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No regions found.");
        }
        writeln!(f, "# Explore by region")?;
        writeln!(f)?;
        for region in self.0 {
            write!(f, "{region}")?;
        }
        Ok(())
    }
}
