//! Core domain types for the rating system.
//!
//! Users and movies are plain data holders created once and never mutated;
//! all state changes go through [`crate::RatingStore::add_rating`].

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with movie IDs

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

// =============================================================================
// Entities
// =============================================================================

/// A user known to the system.
///
/// The `name` field is display-only; identity is the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A movie in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

// =============================================================================
// Rating
// =============================================================================

/// A star rating in `0..=5`, where 0 is the [`Rating::NOT_RATED`] sentinel.
///
/// The sentinel means "absence of a rating", not a valid low score, but it
/// still participates as the value 0 in arithmetic so that sums and
/// comparisons stay total. `Ord` follows the underlying value, which is what
/// the recommender's strict `>` tie-breaking relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// Sentinel for "no rating given"; compares below every real score.
    pub const NOT_RATED: Rating = Rating(0);
    pub const ONE: Rating = Rating(1);
    pub const TWO: Rating = Rating(2);
    pub const THREE: Rating = Rating(3);
    pub const FOUR: Rating = Rating(4);
    pub const FIVE: Rating = Rating(5);

    /// Highest valid star value.
    pub const MAX_STARS: u8 = 5;

    /// Build a rating from a raw star count, rejecting out-of-range values.
    pub fn new(stars: u8) -> Option<Rating> {
        (stars <= Self::MAX_STARS).then_some(Rating(stars))
    }

    /// The underlying ordinal value (0 for the sentinel).
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this is a real score rather than the sentinel.
    pub fn is_rated(self) -> bool {
        self.0 != 0
    }

    /// Absolute difference between two rating values.
    pub fn distance(self, other: Rating) -> u32 {
        u32::from(self.0.abs_diff(other.0))
    }
}

impl TryFrom<u8> for Rating {
    type Error = u8;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Rating::new(stars).ok_or(stars)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_rated() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "unrated")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_range() {
        assert_eq!(Rating::new(0), Some(Rating::NOT_RATED));
        assert_eq!(Rating::new(5), Some(Rating::FIVE));
        assert_eq!(Rating::new(6), None);
        assert_eq!(Rating::try_from(9), Err(9));
    }

    #[test]
    fn test_rating_ordering() {
        assert!(Rating::NOT_RATED < Rating::ONE);
        assert!(Rating::FIVE > Rating::FOUR);
        assert!(!Rating::NOT_RATED.is_rated());
        assert!(Rating::ONE.is_rated());
    }

    #[test]
    fn test_rating_distance() {
        assert_eq!(Rating::TWO.distance(Rating::THREE), 1);
        assert_eq!(Rating::THREE.distance(Rating::TWO), 1);
        assert_eq!(Rating::FIVE.distance(Rating::NOT_RATED), 5);
        assert_eq!(Rating::FOUR.distance(Rating::FOUR), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rating::THREE.to_string(), "3");
        assert_eq!(Rating::NOT_RATED.to_string(), "unrated");
    }
}
