//! Error types for loading rating datasets.
//!
//! The store and recommender APIs themselves are total and never fail; the
//! only fallible surface in this crate is reading a dataset file from disk.

use crate::types::{MovieId, UserId};
use thiserror::Error;

/// Errors that can occur while loading a rating dataset
#[derive(Error, Debug)]
pub enum RatingDataError {
    /// Dataset file could not be read
    #[error("failed to read dataset {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not valid JSON or doesn't match the expected shape
    #[error("invalid dataset JSON in {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A rating record carried a star value outside `0..=5`
    #[error("invalid rating value {stars} for user {user_id} on movie {movie_id}")]
    InvalidRating {
        stars: u8,
        user_id: UserId,
        movie_id: MovieId,
    },

    /// A rating record referenced a user or movie not declared in the dataset
    #[error("rating references missing {entity} with id {id}")]
    MissingReference { entity: &'static str, id: u32 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RatingDataError>;
