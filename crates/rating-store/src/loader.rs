//! Loader for JSON rating datasets.
//!
//! Dataset shape:
//!
//! ```json
//! {
//!   "users": [{ "id": 1, "name": "Alice" }],
//!   "movies": [{ "id": 1, "title": "Inception" }],
//!   "ratings": [{ "user_id": 1, "movie_id": 1, "stars": 5 }]
//! }
//! ```
//!
//! Every rating must reference a declared user and movie and carry a star
//! value in `0..=5`. Ratings are replayed through
//! [`RatingStore::add_rating`] in file order, so insertion-order semantics
//! match what a live caller would have produced.

use crate::error::{RatingDataError, Result};
use crate::store::RatingStore;
use crate::types::{Movie, MovieId, Rating, User, UserId};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One rating row as it appears on disk
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RatingRecord {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub stars: u8,
}

/// Top-level dataset file
#[derive(Debug, Deserialize)]
struct Dataset {
    users: Vec<User>,
    movies: Vec<Movie>,
    ratings: Vec<RatingRecord>,
}

/// Load a dataset file into a fresh [`RatingStore`].
pub fn load_dataset(path: &Path) -> Result<RatingStore> {
    let text = fs::read_to_string(path).map_err(|source| RatingDataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let dataset: Dataset =
        serde_json::from_str(&text).map_err(|source| RatingDataError::Json {
            path: path.display().to_string(),
            source,
        })?;

    let store = build_store(dataset)?;
    let (users, movies, ratings) = store.counts();
    debug!(
        path = %path.display(),
        users, movies, ratings, "loaded rating dataset"
    );
    Ok(store)
}

fn build_store(dataset: Dataset) -> Result<RatingStore> {
    let users: HashMap<UserId, User> =
        dataset.users.into_iter().map(|u| (u.id, u)).collect();
    let movies: HashMap<MovieId, Movie> =
        dataset.movies.into_iter().map(|m| (m.id, m)).collect();

    let mut store = RatingStore::new();
    for record in dataset.ratings {
        let user = users
            .get(&record.user_id)
            .ok_or(RatingDataError::MissingReference {
                entity: "user",
                id: record.user_id,
            })?;
        let movie = movies
            .get(&record.movie_id)
            .ok_or(RatingDataError::MissingReference {
                entity: "movie",
                id: record.movie_id,
            })?;
        let rating =
            Rating::try_from(record.stars).map_err(|stars| RatingDataError::InvalidRating {
                stars,
                user_id: record.user_id,
                movie_id: record.movie_id,
            })?;
        store.add_rating(user, movie, rating);
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<RatingStore> {
        let dataset: Dataset = serde_json::from_str(json).expect("test JSON must parse");
        build_store(dataset)
    }

    #[test]
    fn test_build_store_from_records() {
        let store = parse(
            r#"{
                "users": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}],
                "movies": [{"id": 1, "title": "Inception"}, {"id": 2, "title": "Titanic"}],
                "ratings": [
                    {"user_id": 1, "movie_id": 1, "stars": 5},
                    {"user_id": 2, "movie_id": 2, "stars": 3}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(store.counts(), (2, 2, 2));
        let alice = &store.get_users()[0];
        assert_eq!(alice.name, "Alice");
        assert_eq!(store.get_user_movies(alice)[0].title, "Inception");
    }

    #[test]
    fn test_missing_user_reference() {
        let err = parse(
            r#"{
                "users": [],
                "movies": [{"id": 1, "title": "Inception"}],
                "ratings": [{"user_id": 7, "movie_id": 1, "stars": 4}]
            }"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            RatingDataError::MissingReference { entity: "user", id: 7 }
        ));
    }

    #[test]
    fn test_out_of_range_stars() {
        let err = parse(
            r#"{
                "users": [{"id": 1, "name": "Alice"}],
                "movies": [{"id": 1, "title": "Inception"}],
                "ratings": [{"user_id": 1, "movie_id": 1, "stars": 9}]
            }"#,
        )
        .unwrap_err();

        assert!(matches!(err, RatingDataError::InvalidRating { stars: 9, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, RatingDataError::Io { .. }));
    }
}
