//! The in-memory rating store.
//!
//! [`RatingStore`] is the single source of truth for who rated what. It keeps
//! users and movies in insertion order (the recommender's tie-breaking depends
//! on that) and maintains two indices that are updated together on every
//! write:
//!
//! - user id → ordered sequence of movies that user has rated
//! - movie id → map of user id to that user's rating
//!
//! A (user, movie) pair appears in the per-movie map if and only if the movie
//! appears in that user's sequence. Re-rating a movie overwrites the stored
//! value but appends another entry to the user's sequence; callers that need
//! set semantics dedup on movie id.

use crate::types::{Movie, MovieId, Rating, User, UserId};
use std::collections::{BTreeMap, HashMap};

// Empty fallback for unknown movies; BTreeMap::new is const so this can be a
// plain static.
static NO_RATINGS: BTreeMap<UserId, Rating> = BTreeMap::new();

/// Holds all (user, movie, rating) facts and answers queries over them.
///
/// Single-threaded by design: `add_rating` performs several related index
/// updates that readers must observe together, so concurrent callers need
/// external serialization.
#[derive(Debug, Default)]
pub struct RatingStore {
    /// All known users, in the order they first rated something
    users: Vec<User>,
    /// All known movies, in the order they first received a rating
    movies: Vec<Movie>,
    /// Movies rated by each user, in rating order (duplicates on re-rate)
    user_movies: HashMap<UserId, Vec<Movie>>,
    /// Ratings received by each movie, keyed by user id
    movie_ratings: HashMap<MovieId, BTreeMap<UserId, Rating>>,
}

impl RatingStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `user` rated `movie` as `rating`.
    ///
    /// Registers the user and movie on first sight, appends the movie to the
    /// user's rated sequence, and overwrites any prior rating for the pair.
    /// Total: every in-range rating is accepted, including
    /// [`Rating::NOT_RATED`].
    pub fn add_rating(&mut self, user: &User, movie: &Movie, rating: Rating) {
        if !self.movie_ratings.contains_key(&movie.id) {
            self.movies.push(movie.clone());
        }
        if !self.user_movies.contains_key(&user.id) {
            self.users.push(user.clone());
        }

        // Appends unconditionally: a re-rated movie shows up twice in the
        // user's sequence while the per-movie map keeps only the latest value.
        self.user_movies
            .entry(user.id)
            .or_default()
            .push(movie.clone());
        self.movie_ratings
            .entry(movie.id)
            .or_default()
            .insert(user.id, rating);
    }

    /// Arithmetic mean of all rating values recorded for `movie`.
    ///
    /// Returns 0 (the sentinel value) for a movie nobody has rated; never
    /// fails.
    pub fn get_average_rating(&self, movie: &Movie) -> f32 {
        match self.movie_ratings.get(&movie.id) {
            Some(ratings) if !ratings.is_empty() => {
                let total: u32 = ratings.values().map(|r| u32::from(r.value())).sum();
                total as f32 / ratings.len() as f32
            }
            _ => f32::from(Rating::NOT_RATED.value()),
        }
    }

    /// All known users, insertion order
    pub fn get_users(&self) -> &[User] {
        &self.users
    }

    /// All known movies, insertion order
    pub fn get_movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Movies rated by `user` in rating order, duplicates included.
    ///
    /// Returns an empty slice for an unknown user.
    pub fn get_user_movies(&self, user: &User) -> &[Movie] {
        self.user_movies
            .get(&user.id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Ratings received by `movie`, keyed by user id.
    ///
    /// Returns an empty map for an unknown movie.
    pub fn get_movie_ratings(&self, movie: &Movie) -> &BTreeMap<UserId, Rating> {
        self.movie_ratings.get(&movie.id).unwrap_or(&NO_RATINGS)
    }

    /// `reviewer`'s rating of `movie`, or the sentinel if they never rated it
    pub fn get_rating(&self, movie: &Movie, reviewer: &User) -> Rating {
        self.get_movie_ratings(movie)
            .get(&reviewer.id)
            .copied()
            .unwrap_or(Rating::NOT_RATED)
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize, usize) {
        let total_ratings = self.movie_ratings.values().map(|m| m.len()).sum();
        (self.users.len(), self.movies.len(), total_ratings)
    }
}
