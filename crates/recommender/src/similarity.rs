//! Similarity-based recommendation strategy.
//!
//! "The reviewer whose ratings look most like yours probably knows what you
//! should watch next."
//!
//! ## Algorithm
//! 1. A user with no rating history gets the cold-start pick: the catalog
//!    movie with the highest average rating (first max wins on ties).
//! 2. Otherwise, score every other reviewer by dissimilarity: the sum of
//!    absolute rating differences over movies both have rated, or infinity
//!    when they share none. The strictly lowest score wins, first found on
//!    ties, walking reviewers in registration order.
//! 3. Each time a new best reviewer is found, pick their highest-rated movie
//!    the user hasn't seen as the running candidate (which may be nothing).
//! 4. Return the final candidate's title.
//!
//! A reviewer with no overlap never wins, even as a fallback, so a user whose
//! history overlaps nobody's gets no recommendation.

use crate::traits::Recommender;
use rating_store::{Movie, MovieId, Rating, RatingStore, User};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Recommends via nearest-reviewer collaborative filtering
pub struct SimilarityRecommender {
    /// Shared reference to the rating store (read-only, so no locking needed)
    ratings: Arc<RatingStore>,
}

impl SimilarityRecommender {
    pub fn new(ratings: Arc<RatingStore>) -> Self {
        Self { ratings }
    }

    /// Cold-start pick: highest average rating across the whole catalog.
    ///
    /// First-encountered wins ties, so catalog insertion order is load-bearing
    /// here. Returns `None` only for an empty catalog.
    fn recommend_for_new_user(&self) -> Option<String> {
        let mut best: Option<&Movie> = None;
        let mut best_average = 0.0_f32;

        for movie in self.ratings.get_movies() {
            let average = self.ratings.get_average_rating(movie);
            if best.is_none() || average > best_average {
                best_average = average;
                best = Some(movie);
            }
        }

        best.map(|movie| movie.title.clone())
    }

    fn recommend_for_existing_user(&self, user: &User) -> Option<String> {
        let watched = movie_id_set(self.ratings.get_user_movies(user));

        let mut best_movie: Option<Movie> = None;
        let mut lowest_score = f64::INFINITY;

        for reviewer in self.ratings.get_users() {
            if reviewer.id == user.id {
                continue;
            }

            let score = self.dissimilarity(user, &watched, reviewer);
            // Strict < keeps the first-found reviewer on ties and never
            // selects an infinite (no-overlap) score. The candidate is
            // recomputed on every new best reviewer, even if that leaves it
            // empty.
            if score < lowest_score {
                lowest_score = score;
                best_movie = self.find_unwatched_movie(&watched, reviewer);
                debug!(reviewer_id = reviewer.id, score, "new most similar reviewer");
            }
        }

        best_movie.map(|movie| movie.title)
    }

    /// Sum of absolute rating differences over movies both users rated.
    ///
    /// Duplicate entries in the rated sequences count once (set semantics).
    /// Infinite when the two users share no movie.
    fn dissimilarity(
        &self,
        user: &User,
        user_movies: &HashSet<MovieId>,
        reviewer: &User,
    ) -> f64 {
        let mut counted: HashSet<MovieId> = HashSet::new();
        let mut total: u32 = 0;

        for movie in self.ratings.get_user_movies(reviewer) {
            if !user_movies.contains(&movie.id) || !counted.insert(movie.id) {
                continue;
            }
            let mine = self.ratings.get_rating(movie, user);
            let theirs = self.ratings.get_rating(movie, reviewer);
            total += mine.distance(theirs);
        }

        if counted.is_empty() {
            f64::INFINITY
        } else {
            f64::from(total)
        }
    }

    /// The reviewer's highest-rated movie that the user has not rated.
    ///
    /// Ties go to the first movie in the reviewer's rating order; a reviewer
    /// rating of 0 never wins because the running best starts at the sentinel
    /// and the comparison is strict.
    fn find_unwatched_movie(
        &self,
        user_movies: &HashSet<MovieId>,
        reviewer: &User,
    ) -> Option<Movie> {
        let mut best: Option<&Movie> = None;
        let mut best_rating = Rating::NOT_RATED;

        for movie in self.ratings.get_user_movies(reviewer) {
            if user_movies.contains(&movie.id) {
                continue;
            }
            let rating = self.ratings.get_rating(movie, reviewer);
            if rating > best_rating {
                best_rating = rating;
                best = Some(movie);
            }
        }

        best.cloned()
    }
}

impl Recommender for SimilarityRecommender {
    fn name(&self) -> &str {
        "SimilarityRecommender"
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    fn recommend_movie(&self, user: &User) -> Option<String> {
        if self.ratings.get_user_movies(user).is_empty() {
            debug!("no rating history, taking the cold-start path");
            return self.recommend_for_new_user();
        }
        self.recommend_for_existing_user(user)
    }
}

fn movie_id_set(movies: &[Movie]) -> HashSet<MovieId> {
    movies.iter().map(|movie| movie.id).collect()
}
