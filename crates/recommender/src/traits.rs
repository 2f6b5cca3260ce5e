//! Core trait for recommendation strategies.
//!
//! Only one strategy exists today ([`crate::SimilarityRecommender`]), but
//! callers hold a `dyn Recommender` so alternative strategies can be swapped
//! in without touching call sites.

use rating_store::User;

/// A strategy that can suggest a movie for a user.
///
/// ## Design Note
/// - Absence of a recommendation is a normal result (`None`), never an error
/// - Implementations are pure queries over the rating store; no side effects
/// - `Send + Sync` so a strategy can be shared behind an `Arc`
pub trait Recommender: Send + Sync {
    /// Returns the name of this strategy (for logging/debugging)
    fn name(&self) -> &str;

    /// Suggest at most one movie title for `user`.
    fn recommend_movie(&self, user: &User) -> Option<String>;
}
