//! # Recommender Crate
//!
//! Similarity-based movie recommendation over a [`rating_store::RatingStore`].
//!
//! ## Components
//!
//! - **traits**: The [`Recommender`] strategy trait
//! - **similarity**: [`SimilarityRecommender`], the nearest-reviewer strategy
//!
//! ## Example Usage
//!
//! ```
//! use rating_store::{Movie, Rating, RatingStore, User};
//! use recommender::{Recommender, SimilarityRecommender};
//! use std::sync::Arc;
//!
//! let alice = User::new(1, "Alice");
//! let bob = User::new(2, "Bob");
//!
//! let mut store = RatingStore::new();
//! store.add_rating(&alice, &Movie::new(1, "Inception"), Rating::FIVE);
//! store.add_rating(&alice, &Movie::new(2, "Titanic"), Rating::TWO);
//! store.add_rating(&bob, &Movie::new(2, "Titanic"), Rating::THREE);
//! store.add_rating(&bob, &Movie::new(3, "The Matrix"), Rating::FOUR);
//!
//! let recommender = SimilarityRecommender::new(Arc::new(store));
//! assert_eq!(recommender.recommend_movie(&alice).as_deref(), Some("The Matrix"));
//! ```
//!
//! Recommendation is a pure query: no recommendation is `None`, never an
//! error.

// Public modules
pub mod similarity;
pub mod traits;

// Re-export commonly used types
pub use similarity::SimilarityRecommender;
pub use traits::Recommender;

#[cfg(test)]
mod tests {
    use super::*;
    use rating_store::{RatingStore, User};
    use std::sync::Arc;

    #[test]
    fn test_strategy_usable_as_trait_object() {
        let recommender: Box<dyn Recommender> =
            Box::new(SimilarityRecommender::new(Arc::new(RatingStore::new())));

        assert_eq!(recommender.name(), "SimilarityRecommender");
        assert_eq!(recommender.recommend_movie(&User::new(1, "Alice")), None);
    }
}
