//! Integration tests for the recommender.
//!
//! These drive the full flow a caller would use: build a store, hand it to a
//! strategy behind the trait, and ask for recommendations.

use rating_store::{Movie, Rating, RatingStore, User};
use recommender::{Recommender, SimilarityRecommender};
use std::sync::Arc;

fn create_test_setup() -> (Arc<RatingStore>, Vec<User>, Vec<Movie>) {
    let users = vec![
        User::new(1, "Alice"),
        User::new(2, "Bob"),
        User::new(3, "Charlie"),
        User::new(4, "Dana"),
    ];
    let movies = vec![
        Movie::new(1, "Inception"),
        Movie::new(2, "Titanic"),
        Movie::new(3, "The Matrix"),
        Movie::new(4, "Amelie"),
        Movie::new(5, "Alien"),
    ];

    let mut store = RatingStore::new();
    // Alice: loves sci-fi, lukewarm on romance
    store.add_rating(&users[0], &movies[0], Rating::FIVE);
    store.add_rating(&users[0], &movies[1], Rating::TWO);
    // Bob: close to Alice on Titanic, adds The Matrix
    store.add_rating(&users[1], &movies[1], Rating::THREE);
    store.add_rating(&users[1], &movies[2], Rating::FOUR);
    // Charlie: far from Alice on Inception, adds Amelie and Alien
    store.add_rating(&users[2], &movies[0], Rating::ONE);
    store.add_rating(&users[2], &movies[3], Rating::FIVE);
    store.add_rating(&users[2], &movies[4], Rating::FOUR);

    (Arc::new(store), users, movies)
}

#[test]
fn test_recommendation_through_trait_object() {
    let (store, users, _) = create_test_setup();
    let recommender: Box<dyn Recommender> = Box::new(SimilarityRecommender::new(store));

    // Bob (Titanic distance 1) is closer to Alice than Charlie (Inception
    // distance 4), so Alice gets Bob's best unwatched movie
    assert_eq!(
        recommender.recommend_movie(&users[0]).as_deref(),
        Some("The Matrix")
    );
}

#[test]
fn test_cold_start_through_trait_object() {
    let (store, users, _) = create_test_setup();
    let recommender: Box<dyn Recommender> = Box::new(SimilarityRecommender::new(store));

    // Dana rated nothing; the catalog's best average is Amelie at 5.0
    // (Inception averages (5+1)/2 = 3.0)
    assert_eq!(
        recommender.recommend_movie(&users[3]).as_deref(),
        Some("Amelie")
    );
}

#[test]
fn test_store_queries_unchanged_by_recommendation() {
    let (store, users, movies) = create_test_setup();
    let counts_before = store.counts();

    let recommender = SimilarityRecommender::new(Arc::clone(&store));
    let _ = recommender.recommend_movie(&users[0]);
    let _ = recommender.recommend_movie(&users[3]);

    // Recommendation is a pure query
    assert_eq!(store.counts(), counts_before);
    assert_eq!(store.get_user_movies(&users[0]).len(), 2);
    assert!((store.get_average_rating(&movies[3]) - 5.0).abs() < f32::EPSILON);
}
