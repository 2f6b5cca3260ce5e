//! # Rating Store Crate
//!
//! In-memory storage of (user, movie, rating) facts, plus a JSON dataset
//! loader for the CLI.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (User, Movie, Rating)
//! - **store**: RatingStore, the indexed in-memory database
//! - **loader**: Load a JSON dataset file into a RatingStore
//! - **error**: Error types for dataset loading
//!
//! ## Example Usage
//!
//! ```
//! use rating_store::{Movie, Rating, RatingStore, User};
//!
//! let alice = User::new(1, "Alice");
//! let inception = Movie::new(1, "Inception");
//!
//! let mut store = RatingStore::new();
//! store.add_rating(&alice, &inception, Rating::FIVE);
//!
//! assert_eq!(store.get_average_rating(&inception), 5.0);
//! assert_eq!(store.get_user_movies(&alice).len(), 1);
//! ```
//!
//! Every query is total: unknown users and movies yield empty results or
//! the sentinel average 0, never an error.

// Public modules
pub mod error;
pub mod loader;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{RatingDataError, Result};
pub use loader::{load_dataset, RatingRecord};
pub use store::RatingStore;
pub use types::{Movie, MovieId, Rating, User, UserId};
