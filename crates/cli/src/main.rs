use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rating_store::{load_dataset, Movie, Rating, RatingStore, User, UserId};
use recommender::{Recommender, SimilarityRecommender};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// movie-recs - Similarity-based movie recommendations
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Movie recommendations from user rating similarity", long_about = None)]
struct Cli {
    /// Path to the rating dataset (JSON)
    #[arg(short, long, default_value = "data/ratings.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demo scenario (no dataset needed)
    Demo,

    /// Recommend a movie for a user from the dataset
    Recommend {
        /// User ID to recommend for
        #[arg(long)]
        user_id: UserId,
    },

    /// List catalog movies by average rating
    Top {
        /// Number of movies to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => handle_demo(),
        Commands::Recommend { user_id } => handle_recommend(&cli.data, user_id),
        Commands::Top { limit } => handle_top(&cli.data, limit),
    }
}

/// Handle the 'demo' command: the Alice/Bob/Charlie scenario
fn handle_demo() -> Result<()> {
    let alice = User::new(1, "Alice");
    let bob = User::new(2, "Bob");
    let charlie = User::new(3, "Charlie");

    let inception = Movie::new(1, "Inception");
    let titanic = Movie::new(2, "Titanic");
    let matrix = Movie::new(3, "The Matrix");

    let mut store = RatingStore::new();
    store.add_rating(&alice, &inception, Rating::FIVE);
    store.add_rating(&alice, &titanic, Rating::TWO);
    store.add_rating(&bob, &titanic, Rating::THREE);
    store.add_rating(&bob, &matrix, Rating::FOUR);

    let recommender = SimilarityRecommender::new(Arc::new(store));

    println!("{}", "Demo recommendations:".bold().blue());
    for user in [&alice, &bob, &charlie] {
        print_recommendation(user, recommender.recommend_movie(user));
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(data: &Path, user_id: UserId) -> Result<()> {
    let store = load_store(data)?;

    // Check if user exists
    let user = store
        .get_users()
        .iter()
        .find(|u| u.id == user_id)
        .cloned()
        .ok_or_else(|| anyhow!("User {} not found in dataset", user_id))?;

    let recommender = SimilarityRecommender::new(Arc::clone(&store));
    print_recommendation(&user, recommender.recommend_movie(&user));
    Ok(())
}

/// Handle the 'top' command
fn handle_top(data: &Path, limit: usize) -> Result<()> {
    let store = load_store(data)?;

    let mut ranked: Vec<(&Movie, f32)> = store
        .get_movies()
        .iter()
        .map(|movie| (movie, store.get_average_rating(movie)))
        .collect();
    // Stable sort keeps catalog order on equal averages
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    println!("{}", "Top movies by average rating:".bold().blue());
    for (rank, (movie, average)) in ranked.iter().take(limit).enumerate() {
        println!(
            "{}. {} - avg {:.2} ({} ratings)",
            (rank + 1).to_string().green(),
            movie.title,
            average,
            store.get_movie_ratings(movie).len()
        );
    }
    Ok(())
}

fn load_store(data: &Path) -> Result<Arc<RatingStore>> {
    let store = load_dataset(data)
        .with_context(|| format!("Failed to load dataset from {}", data.display()))?;
    let (users, movies, ratings) = store.counts();
    println!(
        "{} Loaded {} users, {} movies, {} ratings",
        "✓".green(),
        users,
        movies,
        ratings
    );
    Ok(Arc::new(store))
}

fn print_recommendation(user: &User, title: Option<String>) {
    match title {
        Some(title) => println!(
            "{} {} {}",
            format!("{}:", user.name).bold(),
            "watch".green(),
            title
        ),
        None => println!(
            "{} {}",
            format!("{}:", user.name).bold(),
            "no recommendation".yellow()
        ),
    }
}
