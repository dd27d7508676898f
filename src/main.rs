mod app;

use app::App;
use bashkir_review::config::{DEFAULT_DB_PATH, SessionLimits};
use bashkir_review::{FixedClock, SqliteStore, SystemClock};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bashkir-review")]
#[command(about = "SM-2 spaced repetition reviews for Bashkir vocabulary")]
struct Args {
    /// SQLite database holding review state
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Pretend the current time is this RFC 3339 timestamp
    #[arg(long)]
    as_of: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Introduce a word
    Add {
        id: String,
        bashkir: String,
        english: String,
    },
    /// Remove a word and its review history
    Remove { id: String },
    /// Record a recall rating (0-5) for a word
    Review { id: String, quality: i64 },
    /// List words due for review
    Due {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show learner statistics
    Stats,
    /// Show the learning status of a word
    Status { id: String },
    /// Run an interactive review session
    Session {
        /// JSON curriculum: [{ "id"?, "bashkir", "english" }]
        #[arg(short, long)]
        words: Option<PathBuf>,
        /// New words to introduce
        #[arg(long = "new")]
        new_words: Option<usize>,
        /// Due words to review
        #[arg(long = "reviews")]
        review_words: Option<usize>,
    },
    /// Export all words with their review state to JSON
    Export { path: PathBuf },
    /// Import words previously exported to JSON
    Import { path: PathBuf },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let store = SqliteStore::open(&args.db)?;
    log::debug!("Opened review store at {}", args.db.display());

    let limits = SessionLimits::default();
    match args.as_of {
        Some(as_of) => App::new(store, FixedClock::new(as_of), limits).run(args.command),
        None => App::new(store, SystemClock, limits).run(args.command),
    }
}
