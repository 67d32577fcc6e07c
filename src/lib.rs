//! Goal events from the European Soccer Database
//!
//! This library turns the `goal` XML stored with each match into normalized
//! goal records, resolves player and team names from the same SQLite
//! database, and renders simple terminal charts of the results.
//!
//! # Examples
//!
//! ```rust,no_run
//! use goalscope::charts::{BarChart, Chart};
//! use goalscope::database::{MatchRepository, NameDirectory};
//! use goalscope::error::AppError;
//! use goalscope::stats::count_by_type;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let repository = MatchRepository::connect("database.sqlite").await?;
//!     let directory = NameDirectory::new(repository.pool().clone());
//!
//!     // Goals of one match, with scorer names appended
//!     let goals = repository.fetch_match(489042).await?.goals()?;
//!     for goal in directory.append_player_names(goals).await? {
//!         println!("{:?} {:?}", goal.row.minute, goal.name);
//!     }
//!
//!     // Goal types over a whole season
//!     let season = repository.goals_for_season("2015/2016", None).await?;
//!     let rows = count_by_type(&season)
//!         .into_iter()
//!         .map(|t| (t.key.to_string(), t.count as f64))
//!         .collect();
//!     println!("{}", BarChart::new(rows).with_percent(true).render(false));
//!
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod database;
pub mod display;
pub mod error;
pub mod goal_events;
pub mod logging;
pub mod stats;

// Re-export commonly used types for convenience
pub use config::Config;
pub use database::{MatchRepository, NameDirectory, NameLookup, Named};
pub use error::AppError;
pub use goal_events::{GoalRecord, GoalType, Scorer, extract_goals};
pub use stats::Tally;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
