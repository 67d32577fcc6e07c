//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and fixed identifiers so the
//! extractor, the database layer and the charts agree on them.

/// Player identifier written in place of a scorer for own goals.
/// Only used at the tabular boundary (JSON output, name enrichment input);
/// inside the crate own goals are `Scorer::OwnGoal`.
pub const OWN_GOAL_PLAYER_ID: &str = "-7";

/// Default SQLite database file, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "database.sqlite";

/// Default log file name
pub const LOG_FILE_NAME: &str = "goalscope.log";

/// Goal XML element names
pub mod xml {
    /// Event entries directly under the document root
    pub const VALUE: &str = "value";

    pub const GOALS_PATH: &str = "stats/goals";
    pub const PENALTIES_PATH: &str = "stats/penalties";
    pub const OWN_GOALS_PATH: &str = "stats/owngoals";

    pub const TEAM: &str = "team";
    pub const PLAYER1: &str = "player1";
    pub const PLAYER2: &str = "player2";
    pub const ELAPSED: &str = "elapsed";
    pub const SUBTYPE: &str = "subtype";
}

/// Database connection and lookup limits
pub mod database {
    /// Connections kept in the read-only SQLite pool
    pub const MAX_CONNECTIONS: u32 = 4;

    /// Upper bound of bound parameters per `IN (...)` lookup.
    /// Stays below SQLite's historical 999 variable limit.
    pub const MAX_IDS_PER_QUERY: usize = 500;

    /// Entries kept in each id -> name LRU cache
    pub const NAME_CACHE_CAPACITY: usize = 4096;
}

/// Chart layout constants
pub mod chart {
    /// Default width of the longest bar in characters
    pub const DEFAULT_WIDTH: usize = 40;

    /// Rows used by the tallest vertical bar
    pub const DEFAULT_HEIGHT: usize = 10;

    /// Accepted range for the configured chart width
    pub const MIN_WIDTH: usize = 10;
    pub const MAX_WIDTH: usize = 200;

    /// Values strictly above this are abbreviated to millions
    pub const MILLIONS_THRESHOLD: f64 = 1e6;

    /// Block used to draw bars
    pub const BAR_CHAR: char = '█';

    /// Default number of rows in top-N charts
    pub const DEFAULT_LIMIT: usize = 10;

    /// Largest goal minute counted in minute histograms; the event data
    /// stays well below this even with extra time
    pub const MAX_GOAL_MINUTE: u32 = 150;
}

/// Environment variable names that override config values
pub mod env_vars {
    pub const DATABASE: &str = "GOALSCOPE_DATABASE";
    pub const LOG_FILE: &str = "GOALSCOPE_LOG_FILE";
    pub const CHART_WIDTH: &str = "GOALSCOPE_CHART_WIDTH";
}
