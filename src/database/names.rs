//! Player and team name enrichment.
//!
//! Rows carrying a `player_id` or `team_id` get one extra `name` column. Only
//! the distinct ids present in the input are looked up, and the result is
//! left-joined back: every input row comes out exactly once, in the same
//! order, with `None` where the database has no name.

use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, instrument};

use super::name_cache::NameCache;
use crate::constants::database::{MAX_IDS_PER_QUERY, NAME_CACHE_CAPACITY};
use crate::error::AppError;
use crate::goal_events::GoalRecord;
use crate::stats::Tally;

/// Which lookup table resolves the ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameLookup {
    /// `Player(player_api_id, player_name)`
    Player,
    /// `Team(team_api_id, team_long_name)`
    Team,
}

impl NameLookup {
    /// Column the ids are read from on the input rows
    pub fn input_column(&self) -> &'static str {
        match self {
            NameLookup::Player => "player_id",
            NameLookup::Team => "team_id",
        }
    }

    fn table(&self) -> &'static str {
        match self {
            NameLookup::Player => "Player",
            NameLookup::Team => "Team",
        }
    }

    fn id_column(&self) -> &'static str {
        match self {
            NameLookup::Player => "player_api_id",
            NameLookup::Team => "team_api_id",
        }
    }

    /// Column holding the human readable name in the lookup table
    pub fn name_column(&self) -> &'static str {
        match self {
            NameLookup::Player => "player_name",
            NameLookup::Team => "team_long_name",
        }
    }

    fn select_sql(&self, id_count: usize) -> String {
        let placeholders = vec!["?"; id_count].join(", ");
        format!(
            "SELECT {id}, {name} FROM {table} WHERE {id} IN ({placeholders})",
            id = self.id_column(),
            name = self.name_column(),
            table = self.table(),
        )
    }
}

/// Rows that expose a player and/or team id column.
pub trait IdentifierColumns {
    /// Raw id for the given lookup, `None` when the row has no value
    fn identifier(&self, lookup: NameLookup) -> Option<&str>;
}

impl IdentifierColumns for GoalRecord {
    fn identifier(&self, lookup: NameLookup) -> Option<&str> {
        match lookup {
            NameLookup::Player => self.player_id(),
            NameLookup::Team => self.team_id.as_deref(),
        }
    }
}

/// The tally key is whichever id the tally was counted by (player ids for
/// `top_scorers`, team ids for `goals_per_team`), so it is returned for
/// either lookup.
impl IdentifierColumns for Tally<String> {
    fn identifier(&self, _lookup: NameLookup) -> Option<&str> {
        Some(&self.key)
    }
}

impl<T: IdentifierColumns> IdentifierColumns for Named<T> {
    fn identifier(&self, lookup: NameLookup) -> Option<&str> {
        self.row.identifier(lookup)
    }
}

/// An input row with the looked up name appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Named<T> {
    #[serde(flatten)]
    pub row: T,
    pub name: Option<String>,
}

/// Coerces a raw id to the integer type of the lookup tables.
///
/// Surrounding whitespace is ignored. A missing or non-integer id is an error.
pub fn parse_identifier(lookup: NameLookup, raw: Option<&str>) -> Result<i64, AppError> {
    let raw = raw.ok_or_else(|| AppError::invalid_identifier(lookup.input_column(), "<missing>"))?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid_identifier(lookup.input_column(), raw))
}

/// Resolves ids to names against the database, with an LRU cache in front.
#[derive(Debug)]
pub struct NameDirectory {
    pool: SqlitePool,
    cache: NameCache,
}

impl NameDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_capacity(pool, NAME_CACHE_CAPACITY)
    }

    pub fn with_capacity(pool: SqlitePool, capacity: usize) -> Self {
        Self {
            pool,
            cache: NameCache::new(capacity),
        }
    }

    /// Names for the given ids. Ids without a row (or with a `NULL` name) are
    /// absent from the map. Duplicate ids in the lookup table resolve to the
    /// first row returned.
    #[instrument(skip(self, ids), fields(id_count = ids.len()))]
    pub async fn names(
        &self,
        lookup: NameLookup,
        ids: &[i64],
    ) -> Result<HashMap<i64, String>, AppError> {
        let distinct: Vec<i64> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let (mut found, missing) = self.cache.partition(lookup, &distinct).await;
        if missing.is_empty() {
            return Ok(found);
        }

        let mut fetched = HashMap::new();
        for chunk in missing.chunks(MAX_IDS_PER_QUERY) {
            let sql = lookup.select_sql(chunk.len());
            let mut query = sqlx::query_as::<_, (i64, Option<String>)>(&sql);
            for id in chunk {
                query = query.bind(*id);
            }
            for (id, name) in query.fetch_all(&self.pool).await? {
                if let Some(name) = name {
                    fetched.entry(id).or_insert(name);
                }
            }
        }

        debug!(
            "Resolved {} of {} uncached {:?} ids from the database",
            fetched.len(),
            missing.len(),
            lookup
        );
        self.cache.insert_all(lookup, &fetched).await;
        found.extend(fetched);
        Ok(found)
    }

    /// Appends a name column to `rows` using the ids in `lookup.input_column()`.
    ///
    /// # Returns
    /// * `Ok(Vec<Named<T>>)` - Same length and order as `rows`
    /// * `Err(AppError::InvalidIdentifier)` - Some id is missing or not an integer
    /// * `Err(AppError::Database)` - The lookup query failed
    pub async fn append_names<T: IdentifierColumns>(
        &self,
        lookup: NameLookup,
        rows: Vec<T>,
    ) -> Result<Vec<Named<T>>, AppError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids = rows
            .iter()
            .map(|row| parse_identifier(lookup, row.identifier(lookup)))
            .collect::<Result<Vec<_>, _>>()?;
        let names = self.names(lookup, &ids).await?;

        Ok(rows
            .into_iter()
            .zip(ids)
            .map(|(row, id)| Named {
                row,
                name: names.get(&id).cloned(),
            })
            .collect())
    }

    /// Appends `player_name` from `Player` based on `player_id`
    pub async fn append_player_names<T: IdentifierColumns>(
        &self,
        rows: Vec<T>,
    ) -> Result<Vec<Named<T>>, AppError> {
        self.append_names(NameLookup::Player, rows).await
    }

    /// Appends `team_long_name` from `Team` based on `team_id`
    pub async fn append_team_names<T: IdentifierColumns>(
        &self,
        rows: Vec<T>,
    ) -> Result<Vec<Named<T>>, AppError> {
        self.append_names(NameLookup::Team, rows).await
    }

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }
}
