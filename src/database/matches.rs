use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use tracing::{debug, info, instrument, warn};

use crate::error::AppError;
use crate::goal_events::{GoalRecord, extract_goals};

const MATCH_COLUMNS: &str =
    "match_api_id, season, league_id, date, home_team_api_id, away_team_api_id, goal";

/// One row of the `Match` table, limited to what goal extraction needs.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct MatchRow {
    pub match_api_id: i64,
    pub season: String,
    pub league_id: i64,
    pub date: String,
    pub home_team_api_id: Option<i64>,
    pub away_team_api_id: Option<i64>,
    /// Goal event XML, `NULL` for matches without event data
    pub goal: Option<String>,
}

impl MatchRow {
    /// Extracts the goals of this match from its `goal` XML.
    pub fn goals(&self) -> Result<Vec<GoalRecord>, AppError> {
        let home = self.home_team_api_id.map(|id| id.to_string());
        let away = self.away_team_api_id.map(|id| id.to_string());
        extract_goals(self.goal.as_deref(), home.as_deref(), away.as_deref())
    }

    /// Match date without the time part, formatted as `dd.mm.yyyy`.
    /// Falls back to the raw column value when it is not a timestamp.
    pub fn display_date(&self) -> String {
        chrono::NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%d %H:%M:%S")
            .map(|date| date.format("%d.%m.%Y").to_string())
            .or_else(|_| {
                chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
                    .map(|date| date.format("%d.%m.%Y").to_string())
            })
            .unwrap_or_else(|_| self.date.clone())
    }
}

/// Read access to match rows.
#[derive(Debug, Clone)]
pub struct MatchRepository {
    pool: SqlitePool,
}

impl MatchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database at `path` and wraps it in a repository
    pub async fn connect(path: &str) -> Result<Self, AppError> {
        Ok(Self::new(super::connect(path).await?))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Loads a single match by its `match_api_id`.
    ///
    /// # Errors
    /// * `AppError::MatchNotFound` - No row with that id
    /// * `AppError::Database` - Query failed
    #[instrument(skip(self))]
    pub async fn fetch_match(&self, match_api_id: i64) -> Result<MatchRow, AppError> {
        let sql = format!("SELECT {MATCH_COLUMNS} FROM \"Match\" WHERE match_api_id = ?");
        sqlx::query_as::<_, MatchRow>(&sql)
            .bind(match_api_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::match_not_found(match_api_id))
    }

    /// Loads all matches of a season, optionally limited to one league,
    /// ordered by date and id.
    #[instrument(skip(self))]
    pub async fn fetch_matches(
        &self,
        season: &str,
        league_id: Option<i64>,
    ) -> Result<Vec<MatchRow>, AppError> {
        let rows = match league_id {
            Some(league_id) => {
                let sql = format!(
                    "SELECT {MATCH_COLUMNS} FROM \"Match\" WHERE season = ? AND league_id = ? \
                     ORDER BY date, match_api_id"
                );
                sqlx::query_as::<_, MatchRow>(&sql)
                    .bind(season)
                    .bind(league_id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {MATCH_COLUMNS} FROM \"Match\" WHERE season = ? ORDER BY date, match_api_id"
                );
                sqlx::query_as::<_, MatchRow>(&sql)
                    .bind(season)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        debug!("Fetched {} matches for season {season}", rows.len());
        Ok(rows)
    }

    /// Goals of every match in a season. A malformed goal XML in any match
    /// fails the whole call.
    pub async fn goals_for_season(
        &self,
        season: &str,
        league_id: Option<i64>,
    ) -> Result<Vec<GoalRecord>, AppError> {
        let matches = self.fetch_matches(season, league_id).await?;
        if matches.is_empty() {
            warn!("No matches found for season {season} (league {league_id:?})");
        }

        let mut goals = Vec::new();
        let mut without_events = 0;
        for row in &matches {
            if row.goal.is_none() {
                without_events += 1;
            }
            let match_goals = row.goals().inspect_err(|e| {
                warn!("Goal XML of match {} is malformed: {e}", row.match_api_id);
            })?;
            goals.extend(match_goals);
        }

        info!(
            "Season {season}: {} goals from {} matches ({} without goal data)",
            goals.len(),
            matches.len(),
            without_events
        );
        Ok(goals)
    }
}
