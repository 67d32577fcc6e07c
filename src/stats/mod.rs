//! Aggregations over extracted goals.
//!
//! Each function turns a goal list into `(category, count)` rows, which is
//! the shape the chart module draws.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::constants::chart::MAX_GOAL_MINUTE;
use crate::goal_events::{GoalRecord, GoalType};

/// One `(category, count)` row of an aggregate table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tally<K> {
    pub key: K,
    pub count: u64,
}

impl<K> Tally<K> {
    pub fn new(key: K, count: u64) -> Self {
        Self { key, count }
    }
}

/// Goals per type in the fixed order shot, penalty, own goal. Types with no
/// goals are included with a zero count.
pub fn count_by_type(goals: &[GoalRecord]) -> Vec<Tally<GoalType>> {
    GoalType::ALL
        .iter()
        .map(|goal_type| {
            let count = goals.iter().filter(|g| g.goal_type == *goal_type).count();
            Tally::new(*goal_type, count as u64)
        })
        .collect()
}

/// Scorers with the most goals. Own goals and goals without a scorer do not
/// count. Ties are broken by ascending player id.
pub fn top_scorers(goals: &[GoalRecord], limit: usize) -> Vec<Tally<String>> {
    let mut tallies = count_keys(goals.iter().filter_map(GoalRecord::scorer_id));
    tallies.truncate(limit);
    tallies
}

/// Goals credited to each team, own goals included for the team that
/// benefited. Sorted by count, then team id.
pub fn goals_per_team(goals: &[GoalRecord]) -> Vec<Tally<String>> {
    count_keys(goals.iter().filter_map(|g| g.team_id.as_deref()))
}

/// Goal minutes as integers. Absent, non-numeric and implausibly large
/// `minute` values are skipped.
pub fn goal_minutes(goals: &[GoalRecord]) -> Vec<u32> {
    goals
        .iter()
        .filter_map(|goal| {
            let raw = goal.minute.as_deref()?;
            match raw.trim().parse::<u32>() {
                Ok(minute) if minute <= MAX_GOAL_MINUTE => Some(minute),
                Ok(minute) => {
                    debug!("Skipping goal with out of range minute {minute}");
                    None
                }
                Err(_) => {
                    debug!("Skipping goal with unparsable minute {raw:?}");
                    None
                }
            }
        })
        .collect()
}

fn count_keys<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<Tally<String>> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }

    let mut tallies: Vec<Tally<String>> = counts
        .into_iter()
        .map(|(key, count)| Tally::new(key.to_string(), count))
        .collect();
    tallies.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| compare_ids(&a.key, &b.key))
    });
    tallies
}

// Numeric ids first, by value ("9" before "10"), then the rest as text
fn compare_ids(a: &str, b: &str) -> std::cmp::Ordering {
    id_sort_key(a).cmp(&id_sort_key(b))
}

fn id_sort_key(id: &str) -> (bool, i64, &str) {
    match id.parse::<i64>() {
        Ok(number) => (false, number, id),
        Err(_) => (true, 0, id),
    }
}
