//! Plain-text rendering of goal lists for the `--match` and `--xml-file` views.

use serde::Serialize;

use crate::charts::colors::{category_fg, label_fg, muted_fg, paint, title_fg};
use crate::goal_events::{GoalRecord, GoalType};

const TEAM_NAME_WIDTH: usize = 24;
const SCORER_WIDTH: usize = 26;

/// A goal with the names resolved for its scorer and credited team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalLine {
    #[serde(flatten)]
    pub goal: GoalRecord,
    pub player_name: Option<String>,
    pub team_name: Option<String>,
}

impl GoalLine {
    pub fn unnamed(goal: GoalRecord) -> Self {
        Self {
            goal,
            player_name: None,
            team_name: None,
        }
    }

    /// Scorer column text: the name when known, else the raw id
    fn scorer_text(&self) -> String {
        if self.goal.is_own_goal() {
            return "(own goal)".to_string();
        }
        self.player_name
            .clone()
            .or_else(|| self.goal.scorer_id().map(str::to_string))
            .unwrap_or_else(|| "-".to_string())
    }

    fn team_text(&self) -> String {
        self.team_name
            .clone()
            .or_else(|| self.goal.team_id.clone())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Goals credited to the home and away team
pub fn final_score(goals: &[GoalRecord], home_team_id: &str, away_team_id: &str) -> (usize, usize) {
    goals.iter().fold((0, 0), |(home, away), goal| match goal.team_id.as_deref() {
        Some(team) if team == home_team_id => (home + 1, away),
        Some(team) if team == away_team_id => (home, away + 1),
        _ => (home, away),
    })
}

/// `Home Team              - Away Team                2-1` plus the match date
pub fn format_match_header(
    home_team: &str,
    away_team: &str,
    score: (usize, usize),
    date: &str,
    plain: bool,
) -> String {
    let teams = format!(
        "{:<width$} - {:<width$}",
        truncate(home_team, TEAM_NAME_WIDTH),
        truncate(away_team, TEAM_NAME_WIDTH),
        width = TEAM_NAME_WIDTH
    );
    format!(
        "{} {}\n{}",
        paint(&teams, label_fg(), plain),
        paint(&format!("{}-{}", score.0, score.1), title_fg(), plain),
        paint(date, muted_fg(), plain)
    )
}

/// One line per goal: minute, type, scorer, team. Empty input gives a notice.
pub fn format_goal_lines(lines: &[GoalLine], plain: bool) -> String {
    if lines.is_empty() {
        return paint("No goals recorded", muted_fg(), plain);
    }

    lines
        .iter()
        .map(|line| {
            let minute = line
                .goal
                .minute
                .as_deref()
                .map(|m| format!("{:>3}'", m.trim()))
                .unwrap_or_else(|| "   -".to_string());
            let goal_type = format!("{:<8}", type_label(line.goal.goal_type));
            let scorer = format!(
                "{:<width$}",
                truncate(&line.scorer_text(), SCORER_WIDTH),
                width = SCORER_WIDTH
            );
            let scorer_color = if line.goal.is_own_goal() {
                muted_fg()
            } else {
                label_fg()
            };

            format!(
                "{} {} {} {}",
                paint(&minute, title_fg(), plain),
                paint(&goal_type, category_fg(), plain),
                paint(&scorer, scorer_color, plain),
                line.team_text()
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn type_label(goal_type: GoalType) -> &'static str {
    match goal_type {
        GoalType::Shot => "goal",
        GoalType::Penalty => "penalty",
        GoalType::OwnGoal => "own goal",
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        s.chars().take(max_chars).collect()
    }
}
