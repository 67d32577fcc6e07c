use tracing::debug;

use super::models::{GoalRecord, GoalType, Scorer};
use super::xml_tree::Element;
use crate::constants::xml;
use crate::error::AppError;

/// Extracts goal records from a match's goal XML.
///
/// Returns an empty list when the document or either team id is missing,
/// which is the normal case for matches without event data.
///
/// # Arguments
/// * `document` - Raw goal XML, `None` when the match has no goal data
/// * `home_team_id` - Home team identifier, compared as a string with `team`
/// * `away_team_id` - Away team identifier, compared as a string with `team`
///
/// # Returns
/// * `Ok(Vec<GoalRecord>)` - Goals in document order (not necessarily chronological)
/// * `Err(AppError::XmlParse)` - The document is not well-formed XML
///
/// # Example
/// ```
/// use goalscope::goal_events::{extract_goals, GoalType};
///
/// let xml = "<goal><value><stats><owngoals>1</owngoals></stats>\
///            <team>100</team><elapsed>12</elapsed></value></goal>";
/// let goals = extract_goals(Some(xml), Some("100"), Some("200")).unwrap();
///
/// assert_eq!(goals[0].goal_type, GoalType::OwnGoal);
/// assert_eq!(goals[0].team_id.as_deref(), Some("200"));
/// assert_eq!(goals[0].player_id(), Some("-7"));
/// ```
pub fn extract_goals(
    document: Option<&str>,
    home_team_id: Option<&str>,
    away_team_id: Option<&str>,
) -> Result<Vec<GoalRecord>, AppError> {
    let (Some(document), Some(home_team_id), Some(away_team_id)) =
        (document, home_team_id, away_team_id)
    else {
        debug!("Goal XML or match teams missing, no goals extracted");
        return Ok(Vec::new());
    };

    let root = Element::parse(document)?;
    let goals: Vec<GoalRecord> = root
        .children_named(xml::VALUE)
        .filter_map(|value| goal_from_value(value, home_team_id, away_team_id))
        .collect();

    debug!(
        "Extracted {} goals from {} event entries",
        goals.len(),
        root.children_named(xml::VALUE).count()
    );
    Ok(goals)
}

/// Decides the goal type from which stat sub-node is present.
/// Presence counts, content does not. When several are present the order is
/// goals, then penalties, then own goals; that precedence has not been
/// checked against real data.
fn classify(value: &Element) -> Option<GoalType> {
    if value.find(xml::GOALS_PATH).is_some() {
        Some(GoalType::Shot)
    } else if value.find(xml::PENALTIES_PATH).is_some() {
        Some(GoalType::Penalty)
    } else if value.find(xml::OWN_GOALS_PATH).is_some() {
        Some(GoalType::OwnGoal)
    } else {
        None
    }
}

fn goal_from_value(value: &Element, home_team_id: &str, away_team_id: &str) -> Option<GoalRecord> {
    let Some(goal_type) = classify(value) else {
        debug!("Skipping event entry without goal stats");
        return None;
    };

    let text = |path: &str| value.find_text(path).map(str::to_string);
    let stated_team = text(xml::TEAM);

    let (team_id, scorer) = match goal_type {
        GoalType::OwnGoal => {
            // Own goals are logged against the defending team; credit the opponent
            let credited = if stated_team.as_deref() == Some(home_team_id) {
                away_team_id
            } else {
                home_team_id
            };
            (Some(credited.to_string()), Scorer::OwnGoal)
        }
        GoalType::Shot | GoalType::Penalty => (stated_team, Scorer::Player(text(xml::PLAYER1))),
    };

    let record = GoalRecord {
        team_id,
        scorer,
        assist_id: text(xml::PLAYER2),
        goal_type,
        subtype: text(xml::SUBTYPE),
        minute: text(xml::ELAPSED),
    };
    debug!(
        "Goal: type={}, team={:?}, player={:?}, minute={:?}",
        record.goal_type,
        record.team_id,
        record.player_id(),
        record.minute
    );
    Some(record)
}
