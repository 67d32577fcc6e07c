use goalscope::constants::OWN_GOAL_PLAYER_ID;
use goalscope::error::AppError;
use goalscope::goal_events::{GoalType, Scorer, extract_goals};

const HOME: &str = "10260";
const AWAY: &str = "10261";

/// Goal XML in the layout stored in the `Match.goal` column
const MATCH_GOAL_XML: &str = r#"<goal>
  <value>
    <comment>n</comment>
    <stats><goals>1</goals><shoton>1</shoton></stats>
    <event_incident_typefk>406</event_incident_typefk>
    <elapsed>22</elapsed>
    <player2>38807</player2>
    <subtype>header</subtype>
    <player1>37799</player1>
    <sortorder>5</sortorder>
    <team>10261</team>
    <id>378998</id>
    <n>295</n>
    <type>goal</type>
    <goal_type>n</goal_type>
  </value>
  <value>
    <comment>o</comment>
    <stats><owngoals>1</owngoals></stats>
    <elapsed>39</elapsed>
    <player1>24148</player1>
    <team>10261</team>
    <type>goal</type>
  </value>
  <value>
    <comment>p</comment>
    <stats><penalties>1</penalties></stats>
    <elapsed>78</elapsed>
    <player1>30829</player1>
    <team>10260</team>
    <type>goal</type>
  </value>
  <value>
    <stats><ycards>1</ycards></stats>
    <elapsed>80</elapsed>
    <player1>30829</player1>
    <team>10260</team>
    <type>card</type>
  </value>
</goal>"#;

/// A regular goal keeps its team and scorer
#[test]
fn test_shot_keeps_team_and_scorer() {
    let xml = "<goal><value><stats><goals>1</goals></stats><team>100</team>\
               <player1>55</player1><elapsed>23</elapsed></value></goal>";
    let goals = extract_goals(Some(xml), Some("100"), Some("200")).unwrap();

    assert_eq!(goals.len(), 1);
    let goal = &goals[0];
    assert_eq!(goal.team_id.as_deref(), Some("100"));
    assert_eq!(goal.player_id(), Some("55"));
    assert_eq!(goal.goal_type, GoalType::Shot);
    assert_eq!(goal.minute.as_deref(), Some("23"));
    assert_eq!(goal.assist_id, None);
    assert_eq!(goal.subtype, None);
}

/// Own goals go to the other team and carry the sentinel player id
#[test]
fn test_own_goal_is_credited_to_opponent() {
    let xml = "<goal><value><stats><owngoals>1</owngoals></stats><team>100</team>\
               <player1>55</player1></value></goal>";
    let goals = extract_goals(Some(xml), Some("100"), Some("200")).unwrap();

    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].team_id.as_deref(), Some("200"));
    assert_eq!(goals[0].player_id(), Some(OWN_GOAL_PLAYER_ID));
    assert_eq!(goals[0].scorer, Scorer::OwnGoal);
    assert_eq!(goals[0].goal_type, GoalType::OwnGoal);
}

/// Events without a goal stat (cards, shots on target) produce nothing
#[test]
fn test_card_only_event_is_skipped() {
    let xml = "<goal><value><stats><ycards>1</ycards></stats><team>100</team>\
               </value></goal>";
    let goals = extract_goals(Some(xml), Some("100"), Some("200")).unwrap();
    assert!(goals.is_empty());
}

/// Missing document or team context is not an error
#[test]
fn test_missing_inputs_give_no_goals() {
    assert!(extract_goals(None, Some(HOME), Some(AWAY)).unwrap().is_empty());
    assert!(extract_goals(Some(MATCH_GOAL_XML), None, Some(AWAY)).unwrap().is_empty());
    assert!(extract_goals(Some(MATCH_GOAL_XML), Some(HOME), None).unwrap().is_empty());
}

#[test]
fn test_full_match_document() {
    let goals = extract_goals(Some(MATCH_GOAL_XML), Some(HOME), Some(AWAY)).unwrap();

    let summary: Vec<(Option<&str>, Option<&str>, GoalType, Option<&str>)> = goals
        .iter()
        .map(|g| (g.team_id.as_deref(), g.player_id(), g.goal_type, g.minute.as_deref()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Some(AWAY), Some("37799"), GoalType::Shot, Some("22")),
            (Some(HOME), Some("-7"), GoalType::OwnGoal, Some("39")),
            (Some(HOME), Some("30829"), GoalType::Penalty, Some("78")),
        ]
    );
    assert_eq!(goals[0].assist_id.as_deref(), Some("38807"));
    assert_eq!(goals[0].subtype.as_deref(), Some("header"));
}

/// Same input, same output
#[test]
fn test_extraction_is_idempotent() {
    let first = extract_goals(Some(MATCH_GOAL_XML), Some(HOME), Some(AWAY)).unwrap();
    let second = extract_goals(Some(MATCH_GOAL_XML), Some(HOME), Some(AWAY)).unwrap();
    assert_eq!(first, second);
}

/// Every own goal is credited to one of the two teams, never the one named in the event
#[test]
fn test_own_goals_always_flip_between_home_and_away() {
    for (team, expected) in [(HOME, AWAY), (AWAY, HOME)] {
        let xml = format!(
            "<goal><value><stats><owngoals>1</owngoals></stats><team>{team}</team></value></goal>"
        );
        let goals = extract_goals(Some(&xml), Some(HOME), Some(AWAY)).unwrap();
        assert_eq!(goals[0].team_id.as_deref(), Some(expected));
        assert_ne!(goals[0].team_id.as_deref(), Some(team));
    }
}

#[test]
fn test_malformed_document_is_an_error() {
    let result = extract_goals(Some("<goal><value>"), Some(HOME), Some(AWAY));
    assert!(matches!(result, Err(AppError::XmlParse { .. })));
}

#[test]
fn test_json_uses_flat_columns() {
    let goals = extract_goals(Some(MATCH_GOAL_XML), Some(HOME), Some(AWAY)).unwrap();
    let json = serde_json::to_value(&goals).unwrap();

    assert_eq!(json[1]["player_id"], "-7");
    assert_eq!(json[1]["type"], "owngoal");
    assert_eq!(json[2]["type"], "penalty");
    assert!(json[2]["assist_id"].is_null());
}
