use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::constants::OWN_GOAL_PLAYER_ID;

/// How a goal was scored, decided by which stat sub-node the event carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Shot,
    Penalty,
    #[serde(rename = "owngoal")]
    OwnGoal,
}

impl GoalType {
    /// All goal types in classification order
    pub const ALL: [GoalType; 3] = [GoalType::Shot, GoalType::Penalty, GoalType::OwnGoal];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Shot => "shot",
            GoalType::Penalty => "penalty",
            GoalType::OwnGoal => "owngoal",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who gets the goal on the scoresheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scorer {
    /// Regular scorer taken from `player1`; `None` when the event has no `player1`
    Player(Option<String>),
    /// Own goal, no individual scorer is credited
    OwnGoal,
}

/// A single normalized goal taken from a match's goal XML.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoalRecord {
    /// Team credited with the goal. Own goals are already flipped to the opponent.
    pub team_id: Option<String>,
    pub scorer: Scorer,
    pub assist_id: Option<String>,
    pub goal_type: GoalType,
    pub subtype: Option<String>,
    /// Raw `elapsed` text, not validated
    pub minute: Option<String>,
}

impl GoalRecord {
    /// Scorer id in tabular form: the player id, or `-7` for own goals.
    ///
    /// # Example
    /// ```
    /// use goalscope::goal_events::{GoalRecord, GoalType, Scorer};
    ///
    /// let record = GoalRecord {
    ///     team_id: Some("200".to_string()),
    ///     scorer: Scorer::OwnGoal,
    ///     assist_id: None,
    ///     goal_type: GoalType::OwnGoal,
    ///     subtype: None,
    ///     minute: Some("51".to_string()),
    /// };
    /// assert_eq!(record.player_id(), Some("-7"));
    /// ```
    pub fn player_id(&self) -> Option<&str> {
        match &self.scorer {
            Scorer::Player(id) => id.as_deref(),
            Scorer::OwnGoal => Some(OWN_GOAL_PLAYER_ID),
        }
    }

    /// Scoring player's id, `None` for own goals and events without `player1`
    pub fn scorer_id(&self) -> Option<&str> {
        match &self.scorer {
            Scorer::Player(id) => id.as_deref(),
            Scorer::OwnGoal => None,
        }
    }

    pub fn is_own_goal(&self) -> bool {
        matches!(self.scorer, Scorer::OwnGoal)
    }
}

// Serialized with the flat column layout downstream tables expect.
impl Serialize for GoalRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("GoalRecord", 6)?;
        state.serialize_field("team_id", &self.team_id)?;
        state.serialize_field("player_id", &self.player_id())?;
        state.serialize_field("assist_id", &self.assist_id)?;
        state.serialize_field("type", &self.goal_type)?;
        state.serialize_field("subtype", &self.subtype)?;
        state.serialize_field("minute", &self.minute)?;
        state.end()
    }
}
