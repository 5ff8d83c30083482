use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub discipline: String,
    pub name: String,
    pub full_name: Option<String>,
    pub status: String,
    pub scheduled_date_start: Option<NaiveDate>,
    pub scheduled_date_end: Option<NaiveDate>,
    pub timezone: Option<String>,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub public: bool,
    pub location: Option<String>,
    pub country: Option<String>,
    pub size: Option<i32>,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub logo: Option<Logo>,
    #[serde(default)]
    pub registration_enabled: bool,
    pub registration_opening_datetime: Option<DateTime<FixedOffset>>,
    pub registration_closing_datetime: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub logo_small: Option<String>,
    pub logo_medium: Option<String>,
    pub logo_large: Option<String>,
    pub original: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub custom_user_identifier: Option<String>,
    #[serde(default)]
    pub checked_in: bool,
    pub custom_fields: Option<serde_json::Value>,
    pub user_id: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub lineup: Vec<Lineup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub name: String,
    pub custom_user_identifier: Option<String>,
    pub email: Option<String>,
    pub custom_fields: Option<serde_json::Value>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub stage_id: String,
    pub number: i32,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub settings: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub number: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub stage_type: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub settings: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub status: String,
    pub stage_id: String,
    pub group_id: String,
    pub round_id: Option<String>,
    pub number: i32,
    #[serde(rename = "type")]
    pub match_type: String,
    #[serde(default)]
    pub settings: serde_json::Value,
    pub scheduled_datetime: Option<DateTime<FixedOffset>>,
    pub public_note: Option<String>,
    pub private_note: Option<String>,
    pub played_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub report_closed: bool,
    #[serde(default)]
    pub opponents: Vec<Opponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub number: i32,
    pub position: i32,
    pub result: Option<String>,
    pub rank: Option<i32>,
    #[serde(default)]
    pub forfeit: bool,
    pub score: Option<i32>,
    /// Empty while the slot is still to be decided.
    pub participant: Option<OpponentParticipant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentParticipant {
    pub id: String,
    pub name: String,
    pub custom_user_identifier: Option<String>,
    pub custom_fields: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchGame {
    pub number: i32,
    pub status: String,
    #[serde(default)]
    pub opponents: Vec<GameOpponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOpponent {
    pub number: i32,
    pub position: i32,
    pub result: Option<String>,
    pub rank: Option<i32>,
    #[serde(default)]
    pub forfeit: bool,
    pub score: Option<i32>,
}
