#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DayBoard {
    pub group_name: String,
    pub created: chrono::DateTime<chrono::Utc>,
    pub players: Vec<DayScore>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DayScore {
    pub rank: usize,
    pub player_name: String,
    pub wins: Option<i32>,
    pub score: Option<f64>,
    pub goals: Option<f64>,
    pub shots: Option<f64>,
    pub shooting_percentage: Option<f64>,
    pub assists: Option<f64>,
    pub saves: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverallScore {
    pub team_id: String,
    pub team_name: String,
    pub player_name: String,
    pub wins: Option<i32>,
    pub score: Option<f64>,
    pub goals: Option<f64>,
    pub shots: Option<f64>,
    pub shooting_percentage: Option<f64>,
    pub assists: Option<f64>,
    pub saves: Option<f64>,
    pub demos: Option<f64>,
    pub parameters: ScoreParameters,
}

/// Every metric as a percentage of the best value in the leaderboard.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoreParameters {
    pub wins: Option<f64>,
    pub score: Option<f64>,
    pub goals: Option<f64>,
    pub shots: Option<f64>,
    pub shooting_percentage: Option<f64>,
    pub assists: Option<f64>,
    pub saves: Option<f64>,
    pub demos: Option<f64>,
}
