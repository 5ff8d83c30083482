//! Where the flattened rows end up.
//!
//! [`PgStore`] is the real thing, [`MemoryStore`] keeps the same tables in
//! memory and is what the orchestrator and query tests run against.

use crate::error::DatabaseError;
use crate::flatten::{CumulativeBatch, GameAverageBatch};
use crate::models;

mod memory;
mod postgres;

pub use memory::{MemoryStore, MemoryTables};
pub use postgres::PgStore;

/// The tables that get rebuilt by a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Teams,
    Matches,
    MatchOpponents,
    Groups,
    Players,
    Cumulatives,
    CumulativeCores,
    CumulativeBoosts,
    CumulativeMovements,
    CumulativePositionings,
    CumulativeDemos,
    GameAverages,
    GameAverageCores,
    GameAverageBoosts,
    GameAverageMovements,
    GameAveragePositionings,
    GameAverageDemos,
}

impl Table {
    /// Cleared at the start of a tournament reload.
    pub const TOURNAMENT: [Table; 3] = [Table::Teams, Table::Matches, Table::MatchOpponents];

    /// Cleared at the start of a replay reload.
    pub const REPLAY: [Table; 14] = [
        Table::Groups,
        Table::Players,
        Table::Cumulatives,
        Table::CumulativeCores,
        Table::CumulativeBoosts,
        Table::CumulativeMovements,
        Table::CumulativePositionings,
        Table::CumulativeDemos,
        Table::GameAverages,
        Table::GameAverageCores,
        Table::GameAverageBoosts,
        Table::GameAverageMovements,
        Table::GameAveragePositionings,
        Table::GameAverageDemos,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Teams => "teams",
            Self::Matches => "matches",
            Self::MatchOpponents => "match_opponents",
            Self::Groups => "groups",
            Self::Players => "players",
            Self::Cumulatives => "cumulatives",
            Self::CumulativeCores => "cumulative_cores",
            Self::CumulativeBoosts => "cumulative_boosts",
            Self::CumulativeMovements => "cumulative_movements",
            Self::CumulativePositionings => "cumulative_positionings",
            Self::CumulativeDemos => "cumulative_demos",
            Self::GameAverages => "game_averages",
            Self::GameAverageCores => "game_average_cores",
            Self::GameAverageBoosts => "game_average_boosts",
            Self::GameAverageMovements => "game_average_movements",
            Self::GameAveragePositionings => "game_average_positionings",
            Self::GameAverageDemos => "game_average_demos",
        }
    }
}

/// The id sequences of the stat tables, one per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sequence {
    Cumulative,
    CumulativeCore,
    CumulativeBoost,
    CumulativeMovement,
    CumulativePositioning,
    CumulativeDemo,
    GameAverage,
    GameAverageCore,
    GameAverageBoost,
    GameAverageMovement,
    GameAveragePositioning,
    GameAverageDemo,
}

impl Sequence {
    /// In [`crate::flatten::StatIds`] field order.
    pub const CUMULATIVE: [Sequence; 6] = [
        Sequence::Cumulative,
        Sequence::CumulativeCore,
        Sequence::CumulativeBoost,
        Sequence::CumulativeMovement,
        Sequence::CumulativePositioning,
        Sequence::CumulativeDemo,
    ];

    /// In [`crate::flatten::StatIds`] field order.
    pub const GAME_AVERAGE: [Sequence; 6] = [
        Sequence::GameAverage,
        Sequence::GameAverageCore,
        Sequence::GameAverageBoost,
        Sequence::GameAverageMovement,
        Sequence::GameAveragePositioning,
        Sequence::GameAverageDemo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cumulative => "cumulative_id_seq",
            Self::CumulativeCore => "cumulative_core_id_seq",
            Self::CumulativeBoost => "cumulative_boost_id_seq",
            Self::CumulativeMovement => "cumulative_movement_id_seq",
            Self::CumulativePositioning => "cumulative_positioning_id_seq",
            Self::CumulativeDemo => "cumulative_demo_id_seq",
            Self::GameAverage => "game_average_id_seq",
            Self::GameAverageCore => "game_average_core_id_seq",
            Self::GameAverageBoost => "game_average_boost_id_seq",
            Self::GameAverageMovement => "game_average_movement_id_seq",
            Self::GameAveragePositioning => "game_average_positioning_id_seq",
            Self::GameAverageDemo => "game_average_demo_id_seq",
        }
    }
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn record_task_status(&self, status: models::NewTaskStatus) -> Result<(), DatabaseError>;

    /// Every status recorded for the task, oldest first.
    async fn task_history(&self, task_id: uuid::Uuid) -> Result<Vec<models::TaskStatusRecord>, DatabaseError>;

    async fn truncate(&self, table: Table) -> Result<(), DatabaseError>;

    /// Takes the next `n` values of the sequence, in ascending order.
    async fn next_ids(&self, sequence: Sequence, n: usize) -> Result<Vec<i64>, DatabaseError>;

    async fn count(&self, table: Table) -> Result<usize, DatabaseError>;

    async fn insert_teams(&self, rows: &[models::Team]) -> Result<usize, DatabaseError>;

    async fn insert_matches(&self, rows: &[models::Match]) -> Result<usize, DatabaseError>;

    async fn insert_match_opponents(&self, rows: &[models::MatchOpponent]) -> Result<usize, DatabaseError>;

    async fn insert_groups(&self, rows: &[models::Group]) -> Result<usize, DatabaseError>;

    async fn insert_players(&self, rows: &[models::Player]) -> Result<usize, DatabaseError>;

    /// Inserts the five sub-tables before the `cumulatives` rows pointing at
    /// them. Returns the number of `cumulatives` rows.
    async fn insert_cumulatives(&self, batch: &CumulativeBatch) -> Result<usize, DatabaseError>;

    /// Same as [`Storage::insert_cumulatives`] for the game averages.
    async fn insert_game_averages(&self, batch: &GameAverageBatch) -> Result<usize, DatabaseError>;

    /// Player totals of every child group, ordered by group creation and then
    /// by score, highest first with missing scores last.
    async fn daily_score_rows(&self) -> Result<Vec<models::DailyScoreRow>, DatabaseError>;

    /// Player totals of the root groups joined to their tournament team,
    /// ordered by score, highest first with missing scores last.
    async fn overall_score_rows(&self) -> Result<Vec<models::OverallScoreRow>, DatabaseError>;

    /// The maximum of every overall metric across all stored stat rows, not
    /// only the rows of [`Storage::overall_score_rows`].
    async fn metric_maxima(&self) -> Result<models::MetricMaxima, DatabaseError>;

    async fn stream_slots(&self) -> Result<Vec<models::StreamSlot>, DatabaseError>;

    async fn assign_stream_slot(&self, slot: models::StreamSlot) -> Result<(), DatabaseError>;
}

/// Maps tournament participant ids to replay team ids.
#[async_trait::async_trait]
pub trait Crosswalk: Send + Sync {
    async fn bc_team_id(&self, participant_id: &str) -> Result<Option<String>, DatabaseError>;
}

#[async_trait::async_trait]
impl Crosswalk for std::collections::HashMap<String, String> {
    async fn bc_team_id(&self, participant_id: &str) -> Result<Option<String>, DatabaseError> {
        Ok(self.get(participant_id).cloned())
    }
}

/// Orders by score, highest first, with missing scores last.
pub(crate) fn score_desc_nulls_last(a: Option<f64>, b: Option<f64>) -> std::cmp::Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}
