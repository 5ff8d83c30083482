//! The two leaderboards built from the replay tables.

use common::leaderboard::{DayBoard, DayScore, OverallScore, ScoreParameters};
use standings::{daily, normalize};

use crate::error::DatabaseError;
use crate::storage::Storage;

/// Player totals of every child group, one board per group in creation
/// order, players ranked by score.
#[tracing::instrument(skip(storage))]
pub async fn scores_by_day(storage: &dyn Storage) -> Result<Vec<DayBoard>, DatabaseError> {
    let rows = storage.daily_score_rows().await?;
    tracing::debug!("Loaded {} daily rows", rows.len());

    let boards = daily::group_consecutive(rows, |row| (row.group_name.clone(), row.group_created));

    Ok(boards
        .into_iter()
        .map(|board| {
            let ranks = daily::competition_ranks(&board.entries, |row| row.score);
            let (group_name, created) = board.key;

            DayBoard {
                group_name,
                created,
                players: board
                    .entries
                    .into_iter()
                    .zip(ranks)
                    .map(|(row, rank)| DayScore {
                        rank,
                        player_name: row.player_name,
                        wins: row.wins,
                        score: row.score,
                        goals: row.goals,
                        shots: row.shots,
                        shooting_percentage: row.shooting_percentage,
                        assists: row.assists,
                        saves: row.saves,
                    })
                    .collect(),
            }
        })
        .collect())
}

/// Player totals of the root groups with every metric also expressed as a
/// percentage of its largest stored value.
///
/// The maximum covers every stored stat row, so a player in a child group or
/// without a tournament team can hold it without appearing on this board.
#[tracing::instrument(skip(storage))]
pub async fn scores_all(storage: &dyn Storage) -> Result<Vec<OverallScore>, DatabaseError> {
    let rows = storage.overall_score_rows().await?;
    let max = storage.metric_maxima().await?;
    tracing::debug!(?max, "Loaded {} overall rows", rows.len());

    Ok(rows
        .into_iter()
        .map(|row| OverallScore {
            parameters: ScoreParameters {
                wins: normalize::percent_of(row.wins.map(f64::from), max.wins),
                score: normalize::percent_of(row.score, max.score),
                goals: normalize::percent_of(row.goals, max.goals),
                shots: normalize::percent_of(row.shots, max.shots),
                shooting_percentage: normalize::percent_of(row.shooting_percentage, max.shooting_percentage),
                assists: normalize::percent_of(row.assists, max.assists),
                saves: normalize::percent_of(row.saves, max.saves),
                demos: normalize::percent_of(row.demos, max.demos),
            },
            team_id: row.team_id,
            team_name: row.team_name,
            player_name: row.player_name,
            wins: row.wins,
            score: row.score,
            goals: row.goals,
            shots: row.shots,
            shooting_percentage: row.shooting_percentage,
            assists: row.assists,
            saves: row.saves,
            demos: row.demos,
        })
        .collect())
}
