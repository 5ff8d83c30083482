use std::collections::HashMap;

use super::{Inner, ReloadSummary};
use crate::error::Error;
use crate::flatten;
use crate::storage::Table;

#[tracing::instrument(skip(inner))]
pub(super) async fn run(inner: &Inner, tournament_id: &str) -> Result<ReloadSummary, Error> {
    for table in Table::TOURNAMENT {
        inner.storage.truncate(table).await?;
    }
    tracing::debug!("Truncated tournament tables");

    let snapshot = inner.tournaments.snapshot(tournament_id).await?;
    tracing::info!(
        participants = snapshot.participants.len(),
        matches = snapshot.matches.len(),
        "Fetched tournament"
    );

    let mut bc_team_ids = HashMap::with_capacity(snapshot.participants.len());
    for participant in snapshot.participants.iter() {
        let bc_team_id = inner.crosswalk.bc_team_id(&participant.id).await?;
        if bc_team_id.is_none() {
            tracing::warn!(participant = %participant.id, name = %participant.name, "No replay team mapped for participant");
        }
        bc_team_ids.insert(participant.id.as_str(), bc_team_id);
    }

    let batch = flatten::tournament_batch(&snapshot.participants, &snapshot.matches, |participant| {
        bc_team_ids.get(participant.id.as_str()).cloned().flatten()
    });

    let mut summary = ReloadSummary::default();
    summary.push(Table::Teams, inner.storage.insert_teams(&batch.teams).await?);
    summary.push(Table::Matches, inner.storage.insert_matches(&batch.matches).await?);
    summary.push(
        Table::MatchOpponents,
        inner.storage.insert_match_opponents(&batch.opponents).await?,
    );

    Ok(summary)
}
