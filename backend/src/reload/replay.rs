use super::{Inner, ReloadSummary};
use crate::error::{DatabaseError, Error};
use crate::flatten::{self, StatIds};
use crate::storage::{Sequence, Storage, Table};

#[tracing::instrument(skip(inner))]
pub(super) async fn run(inner: &Inner, group_id: &str) -> Result<ReloadSummary, Error> {
    for table in Table::REPLAY {
        inner.storage.truncate(table).await?;
    }
    tracing::debug!("Truncated replay tables");

    let snapshot = inner.replays.snapshot(group_id).await?;
    let subjects = flatten::stat_subjects(&snapshot).len();
    tracing::info!(
        children = snapshot.children.len(),
        stat_rows = subjects,
        "Fetched replay groups"
    );

    let cumulative_ids = allocate(inner.storage.as_ref(), Sequence::CUMULATIVE, subjects).await?;
    let game_average_ids = allocate(inner.storage.as_ref(), Sequence::GAME_AVERAGE, subjects).await?;

    let batch = flatten::replay_batch(&snapshot, &cumulative_ids, &game_average_ids);

    let mut summary = ReloadSummary::default();
    summary.push(Table::Groups, inner.storage.insert_groups(&batch.groups).await?);
    summary.push(Table::Players, inner.storage.insert_players(&batch.players).await?);

    let cumulatives = inner.storage.insert_cumulatives(&batch.cumulatives).await?;
    summary.push(Table::CumulativeCores, batch.cumulatives.cores.len());
    summary.push(Table::CumulativeBoosts, batch.cumulatives.boosts.len());
    summary.push(Table::CumulativeMovements, batch.cumulatives.movements.len());
    summary.push(Table::CumulativePositionings, batch.cumulatives.positionings.len());
    summary.push(Table::CumulativeDemos, batch.cumulatives.demos.len());
    summary.push(Table::Cumulatives, cumulatives);

    let game_averages = inner.storage.insert_game_averages(&batch.game_averages).await?;
    summary.push(Table::GameAverageCores, batch.game_averages.cores.len());
    summary.push(Table::GameAverageBoosts, batch.game_averages.boosts.len());
    summary.push(Table::GameAverageMovements, batch.game_averages.movements.len());
    summary.push(Table::GameAveragePositionings, batch.game_averages.positionings.len());
    summary.push(Table::GameAverageDemos, batch.game_averages.demos.len());
    summary.push(Table::GameAverages, game_averages);

    Ok(summary)
}

/// Draws `n` ids from each of the six sequences and zips them into
/// [`StatIds`].
async fn allocate(storage: &dyn Storage, sequences: [Sequence; 6], n: usize) -> Result<Vec<StatIds>, DatabaseError> {
    let mut columns = Vec::with_capacity(sequences.len());
    for sequence in sequences {
        let ids = storage.next_ids(sequence, n).await?;
        if ids.len() != n {
            return Err(DatabaseError::Sequence {
                sequence: sequence.name(),
                expected: n,
                got: ids.len(),
            });
        }
        columns.push(ids);
    }

    Ok((0..n)
        .map(|i| StatIds {
            id: columns[0][i],
            core: columns[1][i],
            boost: columns[2][i],
            movement: columns[3][i],
            positioning: columns[4][i],
            demo: columns[5][i],
        })
        .collect())
}
