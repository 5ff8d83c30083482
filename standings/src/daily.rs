//! Splitting an ordered stream of leaderboard rows into per-day boards.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Board<K, T> {
    pub key: K,
    pub entries: Vec<T>,
}

/// Groups consecutive rows with the same key, keeping the incoming order of
/// both the boards and the rows inside them.
///
/// The rows are expected to already be sorted by day, a key that shows up
/// again after a different one starts a new board.
pub fn group_consecutive<T, K, I, F>(rows: I, key: F) -> Vec<Board<K, T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
    K: PartialEq,
{
    let mut boards: Vec<Board<K, T>> = Vec::new();

    for row in rows {
        let row_key = key(&row);
        match boards.last_mut() {
            Some(board) if board.key == row_key => board.entries.push(row),
            _ => boards.push(Board {
                key: row_key,
                entries: vec![row],
            }),
        }
    }

    boards
}

/// Competition ranking ("1224") of entries that are already sorted by score
/// descending. Entries without a score share the last place.
pub fn competition_ranks<T, F>(entries: &[T], score: F) -> Vec<usize>
where
    F: Fn(&T) -> Option<f64>,
{
    let mut ranks = Vec::with_capacity(entries.len());
    let mut previous: Option<Option<f64>> = None;

    for (idx, entry) in entries.iter().enumerate() {
        let current = score(entry);
        let rank = match (previous, ranks.last()) {
            (Some(prev), Some(last)) if prev == current => *last,
            _ => idx + 1,
        };
        ranks.push(rank);
        previous = Some(current);
    }

    ranks
}
