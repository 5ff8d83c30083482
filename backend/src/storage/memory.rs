use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use standings::normalize::max_recorded;

use super::{score_desc_nulls_last, Sequence, Storage, Table};
use crate::error::DatabaseError;
use crate::flatten::{CumulativeBatch, GameAverageBatch};
use crate::models;

/// The content of a [`MemoryStore`], table by table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryTables {
    pub background_tasks: Vec<models::TaskStatusRecord>,
    pub teams: Vec<models::Team>,
    pub matches: Vec<models::Match>,
    pub match_opponents: Vec<models::MatchOpponent>,
    pub groups: Vec<models::Group>,
    pub players: Vec<models::Player>,
    pub cumulatives: CumulativeBatch,
    pub game_averages: GameAverageBatch,
    pub stream_slots: Vec<models::StreamSlot>,
    /// Last value handed out per sequence. Truncating a table leaves these
    /// alone, the same way Postgres sequences keep counting.
    pub sequences: HashMap<Sequence, i64>,
}

impl MemoryTables {
    fn count(&self, table: Table) -> usize {
        match table {
            Table::Teams => self.teams.len(),
            Table::Matches => self.matches.len(),
            Table::MatchOpponents => self.match_opponents.len(),
            Table::Groups => self.groups.len(),
            Table::Players => self.players.len(),
            Table::Cumulatives => self.cumulatives.base.len(),
            Table::CumulativeCores => self.cumulatives.cores.len(),
            Table::CumulativeBoosts => self.cumulatives.boosts.len(),
            Table::CumulativeMovements => self.cumulatives.movements.len(),
            Table::CumulativePositionings => self.cumulatives.positionings.len(),
            Table::CumulativeDemos => self.cumulatives.demos.len(),
            Table::GameAverages => self.game_averages.base.len(),
            Table::GameAverageCores => self.game_averages.cores.len(),
            Table::GameAverageBoosts => self.game_averages.boosts.len(),
            Table::GameAverageMovements => self.game_averages.movements.len(),
            Table::GameAveragePositionings => self.game_averages.positionings.len(),
            Table::GameAverageDemos => self.game_averages.demos.len(),
        }
    }

    fn truncate(&mut self, table: Table) {
        match table {
            Table::Teams => self.teams.clear(),
            Table::Matches => self.matches.clear(),
            Table::MatchOpponents => self.match_opponents.clear(),
            Table::Groups => self.groups.clear(),
            Table::Players => self.players.clear(),
            Table::Cumulatives => self.cumulatives.base.clear(),
            Table::CumulativeCores => self.cumulatives.cores.clear(),
            Table::CumulativeBoosts => self.cumulatives.boosts.clear(),
            Table::CumulativeMovements => self.cumulatives.movements.clear(),
            Table::CumulativePositionings => self.cumulatives.positionings.clear(),
            Table::CumulativeDemos => self.cumulatives.demos.clear(),
            Table::GameAverages => self.game_averages.base.clear(),
            Table::GameAverageCores => self.game_averages.cores.clear(),
            Table::GameAverageBoosts => self.game_averages.boosts.clear(),
            Table::GameAverageMovements => self.game_averages.movements.clear(),
            Table::GameAveragePositionings => self.game_averages.positionings.clear(),
            Table::GameAverageDemos => self.game_averages.demos.clear(),
        }
    }

    fn player(&self, platform: &str, id: &str) -> Option<&models::Player> {
        self.players
            .iter()
            .find(|player| player.platform == platform && player.id == id)
    }
}

/// [`Storage`] backed by plain `Vec`s.
///
/// The joins of the leaderboard queries are inner joins like their SQL
/// counterparts, a stat row whose player or sub-block is missing is skipped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<MemoryTables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MemoryTables {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryTables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStore {
    async fn record_task_status(&self, status: models::NewTaskStatus) -> Result<(), DatabaseError> {
        let mut tables = self.lock();
        let id = tables.background_tasks.len() as i64 + 1;
        tables.background_tasks.push(models::TaskStatusRecord {
            id,
            task_id: status.task_id,
            source: status.source,
            state: status.state,
            status: status.status,
            error: status.error,
            created_at: status.created_at,
        });
        Ok(())
    }

    async fn task_history(&self, task_id: uuid::Uuid) -> Result<Vec<models::TaskStatusRecord>, DatabaseError> {
        Ok(self
            .lock()
            .background_tasks
            .iter()
            .filter(|record| record.task_id == task_id)
            .cloned()
            .collect())
    }

    async fn truncate(&self, table: Table) -> Result<(), DatabaseError> {
        self.lock().truncate(table);
        Ok(())
    }

    async fn next_ids(&self, sequence: Sequence, n: usize) -> Result<Vec<i64>, DatabaseError> {
        let mut tables = self.lock();
        let last = tables.sequences.entry(sequence).or_insert(0);

        let ids = (1..=n as i64).map(|offset| *last + offset).collect();
        *last += n as i64;

        Ok(ids)
    }

    async fn count(&self, table: Table) -> Result<usize, DatabaseError> {
        Ok(self.lock().count(table))
    }

    async fn insert_teams(&self, rows: &[models::Team]) -> Result<usize, DatabaseError> {
        self.lock().teams.extend_from_slice(rows);
        Ok(rows.len())
    }

    async fn insert_matches(&self, rows: &[models::Match]) -> Result<usize, DatabaseError> {
        self.lock().matches.extend_from_slice(rows);
        Ok(rows.len())
    }

    async fn insert_match_opponents(&self, rows: &[models::MatchOpponent]) -> Result<usize, DatabaseError> {
        self.lock().match_opponents.extend_from_slice(rows);
        Ok(rows.len())
    }

    async fn insert_groups(&self, rows: &[models::Group]) -> Result<usize, DatabaseError> {
        self.lock().groups.extend_from_slice(rows);
        Ok(rows.len())
    }

    async fn insert_players(&self, rows: &[models::Player]) -> Result<usize, DatabaseError> {
        self.lock().players.extend_from_slice(rows);
        Ok(rows.len())
    }

    async fn insert_cumulatives(&self, batch: &CumulativeBatch) -> Result<usize, DatabaseError> {
        let mut tables = self.lock();
        let target = &mut tables.cumulatives;
        target.cores.extend_from_slice(&batch.cores);
        target.boosts.extend_from_slice(&batch.boosts);
        target.movements.extend_from_slice(&batch.movements);
        target.positionings.extend_from_slice(&batch.positionings);
        target.demos.extend_from_slice(&batch.demos);
        target.base.extend_from_slice(&batch.base);
        Ok(batch.len())
    }

    async fn insert_game_averages(&self, batch: &GameAverageBatch) -> Result<usize, DatabaseError> {
        let mut tables = self.lock();
        let target = &mut tables.game_averages;
        target.cores.extend_from_slice(&batch.cores);
        target.boosts.extend_from_slice(&batch.boosts);
        target.movements.extend_from_slice(&batch.movements);
        target.positionings.extend_from_slice(&batch.positionings);
        target.demos.extend_from_slice(&batch.demos);
        target.base.extend_from_slice(&batch.base);
        Ok(batch.len())
    }

    async fn daily_score_rows(&self) -> Result<Vec<models::DailyScoreRow>, DatabaseError> {
        let tables = self.lock();

        let mut rows = Vec::new();
        for group in tables.groups.iter().filter(|g| g.parent_group_id.is_some()) {
            for cumulative in tables.cumulatives.base.iter().filter(|c| c.group_id == group.id) {
                let core = tables.cumulatives.cores.iter().find(|c| c.id == cumulative.core_id);
                let player = tables.player(&cumulative.player_platform, &cumulative.player_id);
                let (Some(core), Some(player)) = (core, player) else {
                    continue;
                };

                rows.push(models::DailyScoreRow {
                    group_name: group.name.clone(),
                    group_created: group.created,
                    player_name: player.name.clone(),
                    wins: cumulative.wins,
                    score: core.score,
                    goals: core.goals,
                    shots: core.shots,
                    shooting_percentage: core.shooting_percentage,
                    assists: core.assists,
                    saves: core.saves,
                });
            }
        }

        rows.sort_by(|a, b| {
            a.group_created
                .cmp(&b.group_created)
                .then_with(|| score_desc_nulls_last(a.score, b.score))
        });
        Ok(rows)
    }

    async fn overall_score_rows(&self) -> Result<Vec<models::OverallScoreRow>, DatabaseError> {
        let tables = self.lock();

        let mut rows = Vec::new();
        for group in tables.groups.iter().filter(|g| g.parent_group_id.is_none()) {
            for cumulative in tables.cumulatives.base.iter().filter(|c| c.group_id == group.id) {
                let core = tables.cumulatives.cores.iter().find(|c| c.id == cumulative.core_id);
                let demo = tables.cumulatives.demos.iter().find(|d| d.id == cumulative.demo_id);
                let player = tables.player(&cumulative.player_platform, &cumulative.player_id);
                let (Some(core), Some(demo), Some(player)) = (core, demo, player) else {
                    continue;
                };

                let teams = tables
                    .teams
                    .iter()
                    .filter(|team| team.bc_team_id.is_some() && team.bc_team_id == player.team_id);
                for team in teams {
                    rows.push(models::OverallScoreRow {
                        team_id: team.id.clone(),
                        team_name: team.name.clone(),
                        player_name: player.name.clone(),
                        wins: cumulative.wins,
                        score: core.score,
                        goals: core.goals,
                        shots: core.shots,
                        shooting_percentage: core.shooting_percentage,
                        assists: core.assists,
                        saves: core.saves,
                        demos: demo.taken,
                    });
                }
            }
        }

        rows.sort_by(|a, b| score_desc_nulls_last(a.score, b.score));
        Ok(rows)
    }

    async fn metric_maxima(&self) -> Result<models::MetricMaxima, DatabaseError> {
        let tables = self.lock();
        let cumulatives = &tables.cumulatives;
        let cores = |metric: fn(&models::CumulativeCore) -> Option<f64>| max_recorded(cumulatives.cores.iter().map(metric));

        Ok(models::MetricMaxima {
            wins: max_recorded(cumulatives.base.iter().map(|c| c.wins.map(f64::from))),
            score: cores(|c| c.score),
            goals: cores(|c| c.goals),
            shots: cores(|c| c.shots),
            shooting_percentage: cores(|c| c.shooting_percentage),
            assists: cores(|c| c.assists),
            saves: cores(|c| c.saves),
            demos: max_recorded(cumulatives.demos.iter().map(|d| d.taken)),
        })
    }

    async fn stream_slots(&self) -> Result<Vec<models::StreamSlot>, DatabaseError> {
        let mut slots = self.lock().stream_slots.clone();
        slots.sort_by_key(|slot| slot.slot);
        Ok(slots)
    }

    async fn assign_stream_slot(&self, slot: models::StreamSlot) -> Result<(), DatabaseError> {
        let mut tables = self.lock();
        match tables.stream_slots.iter_mut().find(|s| s.slot == slot.slot) {
            Some(existing) => existing.team_id = slot.team_id,
            None => tables.stream_slots.push(slot),
        }
        Ok(())
    }
}
