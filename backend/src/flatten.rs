//! Turns the nested upstream records into flat table rows.
//!
//! Nothing in here touches the network or the database, surrogate ids for the
//! stat tables are allocated by the caller and passed in as [`StatIds`].

use std::collections::HashSet;

use chrono::Utc;

use crate::ballchasing_api::{ReplayGroup, ReplayPlayer};
use crate::models;
use crate::toornament_api::{Match, Participant};
use crate::upstream::ReplaySnapshot;

/// The ids of one stat row and of its five sub-blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatIds {
    pub id: i64,
    pub core: i64,
    pub boost: i64,
    pub movement: i64,
    pub positioning: i64,
    pub demo: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeRows {
    pub base: models::Cumulative,
    pub core: models::CumulativeCore,
    pub boost: models::CumulativeBoost,
    pub movement: models::CumulativeMovement,
    pub positioning: models::CumulativePositioning,
    pub demo: models::CumulativeDemo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameAverageRows {
    pub base: models::GameAverage,
    pub core: models::GameAverageCore,
    pub boost: models::GameAverageBoost,
    pub movement: models::GameAverageMovement,
    pub positioning: models::GameAveragePositioning,
    pub demo: models::GameAverageDemo,
}

/// All cumulative rows of a reload, one `Vec` per table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CumulativeBatch {
    pub base: Vec<models::Cumulative>,
    pub cores: Vec<models::CumulativeCore>,
    pub boosts: Vec<models::CumulativeBoost>,
    pub movements: Vec<models::CumulativeMovement>,
    pub positionings: Vec<models::CumulativePositioning>,
    pub demos: Vec<models::CumulativeDemo>,
}

impl CumulativeBatch {
    pub fn push(&mut self, rows: CumulativeRows) {
        self.base.push(rows.base);
        self.cores.push(rows.core);
        self.boosts.push(rows.boost);
        self.movements.push(rows.movement);
        self.positionings.push(rows.positioning);
        self.demos.push(rows.demo);
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

/// All game average rows of a reload, one `Vec` per table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameAverageBatch {
    pub base: Vec<models::GameAverage>,
    pub cores: Vec<models::GameAverageCore>,
    pub boosts: Vec<models::GameAverageBoost>,
    pub movements: Vec<models::GameAverageMovement>,
    pub positionings: Vec<models::GameAveragePositioning>,
    pub demos: Vec<models::GameAverageDemo>,
}

impl GameAverageBatch {
    pub fn push(&mut self, rows: GameAverageRows) {
        self.base.push(rows.base);
        self.cores.push(rows.core);
        self.boosts.push(rows.boost);
        self.movements.push(rows.movement);
        self.positionings.push(rows.positioning);
        self.demos.push(rows.demo);
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentBatch {
    pub teams: Vec<models::Team>,
    pub matches: Vec<models::Match>,
    pub opponents: Vec<models::MatchOpponent>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayBatch {
    pub groups: Vec<models::Group>,
    pub players: Vec<models::Player>,
    pub cumulatives: CumulativeBatch,
    pub game_averages: GameAverageBatch,
}

pub fn team_row(participant: &Participant, bc_team_id: Option<String>) -> models::Team {
    models::Team {
        id: participant.id.clone(),
        name: participant.name.clone(),
        bc_team_id,
    }
}

/// The match itself and one row per opponent slot, in source order.
///
/// A slot that is not decided yet has no participant and keeps a `NULL`
/// participant id.
pub fn match_rows(m: &Match) -> (models::Match, Vec<models::MatchOpponent>) {
    let row = models::Match {
        id: m.id.clone(),
        status: m.status.clone(),
        stage_id: m.stage_id.clone(),
        group_id: m.group_id.clone(),
        round_id: m.round_id.clone(),
        number: m.number,
        match_type: m.match_type.clone(),
        scheduled_datetime: m.scheduled_datetime.map(|d| d.with_timezone(&Utc)),
        public_note: m.public_note.clone(),
        private_note: m.private_note.clone(),
        played_at: m.played_at.map(|d| d.with_timezone(&Utc)),
        report_closed: m.report_closed,
    };

    let opponents = m
        .opponents
        .iter()
        .map(|opponent| models::MatchOpponent {
            match_id: m.id.clone(),
            number: opponent.number,
            position: opponent.position,
            result: opponent.result.clone(),
            rank: opponent.rank,
            forfeit: opponent.forfeit,
            score: opponent.score,
            participant_id: opponent.participant.as_ref().map(|p| p.id.clone()),
        })
        .collect();

    (row, opponents)
}

pub fn group_row(group: &ReplayGroup, parent_id: Option<&str>) -> models::Group {
    models::Group {
        id: group.id.clone(),
        name: group.name.clone(),
        parent_group_id: parent_id.map(str::to_owned),
        created: group.created.with_timezone(&Utc),
    }
}

pub fn player_row(player: &ReplayPlayer) -> models::Player {
    models::Player {
        platform: player.platform.clone(),
        id: player.id.clone(),
        name: player.name.clone(),
        team_id: player.team.clone(),
    }
}

pub fn cumulative_rows(group_id: &str, player: &ReplayPlayer, ids: StatIds) -> CumulativeRows {
    let stats = &player.cumulative;

    CumulativeRows {
        base: models::Cumulative {
            id: ids.id,
            group_id: group_id.to_owned(),
            player_platform: player.platform.clone(),
            player_id: player.id.clone(),
            games: stats.games,
            wins: stats.wins,
            win_percentage: stats.win_percentage,
            play_duration: stats.play_duration,
            core_id: ids.core,
            boost_id: ids.boost,
            movement_id: ids.movement,
            positioning_id: ids.positioning,
            demo_id: ids.demo,
        },
        core: models::CumulativeCore::from_block(ids.core, &stats.core),
        boost: models::CumulativeBoost::from_block(ids.boost, &stats.boost),
        movement: models::CumulativeMovement::from_block(ids.movement, &stats.movement),
        positioning: models::CumulativePositioning::from_block(ids.positioning, &stats.positioning),
        demo: models::CumulativeDemo::from_block(ids.demo, &stats.demo),
    }
}

pub fn game_average_rows(group_id: &str, player: &ReplayPlayer, ids: StatIds) -> GameAverageRows {
    let stats = &player.game_average;

    GameAverageRows {
        base: models::GameAverage {
            id: ids.id,
            group_id: group_id.to_owned(),
            player_platform: player.platform.clone(),
            player_id: player.id.clone(),
            core_id: ids.core,
            boost_id: ids.boost,
            movement_id: ids.movement,
            positioning_id: ids.positioning,
            demo_id: ids.demo,
        },
        core: models::GameAverageCore::from_block(ids.core, &stats.core),
        boost: models::GameAverageBoost::from_block(ids.boost, &stats.boost),
        movement: models::GameAverageMovement::from_block(ids.movement, &stats.movement),
        positioning: models::GameAveragePositioning::from_block(ids.positioning, &stats.positioning),
        demo: models::GameAverageDemo::from_block(ids.demo, &stats.demo),
    }
}

/// Every `(group, player)` pair that gets a stat row, root group first and
/// then the children in creation order.
pub fn stat_subjects(snapshot: &ReplaySnapshot) -> Vec<(&ReplayGroup, &ReplayPlayer)> {
    std::iter::once(&snapshot.root)
        .chain(snapshot.children.iter())
        .flat_map(|group| group.players.iter().map(move |player| (group, player)))
        .collect()
}

pub fn tournament_batch<F>(
    participants: &[Participant],
    matches: &[Match],
    mut bc_team_id: F,
) -> TournamentBatch
where
    F: FnMut(&Participant) -> Option<String>,
{
    let teams = participants
        .iter()
        .map(|participant| team_row(participant, bc_team_id(participant)))
        .collect();

    let mut batch = TournamentBatch {
        teams,
        ..Default::default()
    };
    for m in matches {
        let (row, opponents) = match_rows(m);
        batch.matches.push(row);
        batch.opponents.extend(opponents);
    }

    batch
}

/// Flattens a replay snapshot.
///
/// `cumulative_ids` and `game_average_ids` line up with [`stat_subjects`], the
/// caller has to allocate exactly one entry per subject.
pub fn replay_batch(
    snapshot: &ReplaySnapshot,
    cumulative_ids: &[StatIds],
    game_average_ids: &[StatIds],
) -> ReplayBatch {
    let mut batch = ReplayBatch::default();

    batch.groups.push(group_row(&snapshot.root, None));
    batch.groups.extend(
        snapshot
            .children
            .iter()
            .map(|child| group_row(child, Some(&snapshot.root.id))),
    );

    let subjects = stat_subjects(snapshot);

    let mut seen = HashSet::new();
    for (_, player) in subjects.iter() {
        if seen.insert((player.platform.as_str(), player.id.as_str())) {
            batch.players.push(player_row(player));
        }
    }

    for (((group, player), cumulative), game_average) in subjects
        .iter()
        .zip(cumulative_ids.iter())
        .zip(game_average_ids.iter())
    {
        batch
            .cumulatives
            .push(cumulative_rows(&group.id, player, *cumulative));
        batch
            .game_averages
            .push(game_average_rows(&group.id, player, *game_average));
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn player(id: &str, payload: serde_json::Value) -> ReplayPlayer {
        let mut value = serde_json::json!({
            "platform": "steam",
            "id": id,
            "name": format!("player-{}", id),
            "team": "bc-team",
        });
        if let (Some(target), Some(extra)) = (value.as_object_mut(), payload.as_object()) {
            target.extend(extra.clone());
        }
        serde_json::from_value(value).unwrap()
    }

    fn group(id: &str, created: &str, players: Vec<ReplayPlayer>) -> ReplayGroup {
        ReplayGroup {
            id: id.to_owned(),
            name: format!("group {}", id),
            link: None,
            created: chrono::DateTime::parse_from_rfc3339(created).unwrap(),
            status: None,
            player_identification: None,
            team_identification: None,
            shared: false,
            creator: None,
            players,
            teams: Vec::new(),
        }
    }

    fn ids(base: i64) -> StatIds {
        StatIds {
            id: base,
            core: base * 10 + 1,
            boost: base * 10 + 2,
            movement: base * 10 + 3,
            positioning: base * 10 + 4,
            demo: base * 10 + 5,
        }
    }

    #[test]
    fn absent_stats_stay_null() {
        let p = player(
            "1",
            serde_json::json!({
                "cumulative": {
                    "wins": 3,
                    "core": { "score": 1200.0, "goals": null },
                },
            }),
        );

        let rows = cumulative_rows("g", &p, ids(1));

        assert_eq!(Some(3), rows.base.wins);
        assert_eq!(None, rows.base.games);
        assert_eq!(Some(1200.0), rows.core.score);
        assert_eq!(None, rows.core.goals);
        assert_eq!(None, rows.demo.taken);
        assert_eq!(None, rows.boost.bpm);
    }

    #[test]
    fn sub_rows_carry_their_own_ids() {
        let p = player("1", serde_json::json!({}));

        let rows = game_average_rows("g", &p, ids(2));

        assert_eq!(2, rows.base.id);
        assert_eq!(21, rows.base.core_id);
        assert_eq!(21, rows.core.id);
        assert_eq!(22, rows.boost.id);
        assert_eq!(23, rows.movement.id);
        assert_eq!(24, rows.positioning.id);
        assert_eq!(25, rows.demo.id);
    }

    #[test]
    fn undecided_opponent_has_no_participant() {
        let m: Match = serde_json::from_value(serde_json::json!({
            "id": "m1",
            "status": "pending",
            "stage_id": "s1",
            "group_id": "g1",
            "round_id": null,
            "number": 1,
            "type": "duel",
            "opponents": [
                { "number": 1, "position": 1, "participant": { "id": "p1", "name": "One" } },
                { "number": 2, "position": 2, "participant": null },
            ],
        }))
        .unwrap();

        let (row, opponents) = match_rows(&m);

        assert_eq!("duel", row.match_type);
        assert_eq!(None, row.played_at);
        assert_eq!(2, opponents.len());
        assert_eq!(Some("p1".to_owned()), opponents[0].participant_id);
        assert_eq!(None, opponents[1].participant_id);
    }

    #[test]
    fn replay_batch_collects_players_once() {
        let snapshot = ReplaySnapshot {
            root: group("root", "2024-05-01T10:00:00Z", vec![player("1", serde_json::json!({}))]),
            children: vec![
                group(
                    "day-1",
                    "2024-05-02T10:00:00Z",
                    vec![player("1", serde_json::json!({})), player("2", serde_json::json!({}))],
                ),
                group("day-2", "2024-05-03T10:00:00Z", vec![player("3", serde_json::json!({}))]),
            ],
        };

        let subjects = stat_subjects(&snapshot);
        assert_eq!(4, subjects.len());

        let cumulative: Vec<_> = (1..=4).map(ids).collect();
        let game_average: Vec<_> = (5..=8).map(ids).collect();
        let batch = replay_batch(&snapshot, &cumulative, &game_average);

        assert_eq!(
            vec![None, Some("root".to_owned()), Some("root".to_owned())],
            batch.groups.iter().map(|g| g.parent_group_id.clone()).collect::<Vec<_>>()
        );
        assert_eq!(
            vec!["1", "2", "3"],
            batch.players.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()
        );
        assert_eq!(
            vec!["root", "day-1", "day-1", "day-2"],
            batch
                .cumulatives
                .base
                .iter()
                .map(|c| c.group_id.as_str())
                .collect::<Vec<_>>()
        );
        assert_eq!(4, batch.game_averages.len());
        assert_eq!(81, batch.game_averages.cores[3].id);
    }
}
