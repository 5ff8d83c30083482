#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use backend::ballchasing_api::{ReplayGroup, ReplayPlayer};
use backend::reload::{ReloadPolicy, Reloader};
use backend::storage::{Crosswalk, MemoryStore, Storage};
use backend::toornament_api::{Match, Participant};
use backend::upstream::{ReplaySnapshot, ReplaySource, TournamentSnapshot, TournamentSource};
use backend::{Error, UpstreamError};

pub fn participant(id: &str, name: &str) -> Participant {
    serde_json::from_value(participant_json(id, name)).unwrap()
}

pub fn participant_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": null,
        "custom_user_identifier": null,
        "checked_in": true,
        "custom_fields": { "discord": format!("{}#0001", name) },
        "lineup": [
            { "name": format!("{} captain", name) },
        ],
    })
}

pub fn match_json(id: &str, home: &str, away: Option<&str>) -> serde_json::Value {
    let slot = |number: i32, participant: Option<&str>| {
        serde_json::json!({
            "number": number,
            "position": number,
            "result": null,
            "rank": null,
            "forfeit": false,
            "score": null,
            "participant": participant.map(|id| serde_json::json!({ "id": id, "name": id })),
        })
    };

    serde_json::json!({
        "id": id,
        "status": "pending",
        "stage_id": "stage-1",
        "group_id": "group-1",
        "round_id": "round-1",
        "number": 1,
        "type": "duel",
        "settings": {},
        "scheduled_datetime": "2024-05-04T18:00:00+09:00",
        "public_note": null,
        "private_note": null,
        "played_at": null,
        "report_closed": false,
        "opponents": [slot(1, Some(home)), slot(2, away)],
    })
}

pub fn tournament_match(id: &str, home: &str, away: Option<&str>) -> Match {
    serde_json::from_value(match_json(id, home, away)).unwrap()
}

pub fn tournament_snapshot() -> TournamentSnapshot {
    TournamentSnapshot {
        participants: vec![participant("p1", "Alpha"), participant("p2", "Bravo")],
        matches: vec![tournament_match("m1", "p1", Some("p2"))],
    }
}

pub fn player_json(id: &str, name: &str, team: &str, score: Option<f64>) -> serde_json::Value {
    serde_json::json!({
        "platform": "steam",
        "id": id,
        "name": name,
        "team": team,
        "cumulative": {
            "games": 4,
            "wins": 3,
            "win_percentage": 75.0,
            "play_duration": 1200.0,
            "core": {
                "shots": 10.0,
                "goals": 4.0,
                "saves": 2.0,
                "assists": null,
                "score": score,
                "shooting_percentage": 40.0,
            },
            "demo": { "inflicted": 1.0, "taken": 0.0 },
        },
        "game_average": {
            "core": { "goals": 1.0, "score": score.map(|s| s / 4.0) },
        },
    })
}

pub fn group_json(id: &str, name: &str, created: &str, players: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "link": format!("https://ballchasing.com/api/groups/{}", id),
        "name": name,
        "created": created,
        "status": "ok",
        "player_identification": "by-id",
        "team_identification": "by-player-clusters",
        "shared": true,
        "creator": { "steam_id": "7656", "name": "organizer" },
        "players": players,
    })
}

pub fn player(id: &str, name: &str, team: &str, score: Option<f64>) -> ReplayPlayer {
    serde_json::from_value(player_json(id, name, team, score)).unwrap()
}

pub fn group(id: &str, name: &str, created: &str, players: Vec<ReplayPlayer>) -> ReplayGroup {
    let players = players
        .into_iter()
        .map(|p| serde_json::to_value(p).unwrap())
        .collect();
    serde_json::from_value(group_json(id, name, created, players)).unwrap()
}

/// A root group without players and two days with the same three players.
pub fn replay_snapshot() -> ReplaySnapshot {
    let day = |id: &str, name: &str, created: &str, scores: [f64; 3]| {
        group(
            id,
            name,
            created,
            vec![
                player("s1", "Ace", "bc-alpha", Some(scores[0])),
                player("s2", "Blaze", "bc-alpha", Some(scores[1])),
                player("s3", "Comet", "bc-bravo", Some(scores[2])),
            ],
        )
    };

    ReplaySnapshot {
        root: group("league", "League", "2024-05-01T10:00:00Z", Vec::new()),
        children: vec![
            day("day-1", "Day 1", "2024-05-02T10:00:00Z", [300.0, 450.0, 120.0]),
            day("day-2", "Day 2", "2024-05-03T10:00:00Z", [510.0, 200.0, 200.0]),
        ],
    }
}

/// Tournament source that yields to the scheduler once before answering, so
/// concurrent reloads get a chance to interleave.
pub struct FakeTournaments {
    pub snapshot: TournamentSnapshot,
}

#[async_trait::async_trait]
impl TournamentSource for FakeTournaments {
    async fn snapshot(&self, _tournament_id: &str) -> Result<TournamentSnapshot, Error> {
        tokio::task::yield_now().await;
        Ok(self.snapshot.clone())
    }
}

pub struct FakeReplays {
    pub snapshot: ReplaySnapshot,
}

#[async_trait::async_trait]
impl ReplaySource for FakeReplays {
    async fn snapshot(&self, _group_id: &str) -> Result<ReplaySnapshot, Error> {
        tokio::task::yield_now().await;
        Ok(self.snapshot.clone())
    }
}

/// Fails every fetch with a 503 from upstream.
pub struct Unavailable;

#[async_trait::async_trait]
impl TournamentSource for Unavailable {
    async fn snapshot(&self, tournament_id: &str) -> Result<TournamentSnapshot, Error> {
        Err(UpstreamError::Status {
            url: format!("http://upstream/tournaments/{}/participants", tournament_id),
            status: 503,
        }
        .into())
    }
}

#[async_trait::async_trait]
impl ReplaySource for Unavailable {
    async fn snapshot(&self, group_id: &str) -> Result<ReplaySnapshot, Error> {
        Err(UpstreamError::Status {
            url: format!("http://upstream/groups/{}", group_id),
            status: 503,
        }
        .into())
    }
}

pub fn crosswalk() -> Arc<dyn Crosswalk> {
    Arc::new(HashMap::from([
        ("p1".to_owned(), "bc-alpha".to_owned()),
        ("p2".to_owned(), "bc-bravo".to_owned()),
    ]))
}

pub fn reloader(
    store: Arc<MemoryStore>,
    tournaments: Arc<dyn TournamentSource>,
    replays: Arc<dyn ReplaySource>,
    policy: ReloadPolicy,
) -> Reloader {
    Reloader::new(store, tournaments, replays, crosswalk(), policy)
}

pub fn fake_reloader(store: Arc<MemoryStore>, policy: ReloadPolicy) -> Reloader {
    reloader(
        store,
        Arc::new(FakeTournaments {
            snapshot: tournament_snapshot(),
        }),
        Arc::new(FakeReplays {
            snapshot: replay_snapshot(),
        }),
        policy,
    )
}

/// A [`MemoryStore`] that refuses to record the `ended` status of a task.
pub struct EndlessStore {
    pub inner: MemoryStore,
}

#[async_trait::async_trait]
impl Storage for EndlessStore {
    async fn record_task_status(&self, status: backend::models::NewTaskStatus) -> Result<(), backend::DatabaseError> {
        if status.state == "ended" {
            return Err(backend::DatabaseError::Query(diesel::result::Error::NotFound));
        }
        self.inner.record_task_status(status).await
    }

    async fn task_history(
        &self,
        task_id: uuid::Uuid,
    ) -> Result<Vec<backend::models::TaskStatusRecord>, backend::DatabaseError> {
        self.inner.task_history(task_id).await
    }

    async fn truncate(&self, table: backend::storage::Table) -> Result<(), backend::DatabaseError> {
        self.inner.truncate(table).await
    }

    async fn next_ids(&self, sequence: backend::storage::Sequence, n: usize) -> Result<Vec<i64>, backend::DatabaseError> {
        self.inner.next_ids(sequence, n).await
    }

    async fn count(&self, table: backend::storage::Table) -> Result<usize, backend::DatabaseError> {
        self.inner.count(table).await
    }

    async fn insert_teams(&self, rows: &[backend::models::Team]) -> Result<usize, backend::DatabaseError> {
        self.inner.insert_teams(rows).await
    }

    async fn insert_matches(&self, rows: &[backend::models::Match]) -> Result<usize, backend::DatabaseError> {
        self.inner.insert_matches(rows).await
    }

    async fn insert_match_opponents(
        &self,
        rows: &[backend::models::MatchOpponent],
    ) -> Result<usize, backend::DatabaseError> {
        self.inner.insert_match_opponents(rows).await
    }

    async fn insert_groups(&self, rows: &[backend::models::Group]) -> Result<usize, backend::DatabaseError> {
        self.inner.insert_groups(rows).await
    }

    async fn insert_players(&self, rows: &[backend::models::Player]) -> Result<usize, backend::DatabaseError> {
        self.inner.insert_players(rows).await
    }

    async fn insert_cumulatives(
        &self,
        batch: &backend::flatten::CumulativeBatch,
    ) -> Result<usize, backend::DatabaseError> {
        self.inner.insert_cumulatives(batch).await
    }

    async fn insert_game_averages(
        &self,
        batch: &backend::flatten::GameAverageBatch,
    ) -> Result<usize, backend::DatabaseError> {
        self.inner.insert_game_averages(batch).await
    }

    async fn daily_score_rows(&self) -> Result<Vec<backend::models::DailyScoreRow>, backend::DatabaseError> {
        self.inner.daily_score_rows().await
    }

    async fn overall_score_rows(&self) -> Result<Vec<backend::models::OverallScoreRow>, backend::DatabaseError> {
        self.inner.overall_score_rows().await
    }

    async fn metric_maxima(&self) -> Result<backend::models::MetricMaxima, backend::DatabaseError> {
        self.inner.metric_maxima().await
    }

    async fn stream_slots(&self) -> Result<Vec<backend::models::StreamSlot>, backend::DatabaseError> {
        self.inner.stream_slots().await
    }

    async fn assign_stream_slot(&self, slot: backend::models::StreamSlot) -> Result<(), backend::DatabaseError> {
        self.inner.assign_stream_slot(slot).await
    }
}
