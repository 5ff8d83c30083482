use std::collections::HashSet;
use std::sync::Arc;

use backend::reload::{ReloadPolicy, Source};
use backend::storage::{MemoryStore, Storage, Table};
use pretty_assertions::assert_eq;

mod fixtures;

#[tokio::test]
async fn loads_root_and_children() {
    let store = Arc::new(MemoryStore::new());
    let reloader = fixtures::fake_reloader(store.clone(), ReloadPolicy::Exclusive);

    let handle = reloader.spawn_replays("league");
    assert_eq!(Source::Ballchasing, handle.source);
    let task_id = handle.task_id;
    let summary = handle.wait().await.unwrap();

    assert_eq!(3, summary.inserted(Table::Groups));
    assert_eq!(3, summary.inserted(Table::Players));
    assert_eq!(6, summary.inserted(Table::Cumulatives));
    assert_eq!(6, summary.inserted(Table::CumulativeCores));
    assert_eq!(6, summary.inserted(Table::GameAverages));
    assert_eq!(6, summary.inserted(Table::GameAverageDemos));

    let tables = store.snapshot();
    assert_eq!(
        vec![
            ("league", None),
            ("day-1", Some("league")),
            ("day-2", Some("league")),
        ],
        tables
            .groups
            .iter()
            .map(|g| (g.id.as_str(), g.parent_group_id.as_deref()))
            .collect::<Vec<_>>()
    );

    for table in [
        Table::CumulativeBoosts,
        Table::CumulativeMovements,
        Table::CumulativePositionings,
        Table::CumulativeDemos,
        Table::GameAverageCores,
        Table::GameAverageBoosts,
        Table::GameAverageMovements,
        Table::GameAveragePositionings,
    ] {
        assert_eq!(6, store.count(table).await.unwrap(), "{}", table.name());
    }

    let history = store.task_history(task_id).await.unwrap();
    assert_eq!(
        vec!["ballchasing reload started", "ballchasing reload ended"],
        history.iter().map(|r| r.status.as_str()).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn every_stat_row_links_its_own_sub_rows() {
    let store = Arc::new(MemoryStore::new());
    let reloader = fixtures::fake_reloader(store.clone(), ReloadPolicy::Exclusive);
    reloader.spawn_replays("league").wait().await.unwrap();

    let tables = store.snapshot();
    let cumulatives = &tables.cumulatives;

    let core_ids: HashSet<i64> = cumulatives.base.iter().map(|c| c.core_id).collect();
    let demo_ids: HashSet<i64> = cumulatives.base.iter().map(|c| c.demo_id).collect();
    assert_eq!(6, core_ids.len());
    assert_eq!(6, demo_ids.len());
    assert_eq!(core_ids, cumulatives.cores.iter().map(|c| c.id).collect::<HashSet<_>>());
    assert_eq!(demo_ids, cumulatives.demos.iter().map(|d| d.id).collect::<HashSet<_>>());

    for cumulative in cumulatives.base.iter() {
        assert!(tables.groups.iter().any(|g| g.id == cumulative.group_id));
        assert!(tables
            .players
            .iter()
            .any(|p| p.platform == cumulative.player_platform && p.id == cumulative.player_id));
    }

    let averages = &tables.game_averages;
    let positioning_ids: HashSet<i64> = averages.base.iter().map(|g| g.positioning_id).collect();
    assert_eq!(
        positioning_ids,
        averages.positionings.iter().map(|p| p.id).collect::<HashSet<_>>()
    );
}

#[tokio::test]
async fn absent_numbers_stay_absent() {
    let store = Arc::new(MemoryStore::new());
    let reloader = fixtures::fake_reloader(store.clone(), ReloadPolicy::Exclusive);
    reloader.spawn_replays("league").wait().await.unwrap();

    let tables = store.snapshot();
    let core = &tables.cumulatives.cores[0];

    assert_eq!(Some(4.0), core.goals);
    assert_eq!(None, core.assists);
    assert_eq!(None, core.mvp);
    assert_eq!(Some(0.0), tables.cumulatives.demos[0].taken);
    assert!(tables.cumulatives.boosts.iter().all(|b| b.bpm.is_none()));
    assert!(tables.game_averages.cores.iter().all(|c| c.shots.is_none()));
}

#[tokio::test]
async fn reload_keeps_row_counts_and_draws_new_ids() {
    let store = Arc::new(MemoryStore::new());
    let reloader = fixtures::fake_reloader(store.clone(), ReloadPolicy::Exclusive);

    reloader.spawn_replays("league").wait().await.unwrap();
    let first = store.snapshot();
    reloader.spawn_replays("league").wait().await.unwrap();
    let second = store.snapshot();

    assert_eq!(first.groups, second.groups);
    assert_eq!(first.players, second.players);
    assert_eq!(first.cumulatives.len(), second.cumulatives.len());

    let first_max = first.cumulatives.base.iter().map(|c| c.id).max().unwrap();
    let second_min = second.cumulatives.base.iter().map(|c| c.id).min().unwrap();
    assert!(second_min > first_max);
}

#[tokio::test]
async fn player_only_in_a_child_group_is_stored() {
    let mut snapshot = fixtures::replay_snapshot();
    snapshot.children[1]
        .players
        .push(fixtures::player("s4", "Dash", "bc-bravo", Some(90.0)));

    let store = Arc::new(MemoryStore::new());
    let reloader = fixtures::reloader(
        store.clone(),
        Arc::new(fixtures::Unavailable),
        Arc::new(fixtures::FakeReplays { snapshot }),
        ReloadPolicy::Exclusive,
    );
    reloader.spawn_replays("league").wait().await.unwrap();

    let tables = store.snapshot();
    assert_eq!(
        vec!["s1", "s2", "s3", "s4"],
        tables.players.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()
    );
    assert_eq!(7, tables.cumulatives.len());
}

#[tokio::test]
async fn reload_against_the_api() {
    let mut server = mockito::Server::new_async().await;
    let group = |id: &str, created: &str, players| fixtures::group_json(id, id, created, players).to_string();

    let _root = server
        .mock("GET", "/groups/league")
        .with_status(200)
        .with_body(group("league", "2024-05-01T10:00:00Z", Vec::new()))
        .create_async()
        .await;
    let _listing = server
        .mock("GET", "/groups")
        .match_query(mockito::Matcher::UrlEncoded("group".into(), "league".into()))
        .with_status(200)
        .with_body(r#"{"list":[{"id":"day-1"},{"id":"day-2"}]}"#)
        .create_async()
        .await;
    let _day1 = server
        .mock("GET", "/groups/day-1")
        .with_status(200)
        .with_body(group(
            "day-1",
            "2024-05-02T10:00:00Z",
            vec![fixtures::player_json("s1", "Ace", "bc-alpha", Some(300.0))],
        ))
        .create_async()
        .await;
    let _day2 = server
        .mock("GET", "/groups/day-2")
        .with_status(200)
        .with_body(group(
            "day-2",
            "2024-05-03T10:00:00Z",
            vec![
                fixtures::player_json("s1", "Ace", "bc-alpha", Some(100.0)),
                fixtures::player_json("s2", "Blaze", "bc-alpha", None),
            ],
        ))
        .create_async()
        .await;

    let store = Arc::new(MemoryStore::new());
    let reloader = fixtures::reloader(
        store.clone(),
        Arc::new(fixtures::Unavailable),
        Arc::new(backend::ballchasing_api::Client::new(server.url(), "bc-key".to_owned())),
        ReloadPolicy::Exclusive,
    );

    let summary = reloader
        .reload_replays(uuid::Uuid::now_v7(), "league")
        .await
        .unwrap();

    assert_eq!(3, summary.inserted(Table::Groups));
    assert_eq!(2, summary.inserted(Table::Players));
    assert_eq!(3, summary.inserted(Table::Cumulatives));
    assert_eq!(3, summary.inserted(Table::GameAverages));
}

#[tokio::test]
async fn upstream_failure_is_recorded() {
    let store = Arc::new(MemoryStore::new());
    let reloader = fixtures::reloader(
        store.clone(),
        Arc::new(fixtures::Unavailable),
        Arc::new(fixtures::Unavailable),
        ReloadPolicy::Unguarded,
    );

    let handle = reloader.spawn_replays("league");
    let task_id = handle.task_id;
    assert!(handle.wait().await.is_err());

    let history = store.task_history(task_id).await.unwrap();
    let last = backend::reload::task_status(history[history.len() - 1].clone());
    assert_eq!(common::TaskState::Errored, last.state);
    assert!(last.status.starts_with("ballchasing reload error: "));
    assert_eq!(Some(common::ErrorKind::Upstream), last.error.map(|e| e.kind));
}
