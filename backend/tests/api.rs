use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use backend::api::AppState;
use backend::reload::ReloadPolicy;
use backend::storage::{MemoryStore, Storage};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

mod fixtures;

fn app(store: Arc<MemoryStore>, upstream_url: &str) -> axum::Router {
    let state = AppState {
        storage: store.clone(),
        toornament: Arc::new(backend::toornament_api::Client::new(
            upstream_url.to_owned(),
            "api-key".to_owned(),
            "client-id".to_owned(),
            "client-secret".to_owned(),
        )),
        ballchasing: Arc::new(backend::ballchasing_api::Client::new(
            upstream_url.to_owned(),
            "bc-key".to_owned(),
        )),
        reloader: fixtures::fake_reloader(store, ReloadPolicy::Exclusive),
    };

    axum::Router::new().nest("/api", backend::api::router(state))
}

async fn json<T>(response: axum::response::Response) -> T
where
    T: serde::de::DeserializeOwned,
{
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn wait_for_history(store: &MemoryStore, task_id: uuid::Uuid, entries: usize) {
    for _ in 0..1000 {
        if store.task_history(task_id).await.unwrap().len() >= entries {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("Task {} did not finish", task_id);
}

#[tokio::test]
async fn reload_then_read_task_status() {
    let store = Arc::new(MemoryStore::new());
    let app = app(store.clone(), "http://127.0.0.1:9");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/reload/tournaments/T1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(StatusCode::ACCEPTED, response.status());
    let accepted: common::TaskAccepted = json(response).await;
    assert_eq!("toornament", accepted.source);

    wait_for_history(&store, accepted.task_id, 2).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/api/tasks/{}", accepted.task_id)))
        .await
        .unwrap();
    assert_eq!(StatusCode::OK, response.status());
    let statuses: Vec<common::TaskStatus> = json(response).await;
    assert_eq!(
        vec![common::TaskState::Started, common::TaskState::Ended],
        statuses.iter().map(|s| s.state).collect::<Vec<_>>()
    );
    assert!(statuses.iter().all(|s| s.task_id == accepted.task_id));
}

#[tokio::test]
async fn unknown_task() {
    let app = app(Arc::new(MemoryStore::new()), "http://127.0.0.1:9");

    let response = app
        .oneshot(get(&format!("/api/tasks/{}", uuid::Uuid::now_v7())))
        .await
        .unwrap();

    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn stream_slots_can_be_reassigned() {
    let store = Arc::new(MemoryStore::new());
    let app = app(store.clone(), "http://127.0.0.1:9");

    let put = |slot: i32, team_id: Option<&str>| {
        Request::builder()
            .method("PUT")
            .uri(format!("/api/stream/slots/{}", slot))
            .header("content-type", "application/json")
            .body(Body::from(serde_json::json!({ "team_id": team_id }).to_string()))
            .unwrap()
    };

    for request in [put(2, Some("p2")), put(1, Some("p1")), put(2, None)] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(StatusCode::OK, response.status());
    }

    let response = app.clone().oneshot(get("/api/stream/slots")).await.unwrap();
    let slots: Vec<common::StreamSlot> = json(response).await;

    assert_eq!(
        vec![
            common::StreamSlot {
                slot: 1,
                team_id: Some("p1".to_owned()),
            },
            common::StreamSlot { slot: 2, team_id: None },
        ],
        slots
    );
}

#[tokio::test]
async fn leaderboards_after_reload() {
    let store = Arc::new(MemoryStore::new());
    let reloader = fixtures::fake_reloader(store.clone(), ReloadPolicy::Exclusive);
    reloader.spawn_replays("league").wait().await.unwrap();
    let app = app(store, "http://127.0.0.1:9");

    let response = app.clone().oneshot(get("/api/leaderboard/daily")).await.unwrap();
    assert_eq!(StatusCode::OK, response.status());
    let boards: Vec<common::leaderboard::DayBoard> = json(response).await;
    assert_eq!(2, boards.len());
    assert_eq!(3, boards[0].players.len());

    let response = app.oneshot(get("/api/leaderboard/overall")).await.unwrap();
    assert_eq!(StatusCode::OK, response.status());
    let overall: Vec<common::leaderboard::OverallScore> = json(response).await;
    assert!(overall.is_empty());
}

#[tokio::test]
async fn replay_group_proxy() {
    let mut server = mockito::Server::new_async().await;
    let _group = server
        .mock("GET", "/groups/league")
        .match_header("authorization", "bc-key")
        .with_status(200)
        .with_body(fixtures::group_json("league", "League", "2024-05-01T10:00:00Z", Vec::new()).to_string())
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/groups/gone")
        .with_status(500)
        .create_async()
        .await;
    let app = app(Arc::new(MemoryStore::new()), &server.url());

    let response = app.clone().oneshot(get("/api/replays/groups/league")).await.unwrap();
    assert_eq!(StatusCode::OK, response.status());
    let group: serde_json::Value = json(response).await;
    assert_eq!("League", group["name"]);

    let response = app.oneshot(get("/api/replays/groups/gone")).await.unwrap();
    assert_eq!(StatusCode::BAD_GATEWAY, response.status());
    let error: common::ErrorRecord = json(response).await;
    assert_eq!(common::ErrorKind::Upstream, error.kind);
}

#[tokio::test]
async fn tournament_proxy_reports_auth_failure() {
    let mut server = mockito::Server::new_async().await;
    let _token = server
        .mock("POST", "/oauth/v2/token")
        .with_status(401)
        .create_async()
        .await;
    let app = app(Arc::new(MemoryStore::new()), &server.url());

    let response = app.oneshot(get("/api/tournaments/T1/participants")).await.unwrap();

    assert_eq!(StatusCode::BAD_GATEWAY, response.status());
    let error: common::ErrorRecord = json(response).await;
    assert_eq!(common::ErrorKind::Auth, error.kind);
}
