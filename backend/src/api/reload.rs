//! Starting reloads. The reload runs in the background, its progress is
//! read from `/tasks/:task_id`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::AppState;

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/tournaments/:tid", axum::routing::post(tournament))
        .route("/replays/:gid", axum::routing::post(replays))
}

#[tracing::instrument(skip(state))]
async fn tournament(State(state): State<AppState>, Path(tid): Path<String>) -> (StatusCode, Json<common::TaskAccepted>) {
    let handle = state.reloader.spawn_tournament(tid);
    tracing::info!(task_id = %handle.task_id, "Dispatched tournament reload");

    (
        StatusCode::ACCEPTED,
        Json(common::TaskAccepted {
            task_id: handle.task_id,
            source: handle.source.name().to_owned(),
        }),
    )
}

#[tracing::instrument(skip(state))]
async fn replays(State(state): State<AppState>, Path(gid): Path<String>) -> (StatusCode, Json<common::TaskAccepted>) {
    let handle = state.reloader.spawn_replays(gid);
    tracing::info!(task_id = %handle.task_id, "Dispatched replay reload");

    (
        StatusCode::ACCEPTED,
        Json(common::TaskAccepted {
            task_id: handle.task_id,
            source: handle.source.name().to_owned(),
        }),
    )
}
