use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::AppState;
use crate::Error;

pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/:task_id", axum::routing::get(history))
}

#[tracing::instrument(skip(state))]
async fn history(State(state): State<AppState>, Path(task_id): Path<uuid::Uuid>) -> Result<Response, Error> {
    let records = state.storage.task_history(task_id).await?;
    if records.is_empty() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let statuses: Vec<common::TaskStatus> = records.into_iter().map(crate::reload::task_status).collect();
    Ok(Json(statuses).into_response())
}
