use axum::extract::{Path, State};
use axum::Json;

use super::AppState;
use crate::ballchasing_api::ReplayGroup;
use crate::Error;

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/groups/:gid", axum::routing::get(group))
        .route("/groups/:gid/children", axum::routing::get(children))
}

#[tracing::instrument(skip(state))]
async fn group(State(state): State<AppState>, Path(gid): Path<String>) -> Result<Json<ReplayGroup>, Error> {
    Ok(Json(state.ballchasing.get_group(&gid).await?))
}

#[tracing::instrument(skip(state))]
async fn children(State(state): State<AppState>, Path(gid): Path<String>) -> Result<Json<Vec<ReplayGroup>>, Error> {
    Ok(Json(state.ballchasing.get_group_children(&gid).await?))
}
