use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::Error;

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/daily", axum::routing::get(daily))
        .route("/overall", axum::routing::get(overall))
}

#[tracing::instrument(skip(state))]
async fn daily(State(state): State<AppState>) -> Result<Json<Vec<common::leaderboard::DayBoard>>, Error> {
    Ok(Json(crate::leaderboard::scores_by_day(state.storage.as_ref()).await?))
}

#[tracing::instrument(skip(state))]
async fn overall(State(state): State<AppState>) -> Result<Json<Vec<common::leaderboard::OverallScore>>, Error> {
    Ok(Json(crate::leaderboard::scores_all(state.storage.as_ref()).await?))
}
