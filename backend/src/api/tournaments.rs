//! Read-through access to the tournament API, every request authenticates
//! on its own.

use axum::extract::{Path, State};
use axum::Json;

use super::AppState;
use crate::toornament_api::{Group, Match, MatchGame, Participant, Stage, Tournament};
use crate::Error;

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", axum::routing::get(list))
        .route("/:tid/participants", axum::routing::get(participants))
        .route("/:tid/groups", axum::routing::get(groups))
        .route("/:tid/stages", axum::routing::get(stages))
        .route("/:tid/matches", axum::routing::get(matches))
        .route("/:tid/matches/:mid/games", axum::routing::get(games))
}

#[tracing::instrument(skip(state))]
async fn list(State(state): State<AppState>) -> Result<Json<Vec<Tournament>>, Error> {
    let session = state.toornament.authenticate().await?;
    Ok(Json(session.list_tournaments().await?))
}

#[tracing::instrument(skip(state))]
async fn participants(
    State(state): State<AppState>,
    Path(tid): Path<String>,
) -> Result<Json<Vec<Participant>>, Error> {
    let session = state.toornament.authenticate().await?;
    Ok(Json(session.list_participants(&tid).await?))
}

#[tracing::instrument(skip(state))]
async fn groups(State(state): State<AppState>, Path(tid): Path<String>) -> Result<Json<Vec<Group>>, Error> {
    let session = state.toornament.authenticate().await?;
    Ok(Json(session.list_groups(&tid).await?))
}

#[tracing::instrument(skip(state))]
async fn stages(State(state): State<AppState>, Path(tid): Path<String>) -> Result<Json<Vec<Stage>>, Error> {
    let session = state.toornament.authenticate().await?;
    Ok(Json(session.list_stages(&tid).await?))
}

#[tracing::instrument(skip(state))]
async fn matches(State(state): State<AppState>, Path(tid): Path<String>) -> Result<Json<Vec<Match>>, Error> {
    let session = state.toornament.authenticate().await?;
    Ok(Json(session.list_matches(&tid).await?))
}

#[tracing::instrument(skip(state))]
async fn games(
    State(state): State<AppState>,
    Path((tid, mid)): Path<(String, String)>,
) -> Result<Json<Vec<MatchGame>>, Error> {
    let session = state.toornament.authenticate().await?;
    Ok(Json(session.list_match_games(&tid, &mid).await?))
}
