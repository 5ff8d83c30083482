//! Which team is shown on which stream slot.

use axum::extract::{Path, State};
use axum::Json;

use super::AppState;
use crate::Error;

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/slots", axum::routing::get(slots))
        .route("/slots/:slot", axum::routing::put(assign))
}

#[tracing::instrument(skip(state))]
async fn slots(State(state): State<AppState>) -> Result<Json<Vec<common::StreamSlot>>, Error> {
    let slots = state.storage.stream_slots().await?;

    Ok(Json(
        slots
            .into_iter()
            .map(|slot| common::StreamSlot {
                slot: slot.slot,
                team_id: slot.team_id,
            })
            .collect(),
    ))
}

#[tracing::instrument(skip(state))]
async fn assign(
    State(state): State<AppState>,
    Path(slot): Path<i32>,
    Json(body): Json<common::AssignStreamSlot>,
) -> Result<Json<common::StreamSlot>, Error> {
    state
        .storage
        .assign_stream_slot(crate::models::StreamSlot {
            slot,
            team_id: body.team_id.clone(),
        })
        .await?;

    Ok(Json(common::StreamSlot {
        slot,
        team_id: body.team_id,
    }))
}
