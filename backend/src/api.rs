use std::sync::Arc;

use crate::reload::Reloader;
use crate::storage::Storage;

pub mod leaderboard;
pub mod reload;
pub mod replays;
pub mod stream;
pub mod tasks;
pub mod tournaments;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub toornament: Arc<crate::toornament_api::Client>,
    pub ballchasing: Arc<crate::ballchasing_api::Client>,
    pub reloader: Reloader,
}

pub fn router(state: AppState) -> axum::Router {
    axum::Router::new()
        .nest("/tournaments", tournaments::router())
        .nest("/replays", replays::router())
        .nest("/reload", reload::router())
        .nest("/tasks", tasks::router())
        .nest("/leaderboard", leaderboard::router())
        .nest("/stream", stream::router())
        .with_state(state)
}
