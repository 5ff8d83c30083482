pub mod models;
pub mod schema;

pub mod error;
pub use error::{AuthError, DatabaseError, Error, UpstreamError};

pub mod config;
pub use config::Config;

pub mod ballchasing_api;
pub mod toornament_api;
pub mod upstream;

pub mod flatten;
pub mod leaderboard;
pub mod reload;
pub mod storage;

pub async fn db_connection(database_url: &str) -> Result<diesel_async::AsyncPgConnection, DatabaseError> {
    use diesel_async::AsyncConnection;

    diesel_async::AsyncPgConnection::establish(database_url)
        .await
        .map_err(|e| {
            tracing::error!("Error connecting to database: {:?}", e);
            DatabaseError::Connection(e)
        })
}

pub mod api;
