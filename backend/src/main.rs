use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

const MIGRATIONS: diesel_async_migrations::EmbeddedMigrations = diesel_async_migrations::embed_migrations!("../migrations/");

async fn run_migrations(connection: &mut diesel_async::AsyncPgConnection) -> Result<(), Box<dyn std::error::Error>> {
    MIGRATIONS
        .run_pending_migrations(connection)
        .await
        .map_err(|e| format!("Running migrations: {:?}", e))?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let config = backend::Config::parse();

    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            ["backend", "standings", "tower_http"]
                .iter()
                .any(|target| meta.target().contains(target))
        }));
    tracing::subscriber::set_global_default(registry)?;

    tracing::info!("Starting...");

    tracing::info!("Applying Migrations");
    run_migrations(&mut backend::db_connection(&config.database_url).await?).await?;
    tracing::info!("Completed Migrations");

    let toornament = Arc::new(backend::toornament_api::Client::new(
        config.toornament_url.clone(),
        config.toornament_api_key.clone(),
        config.toornament_client_id.clone(),
        config.toornament_client_secret.clone(),
    ));
    let ballchasing = Arc::new(backend::ballchasing_api::Client::new(
        config.ballchasing_url.clone(),
        config.ballchasing_api_key.clone(),
    ));
    let store = Arc::new(backend::storage::PgStore::new(config.database_url.clone()));

    let policy = config.reload_policy();
    tracing::info!(?policy, "Reload policy");

    let reloader = backend::reload::Reloader::new(
        store.clone(),
        toornament.clone(),
        ballchasing.clone(),
        store.clone(),
        policy,
    );

    let router = axum::Router::new()
        .nest(
            "/api",
            backend::api::router(backend::api::AppState {
                storage: store,
                toornament,
                ballchasing,
                reloader,
            }),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, router).await?;

    Ok(())
}
