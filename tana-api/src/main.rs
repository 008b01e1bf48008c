use std::net::SocketAddr;
use std::sync::Arc;

use tana_api::{
    app,
    state::{AppState, AuthConfig},
};
use tana_catalog::{InMemoryTripRepository, RandomAvailability, SearchService, UniformJitter};
use tana_store::UserStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tana_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = tana_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Tana API on port {}", config.server.port);

    // Trip catalog: configured file, or the embedded seed
    let repo = match &config.catalog.trips_file {
        Some(path) => {
            InMemoryTripRepository::from_file(path).expect("Failed to load trip catalog")
        }
        None => tana_catalog::seed::seed_repository().expect("Failed to load built-in trip catalog"),
    };
    let repo = Arc::new(repo);

    let search = SearchService::new(
        repo.clone(),
        Arc::new(UniformJitter::new(config.simulation.jitter_band)),
        Arc::new(RandomAvailability::new(config.simulation.max_taken_seats)),
    );

    let app_state = AppState {
        search: Arc::new(search),
        trips: repo,
        users: Arc::new(UserStore::new()),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
