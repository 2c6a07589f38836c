use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use storefront_api::{app, AppState};
use storefront_gateway::StripeClient;
use storefront_store::{DbClient, PgProductRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = storefront_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting storefront API on port {}", config.server.port);

    // Database connection
    let db = DbClient::new(config.database.url.expose_secret())
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    // Payment gateway client
    let gateway = StripeClient::new(
        &config.gateway.api_base_url,
        config.gateway.secret_key.clone(),
        Duration::from_secs(config.gateway.timeout_seconds),
    )
    .expect("Failed to build gateway client");

    let app_state = AppState {
        products: Arc::new(PgProductRepository::new(db.pool.clone())),
        gateway: Arc::new(gateway),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
