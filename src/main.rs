use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fyyur_server::config::Config;
use fyyur_server::routes::create_routes;
use fyyur_server::{db, AppState};

const DEFAULT_LOG_FILTER: &str = "fyyur_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    let pool = db::connect(&config)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Successfully connected to database");

    db::migrate(&pool).await.expect("Failed to run migrations");

    tracing::info!("Migrations run successfully");

    let addr = config.bind_addr();
    let app = create_routes(AppState::new(pool), &config);

    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
