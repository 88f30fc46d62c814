mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{set_development_mode, AppError},
    router,
    service::seed::SeedService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "varsity=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    set_development_mode(config.development);

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    if config.seed_database {
        let report = SeedService::new(&db).seed().await?;
        tracing::info!(
            "Seeded {} sports, {} positions, {} disciplines and {} teams",
            report.sports,
            report.positions,
            report.disciplines,
            report.teams
        );
    }

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, the AI chat endpoint is disabled");
    }

    let app = router::router(&config).with_state(AppState::new(
        db,
        http_client,
        config.gemini_api_key.clone(),
    ));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Starting server on {}", config.bind_address());

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
