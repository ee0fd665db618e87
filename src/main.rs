use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use carbook::config::AppConfig;
use carbook::handlers;
use carbook::services::mail::smtp::SmtpMailProvider;
use carbook::services::mail::MailProvider;
use carbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let mailer: Box<dyn MailProvider> = Box::new(SmtpMailProvider::new(
        &config.smtp_host,
        config.email_user.clone(),
        config.email_pass.clone(),
    )?);
    tracing::info!(host = %config.smtp_host, sender = %config.email_user, "SMTP mailer configured");

    let state = Arc::new(AppState { config: config.clone(), mailer });

    let app = Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/book", post(handlers::booking::book))
        .fallback(handlers::pages::index_page)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
