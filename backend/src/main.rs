use dotenvy::dotenv;
use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config;
mod handlers {
    pub mod location_handlers;
}

use config::{AllowedOrigin, Config};
use handlers::location_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub config: Config,
}

fn cors_layer(origin: &AllowedOrigin) -> CorsLayer {
    let allow_origin = match origin {
        AllowedOrigin::Any => AllowOrigin::from(Any),
        AllowedOrigin::Exact(value) => AllowOrigin::exact(value.clone()),
    };
    CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

/// API routes, the built frontend as a fallback, and the shared layers.
pub fn app(state: Arc<AppState>) -> Router {
    let dist = state.config.frontend_dist.clone();
    let spa = ServeDir::new(&dist).not_found_service(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/get-location",
            get(location_handlers::get_location).options(location_handlers::location_preflight),
        )
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(&state.config.allowed_origin))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Keep the guard alive for the whole process so events get flushed.
    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        }))
    });

    tracing::info!(
        bind_addr = %config.bind_addr,
        country_header = %config.country_header,
        frontend_dist = %config.frontend_dist.display(),
        "Starting server"
    );
    if config.is_development() {
        tracing::info!("No CDN in front of a development server, location falls back to INTL");
    }

    let bind_addr = config.bind_addr;
    let state = Arc::new(AppState { config });

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
