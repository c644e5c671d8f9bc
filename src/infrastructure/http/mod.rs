use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::{
    controllers::{health, speech::SpeechController, text, user::UserController},
    infrastructure::middleware::request_id_middleware,
};

/// Assemble the application router. Separate from server startup so tests can
/// drive it in-process.
pub fn build_router(
    pool: Arc<DbPool>,
    user_controller: Arc<UserController>,
    speech_controller: Arc<SpeechController>,
) -> Router {
    // Text processing (stateless, no database)
    let text_routes = Router::new().route("/text/process", post(text::process_text));

    // User routes
    let user_routes = Router::new()
        .route("/user/register", post(UserController::register))
        .route("/user/login", post(UserController::login))
        .route("/user/:user_id", patch(UserController::update))
        .with_state(user_controller);

    // Speech routes
    let speech_routes = Router::new()
        .route("/speech/synthesize", post(SpeechController::synthesize))
        .with_state(speech_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(text_routes)
        .merge(user_routes)
        .merge(speech_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    user_controller: Arc<UserController>,
    speech_controller: Arc<SpeechController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(pool, user_controller, speech_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
