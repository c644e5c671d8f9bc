use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aarushi_tts_backend::controllers::speech::SpeechController;
use aarushi_tts_backend::controllers::user::UserController;
use aarushi_tts_backend::domain::speech::SpeechService;
use aarushi_tts_backend::domain::user::UserService;
use aarushi_tts_backend::infrastructure::config::{Config, LogFormat};
use aarushi_tts_backend::infrastructure::db::{check_connection, create_pool};
use aarushi_tts_backend::infrastructure::http::start_http_server;
use aarushi_tts_backend::infrastructure::repositories::{SpeechRepository, UserRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TTS backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject db pool)
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let speech_repo = Arc::new(SpeechRepository::new(pool.clone()));

    // 2. Instantiate services (inject repositories)
    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let speech_service = Arc::new(SpeechService::new(user_repo.clone(), speech_repo.clone()));

    // 3. Instantiate controllers (inject services)
    let user_controller = Arc::new(UserController::new(user_service));
    let speech_controller = Arc::new(SpeechController::new(speech_service));

    // Start HTTP server with all routes
    start_http_server(pool, config, user_controller, speech_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "aarushi_tts_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "aarushi_tts_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
