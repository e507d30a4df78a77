use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use launchcircle_api::config::Settings;
use launchcircle_api::core::{Matcher, ScoringWeights};
use launchcircle_api::models::ErrorResponse;
use launchcircle_api::routes::{configure_routes, AppState};
use launchcircle_api::services::{seed_database, PostgresClient};
use std::sync::Arc;
use tracing::info;

/// Handle JSON payload errors with the API's JSON error contract
fn handle_json_payload_error(
    err: actix_web::error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let body = ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    };
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
        .into()
}

/// Handle query payload errors
fn handle_query_payload_error(
    err: actix_web::error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let body = ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    };
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
        .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting LaunchCircle API...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize PostgreSQL client (runs migrations on startup)
    let postgres = Arc::new(
        PostgresClient::from_settings(
            &settings.database.url,
            settings.database.max_connections,
            settings.database.min_connections,
        )
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to connect to PostgreSQL: {}", e);
            panic!("PostgreSQL connection error: {}", e);
        }),
    );

    info!("PostgreSQL client initialized");

    // Seed demo data when the database is empty
    if settings.seed.enabled {
        if let Err(e) = seed_database(&postgres).await {
            tracing::error!("Failed to seed database: {}", e);
        }
    }

    // Initialize matcher with configured weights and limits
    let weights = ScoringWeights {
        skills: settings.matching.weights.skills,
        interests: settings.matching.weights.interests,
    };
    let matcher = Matcher::new(
        weights,
        settings.matching.default_limit,
        settings.matching.max_limit,
    );

    info!(
        "Matcher initialized (weights: skills={}, interests={})",
        weights.skills, weights.interests
    );

    // Build application state
    let app_state = AppState { postgres, matcher };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    let origins: Vec<String> = settings
        .cors
        .allowed_origins
        .clone()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = if origins.is_empty() {
            Cors::permissive()
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();
            for origin in &origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
