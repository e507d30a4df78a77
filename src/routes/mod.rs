// Route exports
pub mod auth;
pub mod jobs;
pub mod matches;
pub mod users;

use crate::core::Matcher;
use crate::models::{ErrorResponse, HealthResponse, InfoResponse};
use crate::services::{PostgresClient, PostgresError};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
}

/// Configure all API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health_check))
            .route("/info", web::get().to(info))
            .configure(users::configure)
            .configure(matches::configure)
            .configure(jobs::configure)
            .configure(auth::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.postgres.health_check().await.unwrap_or(false);
    let status = if db_healthy { "ok" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Service identity endpoint
async fn info() -> impl Responder {
    HttpResponse::Ok().json(InfoResponse {
        name: "LaunchCircle API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Map store errors onto the JSON error contract.
pub(crate) fn store_error(err: &PostgresError) -> HttpResponse {
    match err {
        PostgresError::InvalidInput(message) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid request".to_string(),
            message: message.clone(),
            status_code: 400,
        }),
        PostgresError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: message.clone(),
            status_code: 404,
        }),
        other => HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Database error".to_string(),
            message: other.to_string(),
            status_code: 500,
        }),
    }
}

pub(crate) fn validation_error(errors: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

pub(crate) fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not found".to_string(),
        message: message.to_string(),
        status_code: 404,
    })
}

pub(crate) fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid request".to_string(),
        message: message.to_string(),
        status_code: 400,
    })
}
