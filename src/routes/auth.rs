use crate::models::{
    AuthResponse, ErrorResponse, ForgotPasswordRequest, LoginRequest, MessageResponse,
    SignupRequest, UserOut,
};
use crate::routes::{bad_request, store_error, validation_error, AppState};
use crate::services::{hash_password, issue_token, verify_password};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure auth routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/signup", web::post().to(signup))
        .route("/auth/login", web::post().to(login))
        .route("/auth/forgot", web::post().to(forgot_password));
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: "Unauthorized".to_string(),
        message: "Invalid credentials".to_string(),
        status_code: 401,
    })
}

/// Register an account: a minimal profile plus hashed credentials.
///
/// POST /api/auth/signup
async fn signup(state: web::Data<AppState>, payload: web::Json<SignupRequest>) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return validation_error(&errors);
    }

    match state.postgres.find_user_by_email(&payload.email).await {
        Ok(Some(_)) => return bad_request("Email already registered"),
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to check email {}: {}", payload.email, e);
            return store_error(&e);
        }
    }

    let password_hash = hash_password(&payload.password);

    match state
        .postgres
        .create_credentialed_user(&payload.name, &payload.email, payload.role, &password_hash)
        .await
    {
        Ok(user) => {
            tracing::info!("Registered user {} ({})", user.id, payload.email);
            let token = issue_token(&payload.email, user.id);
            HttpResponse::Created().json(AuthResponse {
                user: UserOut::from(user),
                token,
            })
        }
        Err(e) => {
            tracing::error!("Failed to register {}: {}", payload.email, e);
            store_error(&e)
        }
    }
}

/// Exchange credentials for the profile and an opaque token.
///
/// POST /api/auth/login
async fn login(state: web::Data<AppState>, payload: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return validation_error(&errors);
    }

    let user = match state.postgres.find_user_by_email(&payload.email).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Failed to look up {}: {}", payload.email, e);
            return store_error(&e);
        }
    };

    let Some(user) = user else {
        return unauthorized();
    };
    let Some(stored_hash) = user.password_hash.clone() else {
        return unauthorized();
    };
    if !verify_password(&payload.password, &stored_hash) {
        return unauthorized();
    }

    let token = issue_token(&payload.email, user.id);
    HttpResponse::Ok().json(AuthResponse {
        user: UserOut::from(user),
        token,
    })
}

/// Acknowledge a password reset request. No mail is sent.
///
/// POST /api/auth/forgot
async fn forgot_password(payload: web::Json<ForgotPasswordRequest>) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return validation_error(&errors);
    }

    HttpResponse::Ok().json(MessageResponse {
        message: format!("Password reset link sent to {}", payload.email),
    })
}
