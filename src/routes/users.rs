use crate::models::{CreateUserRequest, UpdateUserRequest, UserListQuery, UserOut};
use crate::routes::{not_found, store_error, validation_error, AppState};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure user profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_profiles))
            .route(web::post().to(create_profile)),
    )
    .service(
        web::resource("/users/{user_id}")
            .route(web::get().to(get_profile))
            .route(web::put().to(update_profile)),
    );
}

/// List profiles, optionally filtered by role, skills, location,
/// availability, and experience.
///
/// GET /api/users
async fn list_profiles(
    state: web::Data<AppState>,
    query: web::Query<UserListQuery>,
) -> impl Responder {
    match state.postgres.list_users(&query).await {
        Ok(users) => {
            let out: Vec<UserOut> = users.into_iter().map(UserOut::from).collect();
            HttpResponse::Ok().json(out)
        }
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            store_error(&e)
        }
    }
}

/// Create a profile
///
/// POST /api/users
async fn create_profile(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        tracing::info!("Validation failed for create_profile: {}", errors);
        return validation_error(&errors);
    }

    match state.postgres.create_user(&payload).await {
        Ok(user) => {
            tracing::info!("Created profile {} ({})", user.id, user.name);
            HttpResponse::Created().json(UserOut::from(user))
        }
        Err(e) => {
            tracing::error!("Failed to create profile: {}", e);
            store_error(&e)
        }
    }
}

/// Fetch a single profile
///
/// GET /api/users/{user_id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let user_id = path.into_inner();

    match state.postgres.get_user(user_id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserOut::from(user)),
        Ok(None) => not_found("User not found"),
        Err(e) => {
            tracing::error!("Failed to fetch user {}: {}", user_id, e);
            store_error(&e)
        }
    }
}

/// Partially update a profile; absent fields are left untouched.
///
/// PUT /api/users/{user_id}
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateUserRequest>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return validation_error(&errors);
    }

    let user_id = path.into_inner();

    match state.postgres.update_user(user_id, &payload).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserOut::from(user)),
        Ok(None) => not_found("User not found"),
        Err(e) => {
            tracing::error!("Failed to update user {}: {}", user_id, e);
            store_error(&e)
        }
    }
}
