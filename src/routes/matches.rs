use crate::core::find_matches_for;
use crate::models::MatchListQuery;
use crate::routes::{store_error, AppState};
use actix_web::{web, HttpResponse, Responder};

/// Configure matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users/{user_id}/matches", web::get().to(find_matches));
}

/// Suggest candidates for a subject, ranked by tag-overlap score.
///
/// GET /api/users/{user_id}/matches?limit=10
///
/// An unknown subject yields an empty list rather than an error.
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    query: web::Query<MatchListQuery>,
) -> impl Responder {
    let user_id = path.into_inner();
    let limit = state.matcher.clamp_limit(query.limit);

    tracing::info!("Finding matches for user {}, limit {}", user_id, limit);

    match find_matches_for(state.postgres.as_ref(), &state.matcher, user_id, limit).await {
        Ok(outcome) => {
            tracing::debug!(
                "Returning {} matches for user {} (from {} candidates)",
                outcome.matches.len(),
                user_id,
                outcome.total_candidates
            );
            HttpResponse::Ok().json(outcome.matches)
        }
        Err(e) => {
            tracing::error!("Failed to find matches for {}: {}", user_id, e);
            store_error(&e)
        }
    }
}
