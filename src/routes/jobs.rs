use crate::models::{
    ApplyRequest, CreateJobPostRequest, JobApplicationOut, JobListQuery, JobPostOut,
    UpdateJobPostRequest,
};
use crate::routes::{bad_request, not_found, store_error, validation_error, AppState};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure job post and application routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/jobs")
            .route(web::get().to(list_jobs))
            .route(web::post().to(create_job)),
    )
    .service(
        web::resource("/jobs/{job_id}")
            .route(web::get().to(get_job))
            .route(web::put().to(update_job)),
    )
    .route("/jobs/{job_id}/apply", web::post().to(apply))
    .route("/jobs/{job_id}/applications", web::get().to(list_applications));
}

/// List job posts, optionally filtered by role, skills, location, and
/// work style.
///
/// GET /api/jobs
async fn list_jobs(state: web::Data<AppState>, query: web::Query<JobListQuery>) -> impl Responder {
    match state.postgres.list_job_posts(&query).await {
        Ok(posts) => {
            let out: Vec<JobPostOut> = posts.into_iter().map(JobPostOut::from).collect();
            HttpResponse::Ok().json(out)
        }
        Err(e) => {
            tracing::error!("Failed to list job posts: {}", e);
            store_error(&e)
        }
    }
}

/// Create a job post. Only job providers and founders may own posts.
///
/// POST /api/jobs
async fn create_job(
    state: web::Data<AppState>,
    payload: web::Json<CreateJobPostRequest>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return validation_error(&errors);
    }

    match state.postgres.create_job_post(&payload).await {
        Ok(post) => {
            tracing::info!("Created job post {} ({})", post.id, post.title);
            HttpResponse::Created().json(JobPostOut::from(post))
        }
        Err(e) => {
            tracing::error!("Failed to create job post: {}", e);
            store_error(&e)
        }
    }
}

/// Fetch a single job post
///
/// GET /api/jobs/{job_id}
async fn get_job(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let job_id = path.into_inner();

    match state.postgres.get_job_post(job_id).await {
        Ok(Some(post)) => HttpResponse::Ok().json(JobPostOut::from(post)),
        Ok(None) => not_found("Job not found"),
        Err(e) => {
            tracing::error!("Failed to fetch job {}: {}", job_id, e);
            store_error(&e)
        }
    }
}

/// Partially update a job post; absent fields are left untouched.
///
/// PUT /api/jobs/{job_id}
async fn update_job(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateJobPostRequest>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return validation_error(&errors);
    }

    let job_id = path.into_inner();

    match state.postgres.update_job_post(job_id, &payload).await {
        Ok(Some(post)) => HttpResponse::Ok().json(JobPostOut::from(post)),
        Ok(None) => not_found("Job not found"),
        Err(e) => {
            tracing::error!("Failed to update job {}: {}", job_id, e);
            store_error(&e)
        }
    }
}

/// Apply to a job post. Job providers cannot apply.
///
/// POST /api/jobs/{job_id}/apply
async fn apply(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    payload: web::Json<ApplyRequest>,
) -> impl Responder {
    let job_id = path.into_inner();

    if payload.job_post_id != job_id {
        return bad_request("job_post_id mismatch");
    }

    match state
        .postgres
        .apply_to_job(job_id, payload.applicant_id, payload.cover_letter.as_deref())
        .await
    {
        Ok(application) => {
            tracing::info!(
                "User {} applied to job {}",
                application.applicant_id,
                application.job_post_id
            );
            HttpResponse::Created().json(JobApplicationOut::from(application))
        }
        Err(e) => {
            tracing::error!("Failed to apply to job {}: {}", job_id, e);
            store_error(&e)
        }
    }
}

/// List applications for a job post
///
/// GET /api/jobs/{job_id}/applications
async fn list_applications(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let job_id = path.into_inner();

    match state.postgres.list_applications(job_id).await {
        Ok(applications) => {
            let out: Vec<JobApplicationOut> = applications
                .into_iter()
                .map(JobApplicationOut::from)
                .collect();
            HttpResponse::Ok().json(out)
        }
        Err(e) => {
            tracing::error!("Failed to list applications for job {}: {}", job_id, e);
            store_error(&e)
        }
    }
}
