use crate::core::matcher::ProfileStore;
use crate::core::tags::{split_csv, Tags};
use crate::models::{
    ApplicationDetail, CreateJobPostRequest, CreateUserRequest, JobListQuery, JobPostDetail, Role,
    UpdateJobPostRequest, UpdateUserRequest, UserListQuery, UserRecord,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, QueryBuilder};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

const JOB_SELECT: &str = "SELECT p.*, u.name AS owner_name \
     FROM job_posts p JOIN users u ON u.id = p.owner_id";

const APPLICATION_SELECT: &str = "SELECT a.*, u.name AS applicant_name, p.title AS job_title \
     FROM job_applications a \
     JOIN users u ON u.id = a.applicant_id \
     JOIN job_posts p ON p.id = a.job_post_id";

/// PostgreSQL client owning all persistence for users, job posts, and
/// applications. Also serves as the profile store for the matcher.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string.
    ///
    /// Migrations are applied on startup.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    // ---- users -----------------------------------------------------------

    pub async fn create_user(
        &self,
        payload: &CreateUserRequest,
    ) -> Result<UserRecord, PostgresError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (
                name, email, profile_photo, headline, bio, experience, startups,
                portfolio, resume_url, looking_for_cofounder, availability,
                skills, looking_for, location, time_zone, role, founder_type,
                stage_preference, commitment_level, preferences
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.profile_photo)
        .bind(&payload.headline)
        .bind(&payload.bio)
        .bind(&payload.experience)
        .bind(&payload.startups)
        .bind(payload.portfolio.join())
        .bind(&payload.resume_url)
        .bind(payload.looking_for_cofounder)
        .bind(&payload.availability)
        .bind(payload.skills.join())
        .bind(payload.looking_for.join())
        .bind(&payload.location)
        .bind(&payload.time_zone)
        .bind(payload.role)
        .bind(&payload.founder_type)
        .bind(&payload.stage_preference)
        .bind(&payload.commitment_level)
        .bind(&payload.preferences)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created user {} ({})", user.id, user.name);
        Ok(user)
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserRecord>, PostgresError> {
        let user = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Partial update: NULL parameters leave the stored value untouched.
    pub async fn update_user(
        &self,
        user_id: i32,
        payload: &UpdateUserRequest,
    ) -> Result<Option<UserRecord>, PostgresError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                profile_photo = COALESCE($4, profile_photo),
                headline = COALESCE($5, headline),
                bio = COALESCE($6, bio),
                experience = COALESCE($7, experience),
                startups = COALESCE($8, startups),
                portfolio = COALESCE($9, portfolio),
                resume_url = COALESCE($10, resume_url),
                looking_for_cofounder = COALESCE($11, looking_for_cofounder),
                availability = COALESCE($12, availability),
                skills = COALESCE($13, skills),
                looking_for = COALESCE($14, looking_for),
                location = COALESCE($15, location),
                time_zone = COALESCE($16, time_zone),
                role = COALESCE($17, role),
                founder_type = COALESCE($18, founder_type),
                stage_preference = COALESCE($19, stage_preference),
                commitment_level = COALESCE($20, commitment_level),
                preferences = COALESCE($21, preferences)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.profile_photo)
        .bind(&payload.headline)
        .bind(&payload.bio)
        .bind(&payload.experience)
        .bind(&payload.startups)
        .bind(payload.portfolio.as_ref().map(Tags::join))
        .bind(&payload.resume_url)
        .bind(payload.looking_for_cofounder)
        .bind(&payload.availability)
        .bind(payload.skills.as_ref().map(Tags::join))
        .bind(payload.looking_for.as_ref().map(Tags::join))
        .bind(&payload.location)
        .bind(&payload.time_zone)
        .bind(payload.role)
        .bind(&payload.founder_type)
        .bind(&payload.stage_preference)
        .bind(&payload.commitment_level)
        .bind(&payload.preferences)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn list_users(
        &self,
        filters: &UserListQuery,
    ) -> Result<Vec<UserRecord>, PostgresError> {
        let mut qb = QueryBuilder::new("SELECT * FROM users WHERE 1 = 1");

        if let Some(role) = filters.role {
            qb.push(" AND role = ").push_bind(role);
        }
        if let Some(location) = &filters.location {
            qb.push(" AND location ILIKE ")
                .push_bind(format!("%{}%", location));
        }
        if let Some(availability) = &filters.availability {
            qb.push(" AND availability ILIKE ")
                .push_bind(format!("%{}%", availability));
        }
        if let Some(experience) = &filters.experience {
            qb.push(" AND experience ILIKE ")
                .push_bind(format!("%{}%", experience));
        }
        if let Some(skills) = &filters.skills {
            // Every requested skill must appear in the stored joined text.
            for skill in split_csv(skills) {
                qb.push(" AND skills ILIKE ").push_bind(format!("%{}%", skill));
            }
        }

        qb.push(" ORDER BY id");

        let users = qb
            .build_query_as::<UserRecord>()
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    pub async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, PostgresError> {
        let user = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Minimal profile created at signup: credentials plus name and role.
    pub async fn create_credentialed_user(
        &self,
        name: &str,
        email: &str,
        role: Role,
        password_hash: &str,
    ) -> Result<UserRecord, PostgresError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, email, role, skills, password_hash)
            VALUES ($1, $2, $3, '', $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(role)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn count_users(&self) -> Result<i64, PostgresError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // ---- job posts -------------------------------------------------------

    pub async fn create_job_post(
        &self,
        payload: &CreateJobPostRequest,
    ) -> Result<JobPostDetail, PostgresError> {
        let owner = self
            .get_user(payload.owner_id)
            .await?
            .ok_or_else(|| PostgresError::InvalidInput("Owner not found".to_string()))?;

        if !owner.role.can_post_jobs() {
            return Err(PostgresError::InvalidInput(
                "Only job providers or founders can create job posts".to_string(),
            ));
        }

        let post_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO job_posts (
                title, headline, description, role, skills, location,
                time_zone, work_style, availability, timeline, compensation,
                owner_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.headline)
        .bind(&payload.description)
        .bind(payload.role)
        .bind(payload.skills.join())
        .bind(&payload.location)
        .bind(&payload.time_zone)
        .bind(&payload.work_style)
        .bind(&payload.availability)
        .bind(&payload.timeline)
        .bind(&payload.compensation)
        .bind(payload.owner_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created job post {} for owner {}", post_id, payload.owner_id);

        self.get_job_post(post_id)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("job post {}", post_id)))
    }

    pub async fn get_job_post(
        &self,
        job_post_id: i32,
    ) -> Result<Option<JobPostDetail>, PostgresError> {
        let post = sqlx::query_as::<_, JobPostDetail>(&format!("{} WHERE p.id = $1", JOB_SELECT))
            .bind(job_post_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    /// Partial update: NULL parameters leave the stored value untouched.
    pub async fn update_job_post(
        &self,
        job_post_id: i32,
        payload: &UpdateJobPostRequest,
    ) -> Result<Option<JobPostDetail>, PostgresError> {
        let updated: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE job_posts SET
                title = COALESCE($2, title),
                headline = COALESCE($3, headline),
                description = COALESCE($4, description),
                role = COALESCE($5, role),
                skills = COALESCE($6, skills),
                location = COALESCE($7, location),
                time_zone = COALESCE($8, time_zone),
                work_style = COALESCE($9, work_style),
                availability = COALESCE($10, availability),
                timeline = COALESCE($11, timeline),
                compensation = COALESCE($12, compensation)
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(job_post_id)
        .bind(&payload.title)
        .bind(&payload.headline)
        .bind(&payload.description)
        .bind(payload.role)
        .bind(payload.skills.as_ref().map(Tags::join))
        .bind(&payload.location)
        .bind(&payload.time_zone)
        .bind(&payload.work_style)
        .bind(&payload.availability)
        .bind(&payload.timeline)
        .bind(&payload.compensation)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(id) => self.get_job_post(id).await,
            None => Ok(None),
        }
    }

    pub async fn list_job_posts(
        &self,
        filters: &JobListQuery,
    ) -> Result<Vec<JobPostDetail>, PostgresError> {
        let mut qb = QueryBuilder::new(format!("{} WHERE 1 = 1", JOB_SELECT));

        if let Some(role) = filters.role {
            qb.push(" AND p.role = ").push_bind(role);
        }
        if let Some(location) = &filters.location {
            qb.push(" AND p.location ILIKE ")
                .push_bind(format!("%{}%", location));
        }
        if let Some(work_style) = &filters.work_style {
            qb.push(" AND p.work_style ILIKE ")
                .push_bind(format!("%{}%", work_style));
        }
        if let Some(skills) = &filters.skills {
            for skill in split_csv(skills) {
                qb.push(" AND p.skills ILIKE ")
                    .push_bind(format!("%{}%", skill));
            }
        }

        qb.push(" ORDER BY p.id");

        let posts = qb
            .build_query_as::<JobPostDetail>()
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    // ---- applications ----------------------------------------------------

    pub async fn apply_to_job(
        &self,
        job_post_id: i32,
        applicant_id: i32,
        cover_letter: Option<&str>,
    ) -> Result<ApplicationDetail, PostgresError> {
        let post = self.get_job_post(job_post_id).await?;
        let applicant = self.get_user(applicant_id).await?;

        let (Some(_post), Some(applicant)) = (post, applicant) else {
            return Err(PostgresError::InvalidInput(
                "Job post or applicant not found".to_string(),
            ));
        };

        if applicant.role == Role::JobProvider {
            return Err(PostgresError::InvalidInput(
                "Job providers cannot apply to roles".to_string(),
            ));
        }

        let application_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO job_applications (job_post_id, applicant_id, cover_letter)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(job_post_id)
        .bind(applicant_id)
        .bind(cover_letter)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            "Recorded application {} ({} -> job {})",
            application_id,
            applicant_id,
            job_post_id
        );

        self.get_application(application_id)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("application {}", application_id)))
    }

    pub async fn get_application(
        &self,
        application_id: i32,
    ) -> Result<Option<ApplicationDetail>, PostgresError> {
        let application = sqlx::query_as::<_, ApplicationDetail>(&format!(
            "{} WHERE a.id = $1",
            APPLICATION_SELECT
        ))
        .bind(application_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(application)
    }

    pub async fn list_applications(
        &self,
        job_post_id: i32,
    ) -> Result<Vec<ApplicationDetail>, PostgresError> {
        let applications = sqlx::query_as::<_, ApplicationDetail>(&format!(
            "{} WHERE a.job_post_id = $1 ORDER BY a.id",
            APPLICATION_SELECT
        ))
        .bind(job_post_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }
}

impl ProfileStore for PostgresClient {
    type Error = PostgresError;

    async fn get_profile(&self, user_id: i32) -> Result<Option<UserRecord>, PostgresError> {
        self.get_user(user_id).await
    }

    async fn list_profiles(&self, exclude_id: i32) -> Result<Vec<UserRecord>, PostgresError> {
        let users =
            sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE id <> $1 ORDER BY id")
                .bind(exclude_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(users)
    }
}
