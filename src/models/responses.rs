use crate::models::domain::{ApplicationDetail, ApplicationStatus, JobPostDetail, Role, UserRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user profile as returned by the API. Tag fields are always the split
/// list form and the password hash is never exposed.
#[derive(Debug, Clone, Serialize)]
pub struct UserOut {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub profile_photo: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub experience: Option<String>,
    pub startups: Option<String>,
    pub portfolio: Vec<String>,
    pub resume_url: Option<String>,
    pub looking_for_cofounder: bool,
    pub availability: Option<String>,
    pub skills: Vec<String>,
    pub looking_for: Vec<String>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub role: Role,
    pub founder_type: Option<String>,
    pub stage_preference: Option<String>,
    pub commitment_level: Option<String>,
    pub preferences: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for UserOut {
    fn from(user: UserRecord) -> Self {
        Self {
            portfolio: user.portfolio_list(),
            skills: user.skills_list(),
            looking_for: user.looking_for_list(),
            id: user.id,
            name: user.name,
            email: user.email,
            profile_photo: user.profile_photo,
            headline: user.headline,
            bio: user.bio,
            experience: user.experience,
            startups: user.startups,
            resume_url: user.resume_url,
            looking_for_cofounder: user.looking_for_cofounder,
            availability: user.availability,
            location: user.location,
            time_zone: user.time_zone,
            role: user.role,
            founder_type: user.founder_type,
            stage_preference: user.stage_preference,
            commitment_level: user.commitment_level,
            preferences: user.preferences,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobPostOut {
    pub id: i32,
    pub title: String,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub role: Role,
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub work_style: Option<String>,
    pub availability: Option<String>,
    pub timeline: Option<String>,
    pub compensation: Option<String>,
    pub owner_id: i32,
    pub owner_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<JobPostDetail> for JobPostOut {
    fn from(post: JobPostDetail) -> Self {
        Self {
            skills: post.skills_list(),
            id: post.id,
            title: post.title,
            headline: post.headline,
            description: post.description,
            role: post.role,
            location: post.location,
            time_zone: post.time_zone,
            work_style: post.work_style,
            availability: post.availability,
            timeline: post.timeline,
            compensation: post.compensation,
            owner_id: post.owner_id,
            owner_name: post.owner_name,
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobApplicationOut {
    pub id: i32,
    pub job_post_id: i32,
    pub applicant_id: i32,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub created_at: DateTime<Utc>,
    pub applicant_name: Option<String>,
    pub job_title: Option<String>,
}

impl From<ApplicationDetail> for JobApplicationOut {
    fn from(application: ApplicationDetail) -> Self {
        Self {
            id: application.id,
            job_post_id: application.job_post_id,
            applicant_id: application.applicant_id,
            status: application.status,
            cover_letter: application.cover_letter,
            created_at: application.created_at,
            applicant_name: application.applicant_name,
            job_title: application.job_title,
        }
    }
}

/// Signup/login response: the profile plus an opaque token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserOut,
    pub token: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Service identity response
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
}

/// Plain acknowledgement response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_out_splits_tags_and_hides_password() {
        let record = UserRecord {
            id: 3,
            name: "Samira".to_string(),
            password_hash: Some("deadbeef".to_string()),
            skills: Some("Next.js,React".to_string()),
            looking_for: Some("Product strategy".to_string()),
            ..UserRecord::default()
        };

        let out = UserOut::from(record);
        assert_eq!(out.skills, vec!["Next.js", "React"]);
        assert_eq!(out.looking_for, vec!["Product strategy"]);

        let json = serde_json::to_value(&out).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
