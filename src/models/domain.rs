use crate::core::tags::split_csv;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marketplace roles a user can sign up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "role_type", rename_all = "snake_case")]
pub enum Role {
    Founder,
    SoftwareDeveloper,
    SoftwareEngineer,
    Designer,
    ProductManager,
    Marketer,
    Growth,
    Sales,
    Operations,
    JobSeeker,
    JobProvider,
}

impl Role {
    /// Only these roles may own job posts.
    pub fn can_post_jobs(self) -> bool {
        matches!(self, Role::JobProvider | Role::Founder)
    }
}

/// Lifecycle of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Reviewed,
    Interviewing,
    Rejected,
    Accepted,
}

/// A user row as stored. Tag collections (`skills`, `looking_for`,
/// `portfolio`) are kept comma-joined; the `*_list` helpers split them
/// back into wire form.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub profile_photo: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub experience: Option<String>,
    pub startups: Option<String>,
    pub portfolio: Option<String>,
    pub resume_url: Option<String>,
    pub looking_for_cofounder: bool,
    pub availability: Option<String>,
    pub skills: Option<String>,
    pub looking_for: Option<String>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub role: Role,
    pub founder_type: Option<String>,
    pub stage_preference: Option<String>,
    pub commitment_level: Option<String>,
    pub preferences: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn skills_list(&self) -> Vec<String> {
        split_csv(self.skills.as_deref().unwrap_or(""))
    }

    pub fn looking_for_list(&self) -> Vec<String> {
        split_csv(self.looking_for.as_deref().unwrap_or(""))
    }

    pub fn portfolio_list(&self) -> Vec<String> {
        split_csv(self.portfolio.as_deref().unwrap_or(""))
    }
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            email: None,
            password_hash: None,
            profile_photo: None,
            headline: None,
            bio: None,
            experience: None,
            startups: None,
            portfolio: None,
            resume_url: None,
            looking_for_cofounder: false,
            availability: None,
            skills: None,
            looking_for: None,
            location: None,
            time_zone: None,
            role: Role::JobSeeker,
            founder_type: None,
            stage_preference: None,
            commitment_level: None,
            preferences: None,
            created_at: Utc::now(),
        }
    }
}

/// A job post row joined with its owner's display name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobPostDetail {
    pub id: i32,
    pub title: String,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub role: Role,
    pub skills: Option<String>,
    pub location: Option<String>,
    pub time_zone: Option<String>,
    pub work_style: Option<String>,
    pub availability: Option<String>,
    pub timeline: Option<String>,
    pub compensation: Option<String>,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub owner_name: Option<String>,
}

impl JobPostDetail {
    pub fn skills_list(&self) -> Vec<String> {
        split_csv(self.skills.as_deref().unwrap_or(""))
    }
}

/// An application row joined with applicant and job display fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicationDetail {
    pub id: i32,
    pub job_post_id: i32,
    pub applicant_id: i32,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub created_at: DateTime<Utc>,
    pub applicant_name: Option<String>,
    pub job_title: Option<String>,
}

/// One ranked candidate, built fresh per matching request.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSuggestion {
    pub user_id: i32,
    pub name: String,
    pub headline: Option<String>,
    pub founder_type: Option<String>,
    pub stage_preference: Option<String>,
    pub time_zone: Option<String>,
    pub commitment_level: Option<String>,
    pub skills: Vec<String>,
    pub looking_for: Vec<String>,
    pub match_score: u8,
}

impl MatchSuggestion {
    pub fn new(user: UserRecord, match_score: u8) -> Self {
        Self {
            skills: user.skills_list(),
            looking_for: user.looking_for_list(),
            user_id: user.id,
            name: user.name,
            headline: user.headline,
            founder_type: user.founder_type,
            stage_preference: user.stage_preference,
            time_zone: user.time_zone,
            commitment_level: user.commitment_level,
            match_score,
        }
    }
}
